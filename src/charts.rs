//! SVG geometry for the dashboard charts.
//!
//! Values are plotted from a zero baseline; the largest value touches the top
//! of the drawable area. All coordinates are in the SVG user space of a
//! `viewBox="0 0 {width} {height}"`.

use std::f64::consts::PI;
use std::fmt::Write;

use crate::models::ChartPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Frame {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    fn baseline(&self) -> f64 {
        self.height - self.padding
    }
}

pub fn values(points: &[ChartPoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}

/// Maps each value to an `(x, y)` position inside `frame`.
pub fn plot(values: &[f64], frame: Frame) -> Vec<(f64, f64)> {
    let inner_w = frame.width - 2.0 * frame.padding;
    let inner_h = frame.height - 2.0 * frame.padding;
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let step = if values.len() > 1 {
        inner_w / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if values.len() == 1 {
                frame.width / 2.0
            } else {
                frame.padding + step * i as f64
            };
            let ratio = if max > 0.0 { v.max(0.0) / max } else { 0.0 };
            (x, frame.baseline() - ratio * inner_h)
        })
        .collect()
}

pub fn line_path(values: &[f64], frame: Frame) -> String {
    let mut d = String::new();
    for (i, (x, y)) in plot(values, frame).into_iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{cmd} {x:.1} {y:.1}");
    }
    d
}

/// Line path closed down to the baseline, for filled area charts.
pub fn area_path(values: &[f64], frame: Frame) -> String {
    let points = plot(values, frame);
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let base = frame.baseline();
    format!(
        "{} L {:.1} {base:.1} L {:.1} {base:.1} Z",
        line_path(values, frame),
        last.0,
        first.0
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
    pub path: String,
    /// Sweep of the slice in degrees, padding excluded.
    pub sweep: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Donut {
    pub cx: f64,
    pub cy: f64,
    pub outer: f64,
    pub inner: f64,
    /// Gap between slices in degrees.
    pub pad_angle: f64,
}

fn polar(cx: f64, cy: f64, r: f64, deg: f64) -> (f64, f64) {
    // 0 degrees points up, angles grow clockwise.
    let rad = (deg - 90.0) * PI / 180.0;
    (cx + r * rad.cos(), cy + r * rad.sin())
}

fn ring_segment(d: &Donut, start: f64, end: f64) -> String {
    let large = if end - start > 180.0 { 1 } else { 0 };
    let (ox0, oy0) = polar(d.cx, d.cy, d.outer, start);
    let (ox1, oy1) = polar(d.cx, d.cy, d.outer, end);
    let (ix1, iy1) = polar(d.cx, d.cy, d.inner, end);
    let (ix0, iy0) = polar(d.cx, d.cy, d.inner, start);
    format!(
        "M {ox0:.2} {oy0:.2} A {r:.2} {r:.2} 0 {large} 1 {ox1:.2} {oy1:.2} \
         L {ix1:.2} {iy1:.2} A {ri:.2} {ri:.2} 0 {large} 0 {ix0:.2} {iy0:.2} Z",
        r = d.outer,
        ri = d.inner,
    )
}

/// Splits the ring proportionally to each point's value. Colours cycle
/// through `palette`.
pub fn donut_slices(
    points: &[ChartPoint],
    donut: Donut,
    palette: &[&'static str],
) -> Vec<DonutSlice> {
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    if total <= 0.0 || palette.is_empty() {
        return Vec::new();
    }

    let usable = 360.0 - donut.pad_angle * points.len() as f64;
    let mut cursor = 0.0;
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let sweep = usable * p.value.max(0.0) / total;
            let start = cursor + donut.pad_angle / 2.0;
            let end = start + sweep;
            cursor += sweep + donut.pad_angle;
            DonutSlice {
                label: p.label.clone(),
                value: p.value,
                color: palette[i % palette.len()],
                path: ring_segment(&donut, start, end),
                sweep,
            }
        })
        .collect()
}

/// Compact total for the donut centre: 1200 -> "1.2k".
pub fn compact_number(value: f64) -> String {
    if value.abs() >= 1000.0 {
        let k = value / 1000.0;
        if (k.fract()).abs() < f64::EPSILON {
            format!("{k:.0}k")
        } else {
            format!("{k:.1}k")
        }
    } else {
        format!("{value:.0}")
    }
}
