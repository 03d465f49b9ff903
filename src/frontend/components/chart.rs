//! SVG renderings of the dashboard charts. Geometry lives in [`crate::charts`].

use leptos::prelude::*;

use crate::charts::{self, Donut, Frame};
use crate::models::ChartPoint;

const STROKE: &str = "#0071E3";

fn axis_labels(points: &[ChartPoint], frame: Frame) -> impl IntoView {
    let values = charts::values(points);
    charts::plot(&values, frame)
        .into_iter()
        .zip(points.iter().map(|p| p.label.clone()))
        .map(|((x, _), label)| {
            view! {
                <text
                    x=format!("{x:.1}")
                    y=format!("{:.1}", frame.height - 4.0)
                    text-anchor="middle"
                    font-size="12"
                    fill="#86868B"
                >
                    {label}
                </text>
            }
        })
        .collect_view()
}

#[component]
pub fn LineChart(
    points: &'static [ChartPoint],
    #[prop(optional)] height: Option<f64>,
) -> impl IntoView {
    let frame = Frame::new(420.0, height.unwrap_or(200.0), 24.0);
    let path = charts::line_path(&charts::values(points), frame);

    view! {
        <svg
            viewBox=format!("0 0 {} {}", frame.width, frame.height)
            class="w-full h-full"
            preserveAspectRatio="none"
        >
            <path d=path fill="none" stroke=STROKE stroke-width="3" stroke-linecap="round" stroke-linejoin="round"/>
            {axis_labels(points, frame)}
        </svg>
    }
}

#[component]
pub fn AreaChart(points: &'static [ChartPoint]) -> impl IntoView {
    let frame = Frame::new(560.0, 280.0, 28.0);
    let values = charts::values(points);
    let line = charts::line_path(&values, frame);
    let area = charts::area_path(&values, frame);
    let grid = (1..=3)
        .map(|i| {
            let y = frame.padding + (frame.height - 2.0 * frame.padding) * f64::from(i) / 4.0;
            view! {
                <line
                    x1=format!("{:.1}", frame.padding)
                    x2=format!("{:.1}", frame.width - frame.padding)
                    y1=format!("{y:.1}")
                    y2=format!("{y:.1}")
                    stroke="#E5E5EA"
                    stroke-dasharray="3 3"
                />
            }
        })
        .collect_view();

    view! {
        <svg viewBox=format!("0 0 {} {}", frame.width, frame.height) class="w-full h-full">
            <defs>
                <linearGradient id="colorVal" x1="0" y1="0" x2="0" y2="1">
                    <stop offset="5%" stop-color=STROKE stop-opacity="0.2"/>
                    <stop offset="95%" stop-color=STROKE stop-opacity="0"/>
                </linearGradient>
            </defs>
            {grid}
            <path d=area fill="url(#colorVal)"/>
            <path d=line fill="none" stroke=STROKE stroke-width="3"/>
            {axis_labels(points, frame)}
        </svg>
    }
}

/// Ring chart with the total in the middle and a legend underneath.
#[component]
pub fn DonutChart(
    points: &'static [ChartPoint],
    palette: &'static [&'static str],
) -> impl IntoView {
    let donut = Donut {
        cx: 100.0,
        cy: 100.0,
        outer: 80.0,
        inner: 60.0,
        pad_angle: 5.0,
    };
    let total: f64 = points.iter().map(|p| p.value).sum();
    let slices = charts::donut_slices(points, donut, palette);

    let arcs = slices
        .iter()
        .map(|slice| view! { <path d=slice.path.clone() fill=slice.color/> })
        .collect_view();
    let legend = slices
        .into_iter()
        .map(|slice| {
            view! {
                <div class="flex items-center justify-between text-sm">
                    <div class="flex items-center gap-2">
                        <span class="w-3 h-3 rounded-full" style=format!("background-color: {}", slice.color)></span>
                        <span class="text-[#1D1D1F]">{slice.label}</span>
                    </div>
                    <span class="text-[#86868B]">{format!("{:.0}", slice.value)}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div>
            <div class="h-64 relative">
                <svg viewBox="0 0 200 200" class="w-full h-full">{arcs}</svg>
                <div class="absolute inset-0 flex items-center justify-center flex-col pointer-events-none">
                    <span class="text-2xl font-bold">{charts::compact_number(total)}</span>
                    <span class="text-xs text-[#86868B]">"Total"</span>
                </div>
            </div>
            <div class="mt-4 space-y-2">{legend}</div>
        </div>
    }
}
