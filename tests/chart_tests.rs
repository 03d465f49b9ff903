mod common;

#[cfg(test)]
pub mod chart_tests {
    use educonnect::calendar::{self, EventTone, GRID_CELLS};
    use educonnect::charts::{self, Donut, Frame};
    use educonnect::fixtures::{CATEGORY_DATA, CHART_COLORS, REVENUE_DATA};
    use educonnect::models::ChartPoint;

    const FRAME: Frame = Frame::new(100.0, 50.0, 10.0);

    #[test]
    fn test_plot_spans_frame() {
        let points = charts::plot(&[0.0, 5.0, 10.0], FRAME);
        assert_eq!(points, [(10.0, 40.0), (50.0, 25.0), (90.0, 10.0)]);
    }

    #[test]
    fn test_plot_single_value_is_centred() {
        assert_eq!(charts::plot(&[3.0], FRAME), [(50.0, 10.0)]);
    }

    #[test]
    fn test_plot_all_zero_stays_on_baseline() {
        let points = charts::plot(&[0.0, 0.0], FRAME);
        assert!(points.iter().all(|&(_, y)| y == 40.0));
    }

    #[test]
    fn test_line_path_success() {
        assert_eq!(
            charts::line_path(&[0.0, 10.0], FRAME),
            "M 10.0 40.0 L 90.0 10.0"
        );
        assert_eq!(charts::line_path(&[], FRAME), "");
    }

    #[test]
    fn test_area_path_closes_on_baseline() {
        assert_eq!(
            charts::area_path(&[0.0, 10.0], FRAME),
            "M 10.0 40.0 L 90.0 10.0 L 90.0 40.0 L 10.0 40.0 Z"
        );
        assert_eq!(charts::area_path(&[], FRAME), "");
    }

    #[test]
    fn test_revenue_peak_touches_top() {
        let values = charts::values(&REVENUE_DATA);
        let frame = Frame::new(560.0, 280.0, 28.0);
        let points = charts::plot(&values, frame);
        let (_, top) = points[5];
        assert_eq!(top, frame.padding);
    }

    #[test]
    fn test_donut_slices_are_proportional() {
        let donut = Donut {
            cx: 100.0,
            cy: 100.0,
            outer: 80.0,
            inner: 60.0,
            pad_angle: 5.0,
        };
        let slices = charts::donut_slices(&CATEGORY_DATA, donut, &CHART_COLORS);
        assert_eq!(slices.len(), 4);

        let total: f64 = slices.iter().map(|s| s.sweep).sum();
        assert!((total - 340.0).abs() < 1e-9);
        assert!((slices[0].sweep - 340.0 * 400.0 / 1200.0).abs() < 1e-9);
        assert_eq!(slices[1].sweep, slices[2].sweep);
        assert_eq!(slices[3].color, "#FF9F0A");
        assert!(slices.iter().all(|s| s.path.starts_with("M ") && s.path.ends_with('Z')));
    }

    #[test]
    fn test_donut_slices_empty_on_zero_total() {
        let donut = Donut {
            cx: 0.0,
            cy: 0.0,
            outer: 2.0,
            inner: 1.0,
            pad_angle: 0.0,
        };
        let points = [ChartPoint::new("a", 0.0)];
        assert!(charts::donut_slices(&points, donut, &CHART_COLORS).is_empty());
    }

    #[test]
    fn test_compact_number_success() {
        assert_eq!(charts::compact_number(1200.0), "1.2k");
        assert_eq!(charts::compact_number(3000.0), "3k");
        assert_eq!(charts::compact_number(950.0), "950");
    }

    #[test]
    fn test_month_grid_layout() {
        let grid = calendar::month_grid();
        assert_eq!(grid.len(), GRID_CELLS);

        assert_eq!((grid[0].day, grid[0].in_month), (28, false));
        assert_eq!((grid[2].day, grid[2].in_month), (30, false));
        assert_eq!((grid[3].day, grid[3].in_month), (1, true));
        assert_eq!((grid[33].day, grid[33].in_month), (31, true));
        assert_eq!((grid[34].day, grid[34].in_month), (1, false));
    }

    #[test]
    fn test_month_grid_today_and_events() {
        let grid = calendar::month_grid();
        let today: Vec<_> = grid.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].day, 24);

        let events: Vec<_> = grid
            .iter()
            .filter_map(|c| c.event.map(|e| (c.day, e.title, e.tone)))
            .collect();
        assert_eq!(
            events,
            [
                (24, "Python 101", EventTone::Blue),
                (25, "UX Design Lab", EventTone::Purple)
            ]
        );
    }

    #[test]
    fn test_upcoming_sessions_follow_today() {
        let days: Vec<_> = calendar::upcoming_sessions()
            .iter()
            .map(|s| s.day)
            .collect();
        assert_eq!(days, [25, 26, 27]);
    }
}
