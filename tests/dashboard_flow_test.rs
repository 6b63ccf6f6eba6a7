//! End-to-end tab switching through the public API, without a terminal

use qcdash::app::App;
use qcdash::chart::percent::percentages;
use qcdash::chart::{ChartBoard, ChartKind, PercentOverlay};
use qcdash::controller::TabController;
use qcdash::core::Tab;
use qcdash::data::{Dataset, Record, Registry};

fn board(initial: Tab) -> TabController<ChartBoard> {
    TabController::new(
        Registry::builtin(),
        ChartBoard::new(),
        PercentOverlay::default(),
        initial,
    )
}

#[test]
fn exactly_one_tab_is_active_after_every_switch() {
    let mut ctl = board(Tab::Overview);
    for tab in [Tab::Suppliers, Tab::Overview, Tab::Performance, Tab::Complaints] {
        ctl.select_tab(tab);
        ctl.run_deferred();
        assert_eq!(ctl.tab_bar().active_count(), 1);
        assert_eq!(ctl.tab_bar().active(), tab);
    }
}

#[test]
fn performance_tab_draws_shift_bars_and_trend_lines() {
    let mut ctl = board(Tab::Overview);
    ctl.select_tab(Tab::Performance);
    ctl.run_deferred();

    let shift = ctl
        .backend()
        .chart_on(qcdash::content::fragment::SHIFT_CANVAS)
        .unwrap();
    assert_eq!(shift.spec.kind, ChartKind::Bar);
    assert_eq!(shift.spec.labels, vec!["Morning Shift", "Evening Shift"]);
    assert_eq!(shift.spec.series_by_label("onTime").unwrap().values, vec![85.0, 70.0]);
    assert_eq!(shift.spec.series_by_label("defectRate").unwrap().values, vec![8.0, 12.0]);

    let trends = ctl
        .backend()
        .chart_on(qcdash::content::fragment::TRENDS_CANVAS)
        .unwrap();
    assert_eq!(trends.spec.kind, ChartKind::Line);
    assert_eq!(trends.spec.labels, vec!["Jan", "Feb", "Mar", "Apr"]);
    assert_eq!(
        trends.spec.series_by_label("Returns").unwrap().values,
        vec![5.0, 7.0, 10.0, 15.0]
    );
    assert_eq!(
        trends.spec.series_by_label("Complaints").unwrap().values,
        vec![8.0, 10.0, 15.0, 20.0]
    );
}

#[test]
fn switching_away_leaves_no_stale_charts() {
    let mut ctl = board(Tab::Performance);
    ctl.run_deferred();
    assert_eq!(ctl.backend().len(), 2);

    ctl.select_tab(Tab::Overview);
    ctl.run_deferred();
    assert!(ctl.backend().is_empty());
    assert_eq!(ctl.content().fragment().title, "Performance Overview");
}

#[test]
fn double_switch_before_paint_draws_only_final_tab() {
    let mut ctl = board(Tab::Overview);
    ctl.select_tab(Tab::Complaints);
    ctl.select_tab(Tab::Performance);
    let run = ctl.run_deferred();
    assert_eq!(run.drawn, 2);
    assert_eq!(run.skipped, 1);
    assert!(ctl
        .backend()
        .chart_on(qcdash::content::fragment::COMPLAINTS_CANVAS)
        .is_none());
}

#[test]
fn complaint_pie_percentages_sum_to_hundred() {
    let mut ctl = board(Tab::Complaints);
    ctl.run_deferred();
    let pie = ctl
        .backend()
        .chart_on(qcdash::content::fragment::COMPLAINTS_CANVAS)
        .unwrap();
    let values = &pie.spec.series[0].values;
    let shares = percentages(values);
    assert_eq!(shares, vec![50.0, 30.0, 20.0]);
    assert!((shares.iter().sum::<f64>() - 100.0).abs() <= 0.1);
}

#[test]
fn zero_complaints_render_as_zero_percent() {
    const NONE_REPORTED: Dataset = Dataset {
        name: "customer_complaints",
        records: &[
            Record {
                label: "Damaged Goods",
                metrics: &[("value", 0.0)],
            },
            Record {
                label: "Incorrect Items",
                metrics: &[("value", 0.0)],
            },
        ],
    };
    let mut registry = Registry::builtin();
    registry.complaints = NONE_REPORTED;
    let mut ctl = TabController::new(
        registry,
        ChartBoard::new(),
        PercentOverlay::default(),
        Tab::Complaints,
    );
    let run = ctl.run_deferred();
    assert_eq!(run.failed, 0);
    let pie = ctl
        .backend()
        .chart_on(qcdash::content::fragment::COMPLAINTS_CANVAS)
        .unwrap();
    assert_eq!(percentages(&pie.spec.series[0].values), vec![0.0, 0.0]);
}

#[test]
fn cycling_wraps_both_ways() {
    let mut app = App::new(Tab::Performance, PercentOverlay::default());
    app.apply_action(qcdash::core::Action::NextTab);
    assert_eq!(app.active_tab(), Tab::Overview);
    app.apply_action(qcdash::core::Action::PrevTab);
    assert_eq!(app.active_tab(), Tab::Performance);
}
