//! Property checks for the projection engine across a grid of baselines.

use revlift::domain::metrics::BaselineMetrics;
use revlift::domain::projection::ImpactProjection;
use revlift::domain::scenario::Scenario;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn baseline_grid() -> Vec<BaselineMetrics> {
    let mut grid = Vec::new();
    for leads in [0u32, 10, 150, 500, 1000] {
        for conversion in [dec!(0), dec!(1), dec!(8), dec!(50), dec!(100)] {
            for cycle in [dec!(0.9), dec!(1), dec!(6), dec!(24)] {
                for deal_size in [dec!(0), dec!(10000), dec!(75000), dec!(10000000)] {
                    grid.push(
                        BaselineMetrics::new(leads, conversion, cycle, deal_size)
                            .expect("grid values are valid"),
                    );
                }
            }
        }
    }
    grid
}

#[test]
fn identical_inputs_always_yield_identical_results() {
    for baseline in baseline_grid() {
        for scenario in Scenario::ALL {
            let first = ImpactProjection::compute(&baseline, scenario);
            let second = ImpactProjection::compute(&baseline, scenario);
            assert_eq!(first, second, "compute must be pure for {baseline:?}");
        }
    }
}

#[test]
fn projected_cycle_is_always_at_least_one_month() {
    for baseline in baseline_grid() {
        for scenario in Scenario::ALL {
            let projection = ImpactProjection::compute(&baseline, scenario);
            assert!(
                projection.projected.cycle_months >= 1,
                "cycle floor violated for {baseline:?} under {scenario}"
            );
        }
    }
}

#[test]
fn roi_is_zero_whenever_current_revenue_is_zero() {
    for baseline in baseline_grid() {
        for scenario in Scenario::ALL {
            let projection = ImpactProjection::compute(&baseline, scenario);
            if projection.current.revenue == Decimal::ZERO {
                assert_eq!(
                    projection.impact.roi_pct, 0,
                    "roi must be zero without current revenue, baseline {baseline:?}"
                );
            }
        }
    }
}

#[test]
fn roi_never_decreases_with_scenario_ambition() {
    for baseline in baseline_grid() {
        let conservative = ImpactProjection::compute(&baseline, Scenario::Conservative);
        let balanced = ImpactProjection::compute(&baseline, Scenario::Balanced);
        let aggressive = ImpactProjection::compute(&baseline, Scenario::Aggressive);

        assert!(
            conservative.impact.roi_pct <= balanced.impact.roi_pct,
            "conservative beat balanced for {baseline:?}"
        );
        assert!(
            balanced.impact.roi_pct <= aggressive.impact.roi_pct,
            "balanced beat aggressive for {baseline:?}"
        );
    }
}

#[test]
fn the_reference_example_holds() {
    let baseline = BaselineMetrics::new(500, dec!(8), dec!(6), dec!(75000)).unwrap();
    let projection = ImpactProjection::compute(&baseline, Scenario::Balanced);

    assert_eq!(projection.current.deals, 40);
    assert_eq!(projection.current.revenue, dec!(3000000));
    assert_eq!(projection.projected.cycle_months, 4);
    assert_eq!(projection.projected.deal_size, dec!(93750));
    assert_eq!(projection.projected.deals, 250);
    assert_eq!(projection.projected.revenue, dec!(23437500));
    assert_eq!(projection.impact.revenue_gain, dec!(20437500));
    assert_eq!(projection.impact.roi_pct, 681);
}
