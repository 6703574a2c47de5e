use crate::domain::metrics::BaselineMetrics;
use crate::domain::scenario::Scenario;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

/// What the customer closes today, derived from the baseline alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrentPerformance {
    pub deals: i64,
    pub revenue: Decimal,
}

/// What the customer is projected to close under the selected scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectedPerformance {
    pub deals: i64,
    pub revenue: Decimal,
    /// Absolute close rate applied, in percent.
    pub close_rate_pct: Decimal,
    /// Shortened cycle length, floored at one month.
    pub cycle_months: u32,
    pub deal_size: Decimal,
}

/// The delta between projected and current performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactSummary {
    pub revenue_gain: Decimal,
    pub additional_deals: i64,
    pub cycle_reduction_months: Decimal,
    /// Percentage increase of projected revenue over current revenue.
    /// Zero whenever current revenue is zero.
    pub roi_pct: i64,
}

/// Full projection for one (baseline, scenario) pair.
///
/// A pure, total function of its inputs: no hidden state, recomputed from
/// scratch on every input change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactProjection {
    pub current: CurrentPerformance,
    pub projected: ProjectedPerformance,
    pub impact: ImpactSummary,
}

/// Round half away from zero to a whole number.
fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

impl ImpactProjection {
    pub fn compute(baseline: &BaselineMetrics, scenario: Scenario) -> Self {
        let hundred = dec!(100);
        let leads = Decimal::from(baseline.annual_leads);
        let profile = scenario.profile();

        // Deal counts are rounded to whole deals before pricing; the money
        // figures inherit that granularity on purpose.
        let current_deals = round_whole(leads * baseline.conversion_rate_pct / hundred);
        let current_revenue = current_deals * baseline.average_deal_size;

        let projected_cycle = round_whole(
            baseline.sales_cycle_months * (Decimal::ONE - profile.cycle_reduction_pct / hundred),
        )
        .max(Decimal::ONE);
        let projected_deal_size = round_whole(
            baseline.average_deal_size * (Decimal::ONE + profile.deal_increase_pct / hundred),
        );
        let projected_deals = round_whole(leads * profile.close_rate_pct / hundred);
        let projected_revenue = projected_deals * projected_deal_size;

        let revenue_gain = projected_revenue - current_revenue;
        let additional_deals = (projected_deals - current_deals).to_i64().unwrap_or(0);
        let cycle_reduction = baseline.sales_cycle_months - projected_cycle;
        let roi_pct = if current_revenue > Decimal::ZERO {
            round_whole(revenue_gain / current_revenue * hundred)
                .to_i64()
                .unwrap_or(0)
        } else {
            0
        };

        Self {
            current: CurrentPerformance {
                deals: current_deals.to_i64().unwrap_or(0),
                revenue: current_revenue,
            },
            projected: ProjectedPerformance {
                deals: projected_deals.to_i64().unwrap_or(0),
                revenue: projected_revenue,
                close_rate_pct: profile.close_rate_pct,
                cycle_months: projected_cycle.to_u32().unwrap_or(1),
                deal_size: projected_deal_size,
            },
            impact: ImpactSummary {
                revenue_gain,
                additional_deals,
                cycle_reduction_months: cycle_reduction,
                roi_pct,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline(
        leads: u32,
        conversion: Decimal,
        cycle: Decimal,
        deal_size: Decimal,
    ) -> BaselineMetrics {
        BaselineMetrics::new(leads, conversion, cycle, deal_size).expect("valid baseline")
    }

    #[test]
    fn test_balanced_worked_example() {
        // 500 leads, 8% conversion, 6 month cycle, $75k deals.
        let metrics = baseline(500, dec!(8), dec!(6), dec!(75000));
        let result = ImpactProjection::compute(&metrics, Scenario::Balanced);

        assert_eq!(result.current.deals, 40);
        assert_eq!(result.current.revenue, dec!(3000000));
        assert_eq!(result.projected.cycle_months, 4);
        assert_eq!(result.projected.deal_size, dec!(93750));
        assert_eq!(result.projected.deals, 250);
        assert_eq!(result.projected.revenue, dec!(23437500));
        assert_eq!(result.impact.revenue_gain, dec!(20437500));
        assert_eq!(result.impact.additional_deals, 210);
        assert_eq!(result.impact.cycle_reduction_months, dec!(2));
        assert_eq!(result.impact.roi_pct, 681);
    }

    #[test]
    fn test_compute_is_pure() {
        let metrics = baseline(730, dec!(13), dec!(9), dec!(42500));
        let first = ImpactProjection::compute(&metrics, Scenario::Aggressive);
        let second = ImpactProjection::compute(&metrics, Scenario::Aggressive);
        assert_eq!(first, second);
    }

    #[test]
    fn test_projected_cycle_never_drops_below_one_month() {
        // 0.9 months halved rounds to zero before the floor kicks in.
        let metrics = baseline(100, dec!(10), dec!(0.9), dec!(5000));
        let result = ImpactProjection::compute(&metrics, Scenario::Aggressive);
        assert_eq!(result.projected.cycle_months, 1);

        for scenario in Scenario::ALL {
            let one_month = baseline(100, dec!(10), dec!(1), dec!(5000));
            let result = ImpactProjection::compute(&one_month, scenario);
            assert!(result.projected.cycle_months >= 1);
        }
    }

    #[test]
    fn test_roi_is_zero_without_current_revenue() {
        // No deals today: conversion rate of zero.
        let no_deals = baseline(500, dec!(0), dec!(6), dec!(75000));
        let result = ImpactProjection::compute(&no_deals, Scenario::Aggressive);
        assert_eq!(result.current.revenue, Decimal::ZERO);
        assert_eq!(result.impact.roi_pct, 0);
        // Projected revenue is still positive; the guard only affects ROI.
        assert!(result.projected.revenue > Decimal::ZERO);

        // Deals today but worthless: deal size of zero.
        let free_deals = baseline(500, dec!(8), dec!(6), dec!(0));
        let result = ImpactProjection::compute(&free_deals, Scenario::Balanced);
        assert_eq!(result.impact.roi_pct, 0);
    }

    #[test]
    fn test_roi_grows_with_scenario_ambition() {
        let metrics = baseline(500, dec!(8), dec!(6), dec!(75000));
        let conservative = ImpactProjection::compute(&metrics, Scenario::Conservative);
        let balanced = ImpactProjection::compute(&metrics, Scenario::Balanced);
        let aggressive = ImpactProjection::compute(&metrics, Scenario::Aggressive);

        assert!(conservative.impact.roi_pct <= balanced.impact.roi_pct);
        assert!(balanced.impact.roi_pct <= aggressive.impact.roi_pct);
    }

    #[test]
    fn test_zero_leads() {
        let metrics = baseline(0, dec!(50), dec!(6), dec!(75000));
        let result = ImpactProjection::compute(&metrics, Scenario::Balanced);
        assert_eq!(result.current.deals, 0);
        assert_eq!(result.projected.deals, 0);
        assert_eq!(result.impact.revenue_gain, Decimal::ZERO);
        assert_eq!(result.impact.roi_pct, 0);
    }

    #[test]
    fn test_deal_count_rounding_half_away_from_zero() {
        // 150 leads at 9% = 13.5 deals, which rounds up to 14.
        let metrics = baseline(150, dec!(9), dec!(6), dec!(1000));
        let result = ImpactProjection::compute(&metrics, Scenario::Conservative);
        assert_eq!(result.current.deals, 14);
    }
}
