use crate::domain::metrics::BaselineMetrics;
use crate::domain::projection::ImpactProjection;
use crate::domain::scenario::Scenario;
use rust_decimal::Decimal;
use tracing::debug;

// Input widget ranges. The calculator never sees a value outside these.
pub const LEADS_MIN: u32 = 10;
pub const LEADS_MAX: u32 = 1000;
pub const LEADS_STEP: u32 = 10;

pub const CONVERSION_MIN: u32 = 0;
pub const CONVERSION_MAX: u32 = 100;

pub const CYCLE_MIN: u32 = 1;
pub const CYCLE_MAX: u32 = 24;

pub const DEAL_SIZE_MIN: u64 = 10_000;
pub const DEAL_SIZE_MAX: u64 = 10_000_000;
pub const DEAL_SIZE_STEP: u64 = 5_000;

/// Owns the calculator's form values and keeps the projection in sync.
///
/// Every setter clamps and step-snaps its input, then recomputes; the
/// projection is never stale and never stored anywhere else.
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    baseline: BaselineMetrics,
    scenario: Scenario,
    projection: ImpactProjection,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorSession {
    pub fn new() -> Self {
        let baseline = BaselineMetrics::default();
        let scenario = Scenario::Balanced;
        let projection = ImpactProjection::compute(&baseline, scenario);
        Self {
            baseline,
            scenario,
            projection,
        }
    }

    pub fn baseline(&self) -> &BaselineMetrics {
        &self.baseline
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    pub fn projection(&self) -> &ImpactProjection {
        &self.projection
    }

    pub fn set_annual_leads(&mut self, leads: u32) {
        self.baseline.annual_leads =
            snap(leads as u64, LEADS_MIN as u64, LEADS_MAX as u64, LEADS_STEP as u64) as u32;
        self.recompute();
    }

    pub fn set_conversion_rate_pct(&mut self, pct: u32) {
        let pct = pct.clamp(CONVERSION_MIN, CONVERSION_MAX);
        self.baseline.conversion_rate_pct = Decimal::from(pct);
        self.recompute();
    }

    pub fn set_sales_cycle_months(&mut self, months: u32) {
        let months = months.clamp(CYCLE_MIN, CYCLE_MAX);
        self.baseline.sales_cycle_months = Decimal::from(months);
        self.recompute();
    }

    pub fn set_average_deal_size(&mut self, dollars: u64) {
        let dollars = snap(dollars, DEAL_SIZE_MIN, DEAL_SIZE_MAX, DEAL_SIZE_STEP);
        self.baseline.average_deal_size = Decimal::from(dollars);
        self.recompute();
    }

    pub fn set_scenario(&mut self, scenario: Scenario) {
        self.scenario = scenario;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.projection = ImpactProjection::compute(&self.baseline, self.scenario);
        debug!(
            "Recomputed projection: scenario={}, roi={}%",
            self.scenario, self.projection.impact.roi_pct
        );
    }
}

/// Clamp into [min, max] and round to the nearest step above min.
fn snap(value: u64, min: u64, max: u64, step: u64) -> u64 {
    let clamped = value.clamp(min, max);
    let snapped = min + (clamped - min + step / 2) / step * step;
    snapped.min(max)
}
