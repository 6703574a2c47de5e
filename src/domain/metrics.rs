use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for baseline metric validation
#[derive(Debug, Error, PartialEq)]
pub enum MetricsError {
    #[error("Conversion rate must be between 0% and 100%, got {value}%")]
    ConversionRateOutOfRange { value: Decimal },

    #[error("Sales cycle must be longer than zero months, got {value}")]
    NonPositiveSalesCycle { value: Decimal },

    #[error("Average deal size cannot be negative, got {value}")]
    NegativeDealSize { value: Decimal },
}

/// A customer's current, pre-product sales performance figures.
///
/// # Invariants
///
/// - `conversion_rate_pct` is in [0, 100]
/// - `sales_cycle_months` is strictly positive
/// - `average_deal_size` is non-negative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineMetrics {
    /// Qualified prospects generated per year.
    pub annual_leads: u32,
    /// Share of leads that become closed deals, in percent.
    pub conversion_rate_pct: Decimal,
    /// Average time to close, in months.
    pub sales_cycle_months: Decimal,
    /// Revenue per closed opportunity.
    pub average_deal_size: Decimal,
}

impl BaselineMetrics {
    pub fn new(
        annual_leads: u32,
        conversion_rate_pct: Decimal,
        sales_cycle_months: Decimal,
        average_deal_size: Decimal,
    ) -> Result<Self, MetricsError> {
        let metrics = Self {
            annual_leads,
            conversion_rate_pct,
            sales_cycle_months,
            average_deal_size,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    pub fn validate(&self) -> Result<(), MetricsError> {
        if self.conversion_rate_pct < Decimal::ZERO || self.conversion_rate_pct > dec!(100) {
            return Err(MetricsError::ConversionRateOutOfRange {
                value: self.conversion_rate_pct,
            });
        }
        if self.sales_cycle_months <= Decimal::ZERO {
            return Err(MetricsError::NonPositiveSalesCycle {
                value: self.sales_cycle_months,
            });
        }
        if self.average_deal_size < Decimal::ZERO {
            return Err(MetricsError::NegativeDealSize {
                value: self.average_deal_size,
            });
        }
        Ok(())
    }
}

impl Default for BaselineMetrics {
    /// The figures the calculator opens with.
    fn default() -> Self {
        Self {
            annual_leads: 500,
            conversion_rate_pct: dec!(8),
            sales_cycle_months: dec!(6),
            average_deal_size: dec!(75000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_metrics_accepted() {
        let metrics = BaselineMetrics::new(500, dec!(8), dec!(6), dec!(75000));
        assert!(metrics.is_ok());
    }

    #[test]
    fn test_zero_leads_and_zero_deal_size_are_valid() {
        assert!(BaselineMetrics::new(0, dec!(0), dec!(1), dec!(0)).is_ok());
    }

    #[test]
    fn test_conversion_rate_bounds() {
        assert!(BaselineMetrics::new(100, dec!(100), dec!(6), dec!(1000)).is_ok());
        let err = BaselineMetrics::new(100, dec!(100.5), dec!(6), dec!(1000)).unwrap_err();
        assert!(matches!(err, MetricsError::ConversionRateOutOfRange { .. }));
        let err = BaselineMetrics::new(100, dec!(-1), dec!(6), dec!(1000)).unwrap_err();
        assert!(matches!(err, MetricsError::ConversionRateOutOfRange { .. }));
    }

    #[test]
    fn test_sales_cycle_must_be_positive() {
        let err = BaselineMetrics::new(100, dec!(8), dec!(0), dec!(1000)).unwrap_err();
        assert!(matches!(err, MetricsError::NonPositiveSalesCycle { .. }));
    }

    #[test]
    fn test_deal_size_cannot_be_negative() {
        let err = BaselineMetrics::new(100, dec!(8), dec!(6), dec!(-50)).unwrap_err();
        assert!(matches!(err, MetricsError::NegativeDealSize { .. }));
    }

    #[test]
    fn test_default_baseline() {
        let metrics = BaselineMetrics::default();
        assert_eq!(metrics.annual_leads, 500);
        assert_eq!(metrics.conversion_rate_pct, dec!(8));
        assert_eq!(metrics.sales_cycle_months, dec!(6));
        assert_eq!(metrics.average_deal_size, dec!(75000));
    }
}
