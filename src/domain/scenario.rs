use anyhow::bail;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Improvement preset applied to a customer's baseline metrics.
///
/// The coefficient sets are fixed at compile time; selecting a scenario is
/// the only way to change them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Measured growth with proven results
    Conservative,
    /// Optimal balance of growth and risk
    Balanced,
    /// Maximum growth potential
    Aggressive,
}

/// Constant coefficients carried by a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioProfile {
    /// Absolute target close rate, in percent of annual leads.
    pub close_rate_pct: Decimal,
    /// Percentage cut applied to the sales cycle length.
    pub cycle_reduction_pct: Decimal,
    /// Percentage added to the average deal size.
    pub deal_increase_pct: Decimal,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::Conservative,
        Scenario::Balanced,
        Scenario::Aggressive,
    ];

    pub fn profile(&self) -> ScenarioProfile {
        match self {
            Scenario::Conservative => ScenarioProfile {
                close_rate_pct: dec!(30),
                cycle_reduction_pct: dec!(30),
                deal_increase_pct: dec!(10),
            },
            Scenario::Balanced => ScenarioProfile {
                close_rate_pct: dec!(50),
                cycle_reduction_pct: dec!(40),
                deal_increase_pct: dec!(25),
            },
            Scenario::Aggressive => ScenarioProfile {
                close_rate_pct: dec!(70),
                cycle_reduction_pct: dec!(50),
                deal_increase_pct: dec!(50),
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Conservative => "Conservative",
            Scenario::Balanced => "Balanced",
            Scenario::Aggressive => "Aggressive",
        }
    }

    /// One-line pitch shown next to the scenario selector.
    pub fn description(&self) -> &'static str {
        match self {
            Scenario::Conservative => "Measured growth with proven results",
            Scenario::Balanced => "Optimal balance of growth and risk",
            Scenario::Aggressive => "Maximum growth potential",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scenario {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "conservative" => Ok(Scenario::Conservative),
            "balanced" => Ok(Scenario::Balanced),
            "aggressive" => Ok(Scenario::Aggressive),
            _ => bail!(
                "Invalid scenario: {}. Must be 'conservative', 'balanced', or 'aggressive'",
                s
            ),
        }
    }
}
