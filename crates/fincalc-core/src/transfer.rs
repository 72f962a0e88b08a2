//! Internal transfer pricing decision helper.
//!
//! Unlike the numeric formulas this is a rule selector: the scenario picks
//! which inputs matter, and the output is a structured recommendation rather
//! than a single derived number.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::assignment::Assignment;

/// Variable name of the scenario selector.
pub const SCENARIO: &str = "scenario";
/// Supplier's external market price (scenario 1).
pub const MARKET_PRICE: &str = "marketPrice";
/// Supplier's variable cost, the lower bound in scenario 2.
pub const SUPPLIER_VARIABLE_COST: &str = "supplierVariableCost";
/// Buyer's external purchase price, the upper bound in scenario 2.
pub const BUYER_EXTERNAL_PRICE: &str = "buyerExternalPrice";

/// Selector options, in the order the catalogue lists them.
pub const SCENARIO_OPTIONS: &[&str] = &[
    "Scenario 1: NO available capacity",
    "Scenario 2: HAS available capacity",
];

const FIXED_PRICE_NOTE: &str = "When there is NO available capacity, the supplier should charge \
     the external market price to internal customers.";

const RANGE_NOTE: &str = "When there IS available capacity, any price in this range creates \
     value for the company. The lower bound represents the supplier's variable cost, while the \
     upper bound is the external price the buyer would otherwise pay.";

const RANGE_INVALID_WARNING: &str = "The supplier's variable cost exceeds the buyer's external \
     price. Internal transfer is not economically beneficial in this case.";

/// Errors from the decision helper.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransferError {
    #[error("missing required field for this scenario: {0}")]
    MissingField(&'static str),

    #[error("invalid scenario: {0} (expected 1, 2, no-capacity or spare-capacity)")]
    InvalidScenario(String),
}

/// The two mutually exclusive capacity situations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// The supplier has no spare capacity: selling internally displaces an
    /// external sale.
    #[default]
    NoSpareCapacity,
    /// The supplier has spare capacity.
    SpareCapacity,
}

impl Scenario {
    pub const ALL: &'static [Scenario] = &[Self::NoSpareCapacity, Self::SpareCapacity];

    /// Selector label as listed in the catalogue.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoSpareCapacity => SCENARIO_OPTIONS[0],
            Self::SpareCapacity => SCENARIO_OPTIONS[1],
        }
    }

    /// Short command-line name.
    pub fn key(&self) -> &'static str {
        match self {
            Self::NoSpareCapacity => "no-capacity",
            Self::SpareCapacity => "spare-capacity",
        }
    }

    /// Fields that must be known for this scenario.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Self::NoSpareCapacity => &[MARKET_PRICE],
            Self::SpareCapacity => &[SUPPLIER_VARIABLE_COST, BUYER_EXTERNAL_PRICE],
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scenario {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .enumerate()
            .find(|(i, sc)| {
                s == sc.label()
                    || s.eq_ignore_ascii_case(sc.key())
                    || s.parse::<usize>().is_ok_and(|n| n == i + 1)
            })
            .map(|(_, sc)| sc)
            .ok_or_else(|| TransferError::InvalidScenario(s.to_string()))
    }
}

/// The numeric inputs of the helper. Each scenario reads only its own fields.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransferFields {
    pub market_price: Option<f64>,
    pub supplier_variable_cost: Option<f64>,
    pub buyer_external_price: Option<f64>,
}

impl TransferFields {
    /// Reads the helper's fields out of a generic assignment.
    pub fn from_assignment(assignment: &Assignment) -> Self {
        Self {
            market_price: assignment.get(MARKET_PRICE),
            supplier_variable_cost: assignment.get(SUPPLIER_VARIABLE_COST),
            buyer_external_price: assignment.get(BUYER_EXTERNAL_PRICE),
        }
    }
}

/// Structured output of the helper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Recommendation {
    /// Charge exactly the market price.
    FixedPrice { value: f64 },
    /// Any price in `[low, high]` creates value; `midpoint` is the balanced
    /// choice.
    Range { low: f64, high: f64, midpoint: f64 },
    /// The range is inverted: internal transfer is not beneficial.
    RangeInvalid { low: f64, high: f64 },
}

impl Recommendation {
    /// Explanatory note for the selected scenario.
    pub fn explanation(&self) -> &'static str {
        match self {
            Self::FixedPrice { .. } => FIXED_PRICE_NOTE,
            Self::Range { .. } | Self::RangeInvalid { .. } => RANGE_NOTE,
        }
    }

    /// Warning text, only for an inverted range.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            Self::RangeInvalid { .. } => Some(RANGE_INVALID_WARNING),
            _ => None,
        }
    }

    /// The recommended single price, if there is one.
    pub fn recommended_price(&self) -> Option<f64> {
        match *self {
            Self::FixedPrice { value } => Some(value),
            Self::Range { midpoint, .. } => Some(midpoint),
            Self::RangeInvalid { .. } => None,
        }
    }
}

/// Evaluates the transfer pricing rule for `scenario`.
///
/// # Errors
///
/// [`TransferError::MissingField`] when a field the scenario needs is
/// unknown. Fields belonging to the other scenario are ignored.
pub fn evaluate_transfer_pricing(
    scenario: Scenario,
    fields: &TransferFields,
) -> Result<Recommendation, TransferError> {
    match scenario {
        Scenario::NoSpareCapacity => {
            let value = fields
                .market_price
                .ok_or(TransferError::MissingField(MARKET_PRICE))?;
            Ok(Recommendation::FixedPrice { value })
        }
        Scenario::SpareCapacity => {
            let low = fields
                .supplier_variable_cost
                .ok_or(TransferError::MissingField(SUPPLIER_VARIABLE_COST))?;
            let high = fields
                .buyer_external_price
                .ok_or(TransferError::MissingField(BUYER_EXTERNAL_PRICE))?;
            if low <= high {
                Ok(Recommendation::Range {
                    low,
                    high,
                    midpoint: (low + high) / 2.0,
                })
            } else {
                Ok(Recommendation::RangeInvalid { low, high })
            }
        }
    }
}
