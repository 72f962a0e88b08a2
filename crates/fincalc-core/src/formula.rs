//! Formula definitions and their inverse-relation branch tables.

use std::fmt;

use serde::Serialize;

use crate::assignment::Assignment;
use crate::category::Category;
use crate::variable::VariableSpec;

/// Read-only view of the known values handed to a branch's compute function.
///
/// A branch only runs once every name in [`Branch::requires`] is known, so
/// [`Known::get`] never has to report absence. A name outside the required
/// set reads as `NaN`, which surfaces as a non-finite result.
#[derive(Debug, Clone, Copy)]
pub struct Known<'a> {
    assignment: &'a Assignment,
}

impl<'a> Known<'a> {
    pub fn new(assignment: &'a Assignment) -> Self {
        Self { assignment }
    }

    /// The value of `name`.
    pub fn get(&self, name: &str) -> f64 {
        self.assignment.get(name).unwrap_or(f64::NAN)
    }

    /// The value of a whole-number percentage variable as a ratio (`12.5` -> `0.125`).
    pub fn ratio(&self, name: &str) -> f64 {
        self.get(name) / 100.0
    }
}

/// Computes the target of a branch from the known inputs.
pub type Compute = fn(&Known<'_>) -> f64;

/// One inverse relation: "if `target` is unknown and every `requires` name is
/// known, the target equals `compute(known)`".
#[derive(Clone, Copy)]
pub struct Branch {
    pub target: &'static str,
    pub requires: &'static [&'static str],
    pub compute: Compute,
}

impl Branch {
    /// Returns `true` if this branch can fire for `assignment`.
    pub fn is_eligible(&self, assignment: &Assignment) -> bool {
        !assignment.is_known(self.target) && self.requires.iter().all(|n| assignment.is_known(n))
    }

    /// Runs the compute function. The caller checks eligibility first.
    pub fn evaluate(&self, assignment: &Assignment) -> f64 {
        (self.compute)(&Known::new(assignment))
    }
}

impl fmt::Debug for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Branch")
            .field("target", &self.target)
            .field("requires", &self.requires)
            .finish_non_exhaustive()
    }
}

/// What a formula can do for its caller.
#[derive(Debug, Clone, Copy)]
pub enum Capability {
    /// Solve for whichever single variable is missing, using the branch
    /// table in order.
    NumericSolver(&'static [Branch]),
    /// Select a recommendation from a scenario and its inputs (transfer
    /// pricing). Has no solve-for-missing semantics.
    ScenarioDecision,
}

impl Capability {
    /// Stable tag used in listings and JSON output.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::NumericSolver(_) => "numeric-solver",
            Self::ScenarioDecision => "scenario-decision",
        }
    }
}

impl Serialize for Capability {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

/// An immutable catalogue entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormulaDefinition {
    /// Globally unique, never reused.
    pub id: u32,
    pub name: &'static str,
    /// The relation written out for display.
    pub description: &'static str,
    pub category: Category,
    /// Declaration order is display order and branch order.
    pub variables: &'static [VariableSpec],
    pub capability: Capability,
}

impl FormulaDefinition {
    /// Looks up a declared variable by name.
    pub fn variable(&self, name: &str) -> Option<&'static VariableSpec> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Returns `true` if `name` is a declared variable.
    pub fn declares(&self, name: &str) -> bool {
        self.variable(name).is_some()
    }

    /// The branch table, empty for decision formulas.
    pub fn branches(&self) -> &'static [Branch] {
        match self.capability {
            Capability::NumericSolver(branches) => branches,
            Capability::ScenarioDecision => &[],
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.capability, Capability::NumericSolver(_))
    }

    /// Variables pre-marked as the usual output.
    pub fn default_outputs(&self) -> impl Iterator<Item = &'static VariableSpec> {
        self.variables.iter().filter(|v| v.computed_by_default)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! A small formula used by unit tests across the crate.

    use super::*;

    const VARS: &[VariableSpec] = &[
        VariableSpec::number("total", "Total ($)").computed(),
        VariableSpec::number("price", "Price ($)"),
        VariableSpec::number("volume", "Volume (units)"),
    ];

    const BRANCHES: &[Branch] = &[
        Branch {
            target: "total",
            requires: &["price", "volume"],
            compute: |k| k.get("price") * k.get("volume"),
        },
        Branch {
            target: "price",
            requires: &["total", "volume"],
            compute: |k| k.get("total") / k.get("volume"),
        },
        Branch {
            target: "volume",
            requires: &["total", "price"],
            compute: |k| k.get("total") / k.get("price"),
        },
    ];

    pub(crate) const PRODUCT: FormulaDefinition = FormulaDefinition {
        id: 900,
        name: "Product",
        description: "Total = Price x Volume",
        category: Category::BasicProfitability,
        variables: VARS,
        capability: Capability::NumericSolver(BRANCHES),
    };

    const DECISION_VARS: &[VariableSpec] = &[
        VariableSpec::select("scenario", "Scenario", &["one", "two"]),
        VariableSpec::number("marketPrice", "Market Price ($)"),
        VariableSpec::number("supplierVariableCost", "Supplier's Variable Cost ($)"),
        VariableSpec::number("buyerExternalPrice", "Buyer's External Purchase Price ($)"),
    ];

    pub(crate) const DECISION: FormulaDefinition = FormulaDefinition {
        id: 901,
        name: "Decision",
        description: "Pick a scenario",
        category: Category::InternalPricing,
        variables: DECISION_VARS,
        capability: Capability::ScenarioDecision,
    };
}
