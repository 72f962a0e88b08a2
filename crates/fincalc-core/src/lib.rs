//! Core types and the solving engine for the fincalc calculator.
//!
//! A formula is a fixed set of named variables plus an ordered table of
//! inverse relations. Given values for all but one variable, the solver picks
//! the first relation whose inputs are known and derives the missing value.

pub mod assignment;
pub mod category;
pub mod formula;
pub mod session;
pub mod solver;
pub mod transfer;
pub mod validation;
pub mod variable;

pub use assignment::Assignment;
pub use category::Category;
pub use formula::{Branch, Capability, FormulaDefinition, Known};
pub use solver::{SolveResult, solve};
pub use variable::{VariableKind, VariableSpec};
pub use session::{Session, SessionError};
pub use transfer::{
    Recommendation, Scenario, TransferError, TransferFields, evaluate_transfer_pricing,
};
pub use validation::{Outcome, RawFields, ValidationError, validate_and_solve};
