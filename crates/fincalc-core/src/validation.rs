//! Unknown-count validation and solve classification.
//!
//! This is the single place where an empty solver result or a wrong number
//! of blank fields becomes a user-facing error.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::assignment::Assignment;
use crate::formula::FormulaDefinition;
use crate::solver::solve;

/// Raw per-field text as typed by the user. Missing keys count as blank.
pub type RawFields = HashMap<String, String>;

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("please fill in all but one field to calculate ({unknown} fields are empty)")]
    InsufficientInputs { unknown: usize },

    #[error("could not calculate with the given inputs; please check your values")]
    Unsolvable,

    #[error("the result for '{name}' is not a finite number (check for division by zero)")]
    NonFiniteResult { name: String },

    #[error("invalid number for '{field}': {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("unknown variable: {0}")]
    UnknownVariable(String),

    #[error("formula {0} is a scenario decision helper, not a numeric solver")]
    NotNumeric(u32),
}

/// Result of a successful validation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Every field is filled; there is nothing to derive.
    NothingToCompute,
    /// The single blank field was derived.
    Solved { name: String, value: f64 },
}

/// Text that marks a field as the unknown, same as leaving it blank.
pub const UNKNOWN_MARKER: &str = "?";

/// Parses one raw field. Blank text or [`UNKNOWN_MARKER`] is unknown;
/// anything else must be a finite number.
pub fn parse_field(field: &str, raw: &str) -> Result<Option<f64>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == UNKNOWN_MARKER {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(ValidationError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Turns raw fields into an [`Assignment`] covering every numeric variable
/// of `formula`.
///
/// # Errors
///
/// [`ValidationError::UnknownVariable`] for a field the formula does not
/// declare, [`ValidationError::InvalidNumber`] for unparseable text.
pub fn parse_fields(
    formula: &FormulaDefinition,
    raw: &RawFields,
) -> Result<Assignment, ValidationError> {
    let mut names: Vec<&String> = raw.keys().collect();
    names.sort();
    if let Some(name) = names.into_iter().find(|n| !formula.declares(n)) {
        return Err(ValidationError::UnknownVariable(name.clone()));
    }

    let mut assignment = Assignment::for_formula(formula);
    for var in formula.variables.iter().filter(|v| v.is_numeric()) {
        if let Some(text) = raw.get(var.name) {
            assignment.set(var.name, parse_field(var.name, text)?);
        }
    }
    Ok(assignment)
}

/// Counts blank fields, solves when exactly one is blank, and classifies the
/// result.
///
/// # Errors
///
/// See [`ValidationError`]. Zero blanks is not an error: it yields
/// [`Outcome::NothingToCompute`].
pub fn validate_and_solve(
    formula: &FormulaDefinition,
    raw: &RawFields,
) -> Result<Outcome, ValidationError> {
    if !formula.is_numeric() {
        return Err(ValidationError::NotNumeric(formula.id));
    }

    let assignment = parse_fields(formula, raw)?;
    let unknowns = assignment.unknowns(formula);
    debug!(formula = formula.id, unknown = unknowns.len(), "validated fields");

    let target = match unknowns.as_slice() {
        [] => return Ok(Outcome::NothingToCompute),
        [single] => *single,
        many => {
            return Err(ValidationError::InsufficientInputs {
                unknown: many.len(),
            });
        }
    };

    let result = solve(formula, &assignment);
    let Some(&value) = result.get(target) else {
        return Err(ValidationError::Unsolvable);
    };

    if !value.is_finite() {
        warn!(formula = formula.id, variable = target, "non-finite result");
        return Err(ValidationError::NonFiniteResult {
            name: target.to_string(),
        });
    }

    Ok(Outcome::Solved {
        name: target.to_string(),
        value,
    })
}
