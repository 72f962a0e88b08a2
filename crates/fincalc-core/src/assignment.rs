//! Partial assignments of values to a formula's variables.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::formula::FormulaDefinition;

/// Maps variable names to a known number (`Some`) or "unknown" (`None`).
///
/// A name that is absent from the map reads as unknown, so an assignment
/// built with [`Assignment::for_formula`] and one built from scratch behave
/// the same for the solver.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Assignment {
    values: BTreeMap<String, Option<f64>>,
}

impl Assignment {
    /// An empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// An assignment with every variable of `formula` present and unknown.
    pub fn for_formula(formula: &FormulaDefinition) -> Self {
        formula
            .variables
            .iter()
            .filter(|v| v.is_numeric())
            .map(|v| (v.name, None))
            .collect()
    }

    /// Builder: sets `name` to a known value.
    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.set(name, Some(value));
        self
    }

    /// Builder: marks `name` as unknown.
    pub fn with_unknown(mut self, name: &str) -> Self {
        self.set(name, None);
        self
    }

    /// Sets or clears the value of `name`.
    pub fn set(&mut self, name: &str, value: Option<f64>) {
        self.values.insert(name.to_string(), value);
    }

    /// Returns the known value of `name`, or `None` if it is unknown.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied().flatten()
    }

    /// Returns `true` if `name` has a known value.
    pub fn is_known(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names of the formula's numeric variables that are unknown, in
    /// declaration order.
    pub fn unknowns<'f>(&self, formula: &'f FormulaDefinition) -> Vec<&'f str> {
        formula
            .variables
            .iter()
            .filter(|v| v.is_numeric() && !self.is_known(v.name))
            .map(|v| v.name)
            .collect()
    }

    /// Iterates over all entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Option<f64>)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (S, Option<f64>)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
