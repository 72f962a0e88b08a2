//! Editing state for one selected formula.
//!
//! A [`Session`] holds the raw text of each field the way a form would, so
//! that blank and filled fields can be toggled freely between solves.

use tracing::debug;

use crate::assignment::Assignment;
use crate::formula::FormulaDefinition;
use crate::transfer::{self, Recommendation, Scenario, TransferError, TransferFields};
use crate::validation::{self, Outcome, RawFields, ValidationError};

/// Errors raised while editing or evaluating a session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transfer(#[from] TransferError),

    #[error("formula {0} has no scenario selector")]
    NoScenario(u32),
}

/// The selected formula plus its in-progress field values.
#[derive(Debug, Clone)]
pub struct Session {
    formula: &'static FormulaDefinition,
    fields: RawFields,
    scenario: Scenario,
}

impl Session {
    /// Starts with every field blank and the first scenario selected.
    pub fn new(formula: &'static FormulaDefinition) -> Self {
        Self {
            formula,
            fields: RawFields::new(),
            scenario: Scenario::default(),
        }
    }

    pub fn formula(&self) -> &'static FormulaDefinition {
        self.formula
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// Raw text of `name`, if the field has been filled.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Sets a field from user text. Setting the scenario selector by name
    /// changes the scenario; blank text or `?` clears the field.
    pub fn set(&mut self, name: &str, raw: &str) -> Result<(), SessionError> {
        let Some(var) = self.formula.variable(name) else {
            return Err(ValidationError::UnknownVariable(name.to_string()).into());
        };

        if !var.is_numeric() {
            return self.set_scenario(raw);
        }

        if validation::parse_field(name, raw)?.is_none() {
            self.fields.remove(name);
        } else {
            self.fields.insert(name.to_string(), raw.trim().to_string());
        }
        Ok(())
    }

    /// Marks `name` as unknown again.
    pub fn unset(&mut self, name: &str) -> Result<(), SessionError> {
        if !self.formula.declares(name) {
            return Err(ValidationError::UnknownVariable(name.to_string()).into());
        }
        self.fields.remove(name);
        Ok(())
    }

    /// Selects a scenario from its label, number or short name.
    pub fn set_scenario(&mut self, raw: &str) -> Result<(), SessionError> {
        if self.formula.is_numeric() {
            return Err(SessionError::NoScenario(self.formula.id));
        }
        self.scenario = raw.parse()?;
        Ok(())
    }

    /// Empties every field and restores the default scenario.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.scenario = Scenario::default();
    }

    /// Parsed view of the current fields.
    pub fn assignment(&self) -> Result<Assignment, SessionError> {
        Ok(validation::parse_fields(self.formula, &self.fields)?)
    }

    /// Validates and solves. A derived value is written back into its field.
    pub fn calculate(&mut self) -> Result<Outcome, SessionError> {
        let outcome = validation::validate_and_solve(self.formula, &self.fields)?;
        if let Outcome::Solved { name, value } = &outcome {
            debug!(formula = self.formula.id, variable = %name, value, "storing result");
            self.fields.insert(name.clone(), value.to_string());
        }
        Ok(outcome)
    }

    /// Runs the decision helper with the current scenario and fields.
    pub fn evaluate_transfer(&self) -> Result<Recommendation, SessionError> {
        if self.formula.is_numeric() {
            return Err(SessionError::NoScenario(self.formula.id));
        }
        let fields = TransferFields::from_assignment(&self.assignment()?);
        Ok(transfer::evaluate_transfer_pricing(self.scenario, &fields)?)
    }
}
