//! Variable declarations.
//!
//! A [`VariableSpec`] is pure metadata: the solver only ever looks at
//! `name`. Labels, the computed hint and the percentage flag exist for the
//! presentation layer.

use serde::Serialize;

/// Distinguishes plain numeric inputs from enumerated selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    #[default]
    Number,
    Select,
}

/// One named quantity participating in a formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VariableSpec {
    /// Key into the assignment; unique within its formula.
    pub name: &'static str,

    /// Display label, usually with a unit suffix such as `($)`.
    pub label: &'static str,

    /// Hint that the UI may pre-mark this field as the output.
    /// Any variable can still end up being the solved one.
    pub computed_by_default: bool,

    /// Value is a whole-number percentage (12.5 means 12.5%).
    pub percentage: bool,

    pub kind: VariableKind,

    /// Legal values for a [`VariableKind::Select`] variable, in display order.
    #[serde(skip_serializing_if = "no_options")]
    pub options: &'static [&'static str],
}

fn no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

impl VariableSpec {
    /// A plain numeric input.
    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            computed_by_default: false,
            percentage: false,
            kind: VariableKind::Number,
            options: &[],
        }
    }

    /// An enumerated selector with the given options.
    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            computed_by_default: false,
            percentage: false,
            kind: VariableKind::Select,
            options,
        }
    }

    /// Marks the variable as the formula's usual output.
    pub const fn computed(self) -> Self {
        Self {
            computed_by_default: true,
            ..self
        }
    }

    /// Marks the variable as a whole-number percentage.
    pub const fn percent(self) -> Self {
        Self {
            percentage: true,
            ..self
        }
    }

    /// Returns `true` for numeric variables.
    pub fn is_numeric(&self) -> bool {
        self.kind == VariableKind::Number
    }
}
