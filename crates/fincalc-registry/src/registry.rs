//! Lookup and listing over the formula catalogue.

use serde::Serialize;
use tracing::debug;

use fincalc_core::{Category, FormulaDefinition};

use crate::catalog::FORMULAS;

/// Error type for registry lookups.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("formula not found: {0}")]
    NotFound(u32),
}

/// Formulas belonging to one category, in id order.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub formulas: Vec<&'static FormulaDefinition>,
}

/// Read-only view over a static set of formulas.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    formulas: &'static [FormulaDefinition],
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// The compiled-in catalogue.
    pub fn builtin() -> Self {
        Self::new(FORMULAS)
    }

    pub fn new(formulas: &'static [FormulaDefinition]) -> Self {
        Self { formulas }
    }

    /// Every formula paired with its category, in category order and then
    /// by id.
    pub fn list(&self) -> impl Iterator<Item = (Category, &'static FormulaDefinition)> + use<> {
        self.groups().into_iter().flat_map(|group| {
            let category = group.category;
            group.formulas.into_iter().map(move |f| (category, f))
        })
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// Looks up a formula by id.
    pub fn get(&self, id: u32) -> Result<&'static FormulaDefinition, RegistryError> {
        debug!(id, "registry lookup");
        self.formulas
            .iter()
            .find(|f| f.id == id)
            .ok_or(RegistryError::NotFound(id))
    }

    /// All formulas grouped by category. Categories keep their fixed order;
    /// categories with no formulas are omitted.
    pub fn groups(&self) -> Vec<CategoryGroup> {
        self.grouped(|_| true)
    }

    /// Groups restricted to formulas whose name contains `term`, ignoring
    /// case. A blank term matches everything. Categories left empty by the
    /// filter are dropped.
    pub fn search(&self, term: &str) -> Vec<CategoryGroup> {
        let needle = term.trim().to_lowercase();
        self.grouped(|f| f.name.to_lowercase().contains(&needle))
    }

    fn grouped(&self, keep: impl Fn(&FormulaDefinition) -> bool) -> Vec<CategoryGroup> {
        Category::ALL
            .iter()
            .map(|&category| {
                let mut formulas: Vec<_> = self
                    .formulas
                    .iter()
                    .filter(|f| f.category == category && keep(*f))
                    .collect();
                formulas.sort_by_key(|f| f.id);
                CategoryGroup { category, formulas }
            })
            .filter(|g| !g.formulas.is_empty())
            .collect()
    }
}
