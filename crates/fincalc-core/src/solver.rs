//! The solve-for-whichever-is-missing algorithm.

use std::collections::BTreeMap;

use tracing::debug;

use crate::assignment::Assignment;
use crate::formula::FormulaDefinition;

/// Newly derived values: exactly one entry on success, empty when nothing
/// could be derived.
pub type SolveResult = BTreeMap<String, f64>;

/// Walks the formula's branch table in order and evaluates the first branch
/// whose target is unknown and whose required inputs are all known.
///
/// Never fails and never mutates `assignment`. Returns an empty result when
/// no branch is eligible, which covers the zero-unknown and
/// several-unknown cases as well as decision formulas (no branches).
/// Division by zero is not guarded: the derived value may be non-finite.
pub fn solve(formula: &FormulaDefinition, assignment: &Assignment) -> SolveResult {
    let mut result = SolveResult::new();

    let Some(branch) = formula
        .branches()
        .iter()
        .find(|b| b.is_eligible(assignment))
    else {
        debug!(formula = formula.id, "no eligible branch");
        return result;
    };

    let value = branch.evaluate(assignment);
    debug!(formula = formula.id, variable = branch.target, value, "branch matched");
    result.insert(branch.target.to_string(), value);
    result
}

impl FormulaDefinition {
    /// Convenience wrapper around [`solve`].
    pub fn solve(&self, assignment: &Assignment) -> SolveResult {
        solve(self, assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::fixtures::{DECISION, PRODUCT};
    use pretty_assertions::assert_eq;

    fn single(name: &str, value: f64) -> SolveResult {
        SolveResult::from([(name.to_string(), value)])
    }

    #[test]
    fn solves_each_variable() {
        let a = Assignment::for_formula(&PRODUCT)
            .with("price", 10.0)
            .with("volume", 5.0);
        assert_eq!(solve(&PRODUCT, &a), single("total", 50.0));

        let a = Assignment::new().with("total", 50.0).with("volume", 5.0);
        assert_eq!(solve(&PRODUCT, &a), single("price", 10.0));

        let a = Assignment::new().with("total", 50.0).with("price", 10.0);
        assert_eq!(solve(&PRODUCT, &a), single("volume", 5.0));
    }

    #[test]
    fn zero_unknowns_is_empty() {
        let a = Assignment::new()
            .with("total", 50.0)
            .with("price", 10.0)
            .with("volume", 5.0);
        assert!(solve(&PRODUCT, &a).is_empty());
    }

    #[test]
    fn two_unknowns_is_empty() {
        let a = Assignment::for_formula(&PRODUCT).with("price", 10.0);
        assert!(solve(&PRODUCT, &a).is_empty());
    }

    #[test]
    fn does_not_mutate_assignment() {
        let a = Assignment::for_formula(&PRODUCT)
            .with("price", 10.0)
            .with("volume", 5.0);
        let before = a.clone();
        let _ = PRODUCT.solve(&a);
        assert_eq!(a, before);
    }

    #[test]
    fn division_by_zero_propagates() {
        let a = Assignment::new().with("total", 50.0).with("volume", 0.0);
        let r = solve(&PRODUCT, &a);
        assert!(r["price"].is_infinite());
    }

    #[test]
    fn decision_formula_has_nothing_to_solve() {
        let a = Assignment::new().with("marketPrice", 10.0);
        assert!(solve(&DECISION, &a).is_empty());
    }
}
