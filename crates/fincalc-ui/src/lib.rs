//! Terminal output components for fincalc.
//!
//! Provides Ayu-themed colour styling, terminal detection, number
//! formatting and the formula card shown by `fincalc show`.

pub mod card;
pub mod format;
pub mod styles;
pub mod terminal;
