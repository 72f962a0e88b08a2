//! Built-in formula catalogue for fincalc.
//!
//! The catalogue is static data compiled into the binary. [`Registry`] is the
//! read-only lookup surface over it: listing by category, lookup by id, and
//! name search.

pub mod catalog;
pub mod registry;

pub use registry::{CategoryGroup, Registry, RegistryError};
