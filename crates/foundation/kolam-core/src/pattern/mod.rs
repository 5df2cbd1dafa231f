//! Pattern catalog - filename → kolam template
//!
//! Selection is deterministic: the same filename always maps to the same
//! template, across runs and across implementations, because the index comes
//! from FNV-1a rather than a per-process seeded hasher.

mod builtin;
mod catalog;
mod hash;
mod primitives;

pub use catalog::PatternCatalog;
pub use hash::fnv1a_32;
pub use primitives::{Complexity, Equations, Grid, GridKind, PatternRecord, Point};
