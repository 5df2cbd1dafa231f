//! # Kolam Core
//!
//! The two pure pieces behind the kolam service:
//!
//! - [`PatternCatalog`]: a fixed, ordered list of kolam templates. A filename
//!   is hashed with FNV-1a and reduced modulo the catalog size to pick one.
//! - [`svg`]: renders grid dots and stroke paths into a 400×400 SVG document.
//!
//! ```text
//! filename ──fnv1a──▶ index ──▶ PatternRecord ──stamp──▶ AnalysisResult
//! {paths, grid_dots} ──validate──▶ SvgRequest ──render──▶ "<svg ...>"
//! ```
//!
//! Neither holds mutable state, so both are safe to call from any number of
//! request handlers at once.

pub mod analysis;
pub mod pattern;
pub mod svg;

pub use analysis::AnalysisResult;
pub use pattern::{
    fnv1a_32, Complexity, Equations, Grid, GridKind, PatternCatalog, PatternRecord, Point,
};
pub use svg::SvgRequest;

/// Result type for kolam-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kolam-core
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Pattern catalog must contain at least one record")]
    EmptyCatalog,

    #[error("Catalog parse failed: {0}")]
    CatalogParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
