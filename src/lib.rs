//! Planimeter - polymorphic shape-area aggregation and reporting
//!
//! Planimeter sums the areas of a heterogeneous shape collection and renders
//! the total in a couple of textual forms. Shapes expose their area through
//! the [`Area`] capability, so the aggregator never inspects concrete shape
//! identity and new variants slot in without touching it.
//!
//! The area and volume formulas are replicated from a legacy system and are
//! deliberately non-geometric; see [`domain::shapes`].

pub mod datasource;
pub mod domain;
pub mod error;
pub mod report;
pub mod scene;

// Re-exports for convenience
pub use datasource::{CustomerData, DataConnection, SqlConnection};
pub use domain::{Area, AreaAggregator, Circle, Cube, CubedAreaCalculator, Square, Volume};
pub use error::{PlanimeterError, PlanimeterResult};
pub use report::AreaReport;
pub use scene::{Scene, ShapeSpec};
