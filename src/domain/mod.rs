//! Domain Layer
//!
//! Pure computation over immutable shape values, no I/O.
//!
//! - `shapes` - capability traits (`Area`, `Volume`) and the shape variants
//! - `aggregate` - services that fold a shape sequence into a number

pub mod aggregate;
pub mod shapes;

pub use aggregate::{AreaAggregator, CubedAreaCalculator};
pub use shapes::{Area, Circle, Cube, Square, Volume};
