//! Aggregation services over shape sequences
//!
//! [`AreaAggregator`] is the one real computation in this crate: fold a
//! heterogeneous shape list into the sum of its areas. It only ever sees the
//! [`Area`] capability - there is no branch on concrete shape identity, and
//! no "unknown shape counts as zero" fallback. A value that cannot report an
//! area cannot enter the aggregator in the first place.
//!
//! [`CubedAreaCalculator`] computes a different figure, `(sum of areas)^3`.
//! It is intentionally a separate type with a separately named operation:
//! it does not satisfy the aggregator's contract and must never be handed to
//! code expecting a plain area total.

use crate::domain::shapes::Area;

/// Sums the areas of an ordered shape sequence.
///
/// The sequence is fixed at construction; order does not affect the result
/// since aggregation is a commutative sum.
pub struct AreaAggregator {
    shapes: Vec<Box<dyn Area>>,
}

impl AreaAggregator {
    /// Create an aggregator over zero or more shapes.
    pub fn new(shapes: Vec<Box<dyn Area>>) -> Self {
        Self { shapes }
    }

    /// Sum of `area()` over all held shapes. Empty input yields 0.0.
    pub fn total_area(&self) -> f64 {
        self.shapes.iter().map(|shape| shape.area()).sum()
    }

    /// Number of shapes held.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// True when the aggregator holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Computes `(sum of areas)^3` over a shape sequence.
///
/// This is not an area and this type is not an [`AreaAggregator`]: the
/// incompatible semantics get their own type and operation name so a caller
/// expecting a plain area total can never receive a cubed figure.
pub struct CubedAreaCalculator {
    shapes: Vec<Box<dyn Area>>,
}

impl CubedAreaCalculator {
    /// Create a calculator over zero or more shapes.
    pub fn new(shapes: Vec<Box<dyn Area>>) -> Self {
        Self { shapes }
    }

    /// The cube of the summed areas. Empty input yields 0.0.
    pub fn cubed_area(&self) -> f64 {
        let sum: f64 = self.shapes.iter().map(|shape| shape.area()).sum();
        sum * sum * sum
    }
}
