//! Shape capabilities and variants
//!
//! Two deliberately separate capabilities:
//!
//! - [`Area`]: every shape can report an area
//! - [`Volume`]: only three-dimensional shapes report a volume
//!
//! Keeping them apart means a flat shape like [`Square`] is never forced to
//! implement an operation it cannot honour. Aggregation code accepts any
//! `dyn Area`, so adding a new variant never touches the aggregator.
//!
//! The formulas are the legacy ones this library replicates (a square's
//! "area" is `length * 4`, a circle's is `radius * PI`). They are part of
//! the observable contract and must not be corrected here.

use crate::error::{PlanimeterError, PlanimeterResult};

/// Capability: report a surface area.
pub trait Area {
    /// Area of the shape, per the legacy formulas.
    fn area(&self) -> f64;
}

/// Capability: report a volume. Implemented only by 3D variants.
pub trait Volume {
    /// Volume of the shape, per the legacy formulas.
    fn volume(&self) -> f64;
}

fn finite(shape: &'static str, dimension: &'static str, value: f64) -> PlanimeterResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PlanimeterError::NonFiniteDimension {
            shape,
            dimension,
            value,
        })
    }
}

/// A square, described by its side length. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    length: f64,
}

impl Square {
    /// Create a square. Any finite length is accepted, including zero and
    /// negative values; NaN and infinities are rejected.
    pub fn new(length: f64) -> PlanimeterResult<Self> {
        Ok(Self {
            length: finite("Square", "length", length)?,
        })
    }

    /// Side length this square was constructed with.
    pub fn length(&self) -> f64 {
        self.length
    }
}

impl Area for Square {
    fn area(&self) -> f64 {
        self.length * 4.0
    }
}

/// A circle, described by its radius. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Create a circle. Any finite radius is accepted.
    pub fn new(radius: f64) -> PlanimeterResult<Self> {
        Ok(Self {
            radius: finite("Circle", "radius", radius)?,
        })
    }

    /// Radius this circle was constructed with.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Area for Circle {
    fn area(&self) -> f64 {
        self.radius * std::f64::consts::PI
    }
}

/// A cube, described by the area of one face. The only 3D variant, so the
/// only shape carrying the [`Volume`] capability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    face: f64,
}

impl Cube {
    /// Create a cube from a face area. Any finite value is accepted.
    pub fn new(face: f64) -> PlanimeterResult<Self> {
        Ok(Self {
            face: finite("Cube", "face", face)?,
        })
    }

    /// Face area this cube was constructed with.
    pub fn face(&self) -> f64 {
        self.face
    }
}

impl Area for Cube {
    fn area(&self) -> f64 {
        self.face * 6.0
    }
}

impl Volume for Cube {
    fn volume(&self) -> f64 {
        self.face * self.face * self.face * self.face
    }
}
