//! Solid shapes and their measurements.
//!
//! ```
//! use exercises::shape::Shape;
//!
//! let crate_box = Shape::Box { width: 2.0, length: 3.0, depth: 4.0 };
//!
//! assert_eq!(crate_box.volume(), 24.0);
//! assert_eq!(crate_box.surface_area(), 52.0);
//! ```

use std::f64::consts::PI;

/// A solid whose volume and surface area can be computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// A ball of the given radius.
    Sphere {
        /// Distance from the center to the surface.
        radius: f64,
    },
    /// A rectangular cuboid.
    Box {
        /// Extent along the first axis.
        width: f64,
        /// Extent along the second axis.
        length: f64,
        /// Extent along the third axis.
        depth: f64,
    },
}

impl Shape {
    /// The space enclosed by the shape.
    pub fn volume(&self) -> f64 {
        match *self {
            Self::Sphere { radius } => 4.0 / 3.0 * PI * radius.powi(3),
            Self::Box {
                width,
                length,
                depth,
            } => width * length * depth,
        }
    }

    /// The total area of the shape's outside.
    pub fn surface_area(&self) -> f64 {
        match *self {
            Self::Sphere { radius } => 4.0 * PI * radius.powi(2),
            Self::Box {
                width,
                length,
                depth,
            } => 2.0 * (width * length + width * depth + length * depth),
        }
    }
}
