//! Immutable quaternions `a + bi + cj + dk` over `f64`.
//!
//! # Examples
//!
//! ```
//! use exercises::quaternion::Quaternion;
//!
//! let q = Quaternion::new(1.0, -2.0, 0.0, 1.0)?;
//!
//! assert_eq!(q.to_string(), "1.0-2.0i+k");
//! assert_eq!(q.conjugate().to_string(), "1.0+2.0i-k");
//! assert_eq!(Quaternion::I.times(&Quaternion::J)?, Quaternion::K);
//! # Ok::<(), exercises::Error>(())
//! ```

use std::fmt;

use tracing::warn;

use crate::error::{Error, Result};

/// A quaternion with real part `a` and imaginary parts `b`, `c` and `d`.
/// None of the coefficients is ever NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Quaternion {
    /// `0`
    pub const ZERO: Self = Self::from_parts(0.0, 0.0, 0.0, 0.0);
    /// `i`
    pub const I: Self = Self::from_parts(0.0, 1.0, 0.0, 0.0);
    /// `j`
    pub const J: Self = Self::from_parts(0.0, 0.0, 1.0, 0.0);
    /// `k`
    pub const K: Self = Self::from_parts(0.0, 0.0, 0.0, 1.0);

    /// Builds `a + bi + cj + dk`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCoefficient`] if any coefficient is NaN.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        if [a, b, c, d].iter().any(|x| x.is_nan()) {
            warn!(a, b, c, d, "rejecting NaN quaternion coefficient");
            return Err(Error::InvalidCoefficient);
        }

        Ok(Self::from_parts(a, b, c, d))
    }

    const fn from_parts(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// The real part.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The `i` coefficient.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// The `j` coefficient.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// The `k` coefficient.
    pub fn d(&self) -> f64 {
        self.d
    }

    /// All four coefficients, real part first.
    pub fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Component-wise sum.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCoefficient`] if opposite infinities cancel into NaN.
    pub fn plus(&self, other: &Self) -> Result<Self> {
        Self::new(
            self.a + other.a,
            self.b + other.b,
            self.c + other.c,
            self.d + other.d,
        )
    }

    /// The Hamilton product `self * other`. Not commutative.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCoefficient`] if infinities produce a NaN term.
    pub fn times(&self, other: &Self) -> Result<Self> {
        let (a1, b1, c1, d1) = (self.a, self.b, self.c, self.d);
        let (a2, b2, c2, d2) = (other.a, other.b, other.c, other.d);

        Self::new(
            a1 * a2 - b1 * b2 - c1 * c2 - d1 * d2,
            a1 * b2 + b1 * a2 + c1 * d2 - d1 * c2,
            a1 * c2 - b1 * d2 + c1 * a2 + d1 * b2,
            a1 * d2 + b1 * c2 - c1 * b2 + d1 * a2,
        )
    }

    /// `a - bi - cj - dk`
    pub fn conjugate(&self) -> Self {
        Self::from_parts(self.a, -self.b, -self.c, -self.d)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Writes non-zero terms only, in the order real, `i`, `j`, `k`. Unit
/// imaginary coefficients are written as the bare unit. Numbers always carry
/// a fractional part (`-1.0`) and switch to an exponent outside `[1e-3, 1e7)`
/// (`1.0E20`).
impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficients().iter().all(|&x| x == 0.0) {
            return f.write_str("0");
        }

        let mut has_terms = false;
        if self.a != 0.0 {
            write!(f, "{}", Coefficient(self.a))?;
            has_terms = true;
        }

        for &(coefficient, unit) in &[(self.b, 'i'), (self.c, 'j'), (self.d, 'k')] {
            if coefficient == 0.0 {
                continue;
            }
            if has_terms && coefficient > 0.0 {
                f.write_str("+")?;
            }
            if coefficient == 1.0 {
                write!(f, "{}", unit)?;
            } else if coefficient == -1.0 {
                write!(f, "-{}", unit)?;
            } else {
                write!(f, "{}{}", Coefficient(coefficient), unit)?;
            }
            has_terms = true;
        }

        Ok(())
    }
}

/// A coefficient written with a fractional part always present (`-1.0`,
/// not `-1`). Magnitudes in `[1e-3, 1e7)` are written out in full; anything
/// else uses a mantissa and an upper case exponent (`1.0E20`, `2.5E-7`).
/// Infinities are `Infinity` and `-Infinity`.
struct Coefficient(f64);

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_infinite() {
            let sign = if x < 0.0 { "-" } else { "" };
            return write!(f, "{}Infinity", sign);
        }

        let magnitude = x.abs();
        if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
            // `Debug` keeps the `.0` and only switches to an exponent far outside this range.
            return write!(f, "{:?}", x);
        }

        let scientific = format!("{:e}", x);
        let mut parts = scientific.splitn(2, 'e');
        let mantissa = parts.next().unwrap_or_default();
        let exponent = parts.next().unwrap_or_default();
        if mantissa.contains('.') {
            write!(f, "{}E{}", mantissa, exponent)
        } else {
            write!(f, "{}.0E{}", mantissa, exponent)
        }
    }
}
