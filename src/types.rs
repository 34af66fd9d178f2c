//! Strongly-typed numeric primitives for wheel geometry.
//!
//! Angles are degrees with 0° pointing up and positive values sweeping
//! clockwise. They are deliberately unbounded: layout code produces negative
//! angles for days before the reference date and values above 360 for days
//! far after it, and the projector copes with both.

use std::fmt;
use std::ops::{Mul, Sub};

use glam::DVec2;

/// A point in drawing space (SVG pixels, Y grows downward).
pub type Point2D = DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Accept finite values that are zero or greater.
#[inline]
pub fn check_non_negative(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Accept finite values strictly greater than zero.
#[inline]
pub fn check_positive(val: f64) -> Result<f64, NumericError> {
    let val = check_non_negative(val)?;
    if val == 0.0 { Err(NumericError::Zero) } else { Ok(val) }
}

/// Angle in degrees. 0° is up, positive is clockwise.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    pub const HALF_TURN: Angle = Angle(180.0);

    /// Get the raw value in degrees
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Reduce into `[0, 360)`.
    #[inline]
    pub fn normalized(self) -> Angle {
        Angle(self.0.rem_euclid(360.0))
    }

    /// Radians in the standard math convention (0 = +x axis), i.e. this
    /// angle rotated back by a quarter turn.
    #[inline]
    pub fn to_screen_radians(self) -> f64 {
        (self.normalized().0 - 90.0).to_radians()
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f64) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Simple color model for SVG attributes.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Named(&'static str),
    Rgb(u8, u8, u8),
    /// Alpha in `[0, 1]`
    Rgba(u8, u8, u8, f64),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({},{},{},{})", r, g, b, a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn differences_and_scaling() {
        assert_eq!(Angle(30.0) - Angle(250.0), Angle(-220.0));
        assert_eq!(Angle(2.0) * 3.0, Angle(6.0));
        assert!(Angle(181.0) - Angle::ZERO > Angle::HALF_TURN);
    }

    #[test]
    fn normalized_wraps_negative_and_large_angles() {
        assert_eq!(Angle(-90.0).normalized(), Angle(270.0));
        assert_eq!(Angle(725.0).normalized(), Angle(5.0));
        assert_eq!(Angle(360.0).normalized(), Angle(0.0));
    }

    #[test]
    fn screen_radians_puts_zero_at_top() {
        let rad = Angle::ZERO.to_screen_radians();
        assert!((rad + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(Angle(90.0).to_screen_radians(), 0.0);
    }

    #[test]
    fn numeric_checks() {
        assert_eq!(check_positive(2.5), Ok(2.5));
        assert_eq!(check_positive(0.0), Err(NumericError::Zero));
        assert_eq!(check_positive(-1.0), Err(NumericError::Negative));
        assert_eq!(check_non_negative(0.0), Ok(0.0));
        assert_eq!(check_non_negative(f64::NAN), Err(NumericError::NaN));
        assert_eq!(check_non_negative(f64::INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::Named("black").to_string(), "black");
        assert_eq!(Color::Rgb(220, 38, 38).to_string(), "rgb(220,38,38)");
        assert_eq!(Color::Rgba(124, 58, 237, 0.4).to_string(), "rgba(124,58,237,0.4)");
    }
}
