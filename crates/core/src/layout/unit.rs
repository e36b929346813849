use derive_more::{Add, AddAssign, Display, Neg, Sub, SubAssign};
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use strum::EnumString;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A 2D point in pixel space. Where the axes point is up to the caller, but
/// the corner ordering of [super::Layout] is documented assuming `+y` points
/// down the screen.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    Neg,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Vector2<f64>> for Point {
    fn from(other: Vector2<f64>) -> Self {
        Self::new(other.x, other.y)
    }
}

/// The linear part of the hex-to-pixel transform. The forward matrix
/// `[f0 f1; f2 f3]` maps axial `(q, r)` to a pixel offset for hexes with a
/// size of 1, and the backward matrix `[b0 b1; b2 b3]` is its inverse.
///
/// There are only two useful orientations, [Self::POINTY] and [Self::FLAT].
/// The fields are public so you _can_ build a skewed one, but nothing checks
/// that the two matrices actually invert each other.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orientation {
    pub f0: f64,
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
    /// Angle of corner 0, in sixths of a full turn
    pub start_angle: f64,
}

impl Orientation {
    /// Hexes with a vertex at the top, laid out in horizontal rows
    pub const POINTY: Self = Self {
        f0: SQRT_3,
        f1: SQRT_3 / 2.0,
        f2: 0.0,
        f3: 3.0 / 2.0,
        b0: SQRT_3 / 3.0,
        b1: -1.0 / 3.0,
        b2: 0.0,
        b3: 2.0 / 3.0,
        start_angle: 0.5,
    };

    /// Hexes with a flat side at the top, laid out in vertical columns
    pub const FLAT: Self = Self {
        f0: 3.0 / 2.0,
        f1: 0.0,
        f2: SQRT_3 / 2.0,
        f3: SQRT_3,
        b0: 2.0 / 3.0,
        b1: 0.0,
        b2: -1.0 / 3.0,
        b3: SQRT_3 / 3.0,
        start_angle: 0.0,
    };

    /// Axial to (unscaled) pixel
    pub fn forward(&self) -> Matrix2<f64> {
        Matrix2::new(self.f0, self.f1, self.f2, self.f3)
    }

    /// (Unscaled) pixel to axial
    pub fn backward(&self) -> Matrix2<f64> {
        Matrix2::new(self.b0, self.b1, self.b2, self.b3)
    }
}

/// Names for the two preset [Orientation]s, so they can be picked from
/// config files or the command line.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    EnumString,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrientationKind {
    /// See [Orientation::POINTY]
    Pointy,
    /// See [Orientation::FLAT]
    Flat,
}

impl OrientationKind {
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Pointy => Orientation::POINTY,
            Self::Flat => Orientation::FLAT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_orientation_inverse() {
        for orientation in [Orientation::POINTY, Orientation::FLAT] {
            let product = orientation.forward() * orientation.backward();
            let identity = Matrix2::<f64>::identity();
            for (actual, expected) in product.iter().zip(identity.iter()) {
                assert_approx_eq!(*actual, *expected);
            }
        }
    }

    #[test]
    fn test_orientation_kind() {
        assert_eq!(OrientationKind::Pointy.orientation(), Orientation::POINTY);
        assert_eq!(OrientationKind::Flat.orientation(), Orientation::FLAT);
        assert_eq!(
            "flat".parse::<OrientationKind>().unwrap(),
            OrientationKind::Flat
        );
        assert_eq!(OrientationKind::Pointy.to_string(), "pointy");
        assert_tokens(
            &OrientationKind::Pointy,
            &[Token::UnitVariant {
                name: "OrientationKind",
                variant: "pointy",
            }],
        );
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.5, -2.0);
        let b = Point::new(0.5, 4.0);
        assert_eq!(a + b, Point::new(2.0, 2.0));
        assert_eq!(a - b, Point::new(1.0, -6.0));
        assert_eq!(-a, Point::new(-1.5, 2.0));
        assert_eq!(Point::from(Vector2::new(3.0, 4.0)), Point::new(3.0, 4.0));
    }
}
