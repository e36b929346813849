use crate::layout::{OrientationKind, Point};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that defines how hexes map onto pixel space. This is the
/// checked way to build a [Layout](crate::Layout): pass it to
/// [Layout::from_config](crate::Layout::from_config) and invalid values get
/// rejected up front, instead of turning into `NaN`s down the line.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LayoutConfig {
    /// Which way the hexes face
    pub orientation: OrientationKind,

    /// Scale factor on each axis. With a size of `(1, 1)`, the distance from
    /// a hex's center to any of its corners is 1. Negative values mirror the
    /// axis, which is fine, but zero would collapse it.
    #[validate(custom = "validate_size")]
    pub size: Point,

    /// Pixel position of the center of the hex `(0,0)`
    #[validate(custom = "validate_origin")]
    pub origin: Point,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            orientation: OrientationKind::Flat,
            size: Point::new(1.0, 1.0),
            origin: Point::default(),
        }
    }
}

fn validate_size(size: &Point) -> Result<(), ValidationError> {
    validate_origin(size)?;
    if size.x == 0.0 || size.y == 0.0 {
        return Err(ValidationError::new("zero_size"));
    }
    Ok(())
}

fn validate_origin(origin: &Point) -> Result<(), ValidationError> {
    if origin.x.is_finite() && origin.y.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("not_finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_size() {
        assert!(validate_size(&Point::new(100.0, -50.0)).is_ok());
        assert!(validate_size(&Point::new(0.0, 1.0)).is_err());
        assert!(validate_size(&Point::new(1.0, 0.0)).is_err());
        assert!(validate_size(&Point::new(f64::NAN, 1.0)).is_err());
        assert!(validate_size(&Point::new(1.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_validate_origin() {
        assert!(validate_origin(&Point::default()).is_ok());
        assert!(validate_origin(&Point::new(-3.0, 1e9)).is_ok());
        assert!(validate_origin(&Point::new(f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }
}
