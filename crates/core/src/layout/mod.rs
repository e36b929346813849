//! Conversion between hex space and 2D pixel space.
//!
//! A [Layout] is an affine transform: a 2x2 [Orientation] matrix for the
//! shape of the grid, a per-axis `size` scale, and an `origin` translation.
//! The same layout converts both ways, though pixel to hex gives back a
//! [FractionalHex] since most pixels aren't dead center on a hex.
//!
//! https://www.redblobgames.com/grids/hexagons/#hex-to-pixel

mod config;
mod unit;

pub use self::{config::*, unit::*};

use crate::hex::FractionalHex;
use log::debug;
use nalgebra::Vector2;
use std::{array, f64};
use validator::Validate;

/// The mapping between hex coordinates and pixel space.
///
/// [Self::new] does no checking at all. In particular, a zero `size` makes
/// [Self::pixel_to_hex] divide by zero and hand back infinite/`NaN`
/// coordinates. Use [Self::from_config] to get validation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    pub orientation: Orientation,
    pub size: Point,
    pub origin: Point,
}

impl Layout {
    pub const fn new(
        orientation: Orientation,
        size: Point,
        origin: Point,
    ) -> Self {
        Self {
            orientation,
            size,
            origin,
        }
    }

    /// Initialize a new layout from the given config. Returns an error if the
    /// config is invalid. The error wraps [validator::ValidationErrors], so
    /// you can downcast it to see which fields failed.
    pub fn from_config(config: &LayoutConfig) -> anyhow::Result<Self> {
        config.validate()?;
        debug!(
            "Using {} layout with size {} and origin {}",
            config.orientation, config.size, config.origin
        );
        Ok(Self::new(
            config.orientation.orientation(),
            config.size,
            config.origin,
        ))
    }

    /// Get the pixel position of the center of a hex. Fractional hexes work
    /// too, which is handy for animating between hexes.
    pub fn hex_to_pixel(&self, hex: impl Into<FractionalHex>) -> Point {
        let hex = hex.into();
        let offset: Point = (self.orientation.forward()
            * Vector2::new(hex.q(), hex.r()))
        .into();
        Point::new(
            offset.x * self.size.x + self.origin.x,
            offset.y * self.size.y + self.origin.y,
        )
    }

    /// Find the (fractional) hex position of a pixel. Call
    /// [FractionalHex::round] on the output to get the hex that contains the
    /// pixel.
    pub fn pixel_to_hex(&self, point: Point) -> FractionalHex {
        let unscaled = Vector2::new(
            (point.x - self.origin.x) / self.size.x,
            (point.y - self.origin.y) / self.size.y,
        );
        let axial = self.orientation.backward() * unscaled;
        FractionalHex::new(axial.x, axial.y)
    }

    /// Get the offset from a hex's center to one of its corners. Corners are
    /// numbered the same way as [Direction](crate::Direction)s. Corner 0 is
    /// the east vertex for flat hexes, and they go counter-clockwise from
    /// there when `+y` is down.
    pub fn corner_offset(&self, corner: usize) -> Point {
        let angle = 2.0
            * f64::consts::PI
            * (self.orientation.start_angle - corner as f64)
            / 6.0;
        Point::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }

    /// Get the pixel positions of all 6 corners of a hex, in the order
    /// described by [Self::corner_offset].
    pub fn hexagon_corners(&self, hex: impl Into<FractionalHex>) -> [Point; 6] {
        let center = self.hex_to_pixel(hex);
        array::from_fn(|corner| center + self.corner_offset(corner))
    }
}
