//! Enumeration of common areas of hexes

use crate::hex::Hex;
use std::cmp;

impl Hex {
    /// Get every hex within `radius` steps of this one, including this hex.
    /// The result forms a larger hexagon. A negative radius gives nothing, and
    /// a radius of 0 gives just this hex. See [range_len] for the number of
    /// hexes in the output.
    ///
    /// Hexes come out column by column, from lowest to highest `q`, and from
    /// lowest to highest `r` within each column.
    ///
    /// https://www.redblobgames.com/grids/hexagons/#range
    pub fn range(self, radius: i64) -> impl Iterator<Item = Hex> {
        (-radius..=radius).flat_map(move |dq| {
            // Clamp r against s too, otherwise the corners stick out into a
            // rhombus
            let dr_min = cmp::max(-radius, -dq - radius);
            let dr_max = cmp::min(radius, -dq + radius);
            (dr_min..=dr_max).map(move |dr| self + Hex::new(dq, dr))
        })
    }
}

/// Calculate the number of hexes in a [Hex::range] based on its radius. Radius
/// 0 means 1 hex, 1 is 7 hexes, 2 is 19, etc.
pub fn range_len(radius: i64) -> usize {
    if radius < 0 {
        return 0;
    }
    // Ring k has 6k hexes, so 1 + 6(1 + 2 + ... + r) = 3r^2 + 3r + 1
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}

/// Get a grid of hexes that _looks_ rectangular once it's laid out in pixel
/// space, with `width` columns of `height` hexes each. Every other column is
/// staggered, so the raw `r` values shift down by one for every two columns.
/// That's what keeps the rendered rows straight.
///
/// Hexes come out column by column, starting at `q = 0`. If either dimension
/// isn't positive, the grid is empty.
pub fn rectangle_grid(width: i64, height: i64) -> impl Iterator<Item = Hex> {
    (0..width).flat_map(move |q| {
        let q_offset = q.div_euclid(2);
        (-q_offset..height - q_offset).map(move |r| Hex::new(q, r))
    })
}
