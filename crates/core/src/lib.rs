//! A toolkit for hexagonal grids. This crate covers hex coordinates and the
//! math you can do with them (distances, neighbors, lines, areas), plus
//! visibility queries over a set of opaque hexes and the mapping between hex
//! space and 2D pixel space.
//!
//! ```
//! use hexgrid::{Hex, HexSet, Layout, LayoutConfig};
//!
//! let source = Hex::new(1, 1);
//! let walls: HexSet =
//!     vec![Hex::new(2, 0), Hex::new(3, 0)].into_iter().collect();
//! let visible: Vec<Hex> = source
//!     .field_of_view(hexgrid::rectangle_grid(6, 4), &walls)
//!     .collect();
//! assert_eq!(visible.len(), 16);
//!
//! let layout = Layout::from_config(&LayoutConfig::default()).unwrap();
//! let center = layout.hex_to_pixel(source);
//! assert_eq!(layout.pixel_to_hex(center).round(), source);
//! ```
//!
//! See [hex] for details on the coordinate system, and [layout] for pixel
//! conversion.

pub mod hex;
pub mod layout;
pub mod util;

pub use crate::{
    hex::{
        range_len, rectangle_grid, Direction, FractionalHex, Hex, HexLine,
        HexSet,
    },
    layout::{Layout, LayoutConfig, Orientation, OrientationKind, Point},
    util::hex_list,
};
