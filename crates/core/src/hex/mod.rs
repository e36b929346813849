//! This module holds the hex coordinate types and everything that can be
//! computed from them without leaving hex space: distances, neighbors, lines,
//! areas and visibility.
//!
//! ## Coordinate Systems
//!
//! We use the [cube coordinate system described by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! Each coordinate has three components (`q`, `r`, and `s`), and **for any
//! hex, all three components are integers and `q + r + s = 0`.** Because of
//! that constraint, only `q` and `r` are stored (the "axial" projection) and
//! `s` is always derived. There is no way to construct a [Hex] that breaks the
//! invariant.
//!
//! Fractional coordinates ([FractionalHex]) exist for the points _between_ hex
//! centers. They show up while interpolating along a line or when converting a
//! pixel back into hex space. The only way back to a [Hex] is
//! [FractionalHex::round].
//!
//! Here's how axial coordinates lay out around the origin. `+q` runs down and
//! to the right, `+r` runs straight down:
//!
//! ```text
//!           _ _
//!         /     \
//!    _ _ /(0,-1) \ _ _
//!  /     \  -r   /     \
//! /(-1,0) \ _ _ /(1,-1) \
//! \  -q   /     \       /
//!  \ _ _ / (0,0) \ _ _ /
//!  /     \       /     \
//! /(-1,1) \ _ _ / (1,0) \
//! \       /     \  +q   /
//!  \ _ _ / (0,1) \ _ _ /
//!        \  +r   /
//!         \ _ _ /
//! ```
//!
//! Nothing in this module knows about pixels. See [crate::layout] for mapping
//! hexes onto a 2D surface.

mod data_structure;
mod fractional;
mod line;
mod shape;
mod unit;
mod visibility;

pub use self::{
    data_structure::*, fractional::*, line::*, shape::*, unit::*,
};
