//! This sub-module contains the basic units of the hex coordinate system. See
//! the parent module documentation for more info on the coordinate system.

use anyhow::{anyhow, Context};
use derive_more::{Add, AddAssign, Display, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{ops, str::FromStr};
use strum::{EnumIter, EnumString, IntoEnumIterator};

/// A single hexagon on the grid, referenced by its center. See module-level
/// documentation for a description of the coordinate system.
///
/// ## Implementation
///
/// Since `q + r + s = 0` for every hex, this struct only stores `q` and `r`
/// and derives `s` as needed. This also means the arithmetic operators
/// preserve the invariant for free: adding, subtracting or scaling the two
/// stored components can never push the point off the plane.
///
/// Components are `i64`s, and `s = -q - r` has to fit in one too. That rules
/// out the edges of the `i64` plane, like `(i64::MIN, 0)`. [Self::s] and the
/// arithmetic operators overflow like any other integer math outside of that,
/// while [Self::length] handles every `(q, r)` pair. Any math that goes
/// through floating point (line drawing, pixel conversion) starts losing
/// precision beyond 2^53.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
)]
#[display(fmt = "({},{})", q, r)]
pub struct Hex {
    q: i64,
    r: i64,
}

impl Hex {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a new hex with the given q and r. Since q+r+s=0 for all
    /// hexes, we can derive s from q & r.
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    pub fn q(&self) -> i64 {
        self.q
    }

    pub fn r(&self) -> i64 {
        self.r
    }

    pub fn s(&self) -> i64 {
        -self.q - self.r
    }

    /// Distance from the origin to this hex, in steps
    ///
    /// Saturates at [u64::MAX], which only the far corners of the `i64`
    /// plane can reach.
    pub fn length(&self) -> u64 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        // Widen so s can't overflow, and stay in integers since a float
        // detour would get lossy on big values
        let q = i128::from(self.q);
        let r = i128::from(self.r);
        let s = -q - r;
        // Any single step changes two of the components by one each
        let length =
            (q.unsigned_abs() + r.unsigned_abs() + s.unsigned_abs()) / 2;
        u64::try_from(length).unwrap_or(u64::MAX)
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// hops it takes to get from one to the other. 0 if the hexes are equal,
    /// 1 if they are adjacent, 2 if there is 1 hex between them, etc.
    pub fn distance_to(self, other: Hex) -> u64 {
        (self - other).length()
    }

    /// Get the hex directly adjacent to this one in the given direction
    pub fn neighbor(self, direction: Direction) -> Hex {
        self + direction.offset()
    }

    /// Get an iterator of all the hexes directly adjacent to this one, in
    /// [Direction::ALL] order. The iterator will always contain exactly 6
    /// values.
    pub fn neighbors(self) -> impl Iterator<Item = Hex> {
        Direction::iter().map(move |direction| self.neighbor(direction))
    }
}

// Scale a hex by a constant. A negative factor reflects through the origin
impl ops::Mul<i64> for Hex {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self::new(self.q * rhs, self.r * rhs)
    }
}

/// Parses the same format that [std::fmt::Display] writes, i.e. `(q,r)`. The
/// parentheses and any whitespace are optional, so `4,-10` works too.
impl FromStr for Hex {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        let (q, r) = inner.split_once(',').ok_or_else(|| {
            anyhow!("invalid hex {:?}; expected the format (q,r)", s)
        })?;
        let q = q
            .trim()
            .parse()
            .with_context(|| format!("invalid q component in hex {:?}", s))?;
        let r = r
            .trim()
            .parse()
            .with_context(|| format!("invalid r component in hex {:?}", s))?;
        Ok(Self::new(q, r))
    }
}

/// The 6 directions in which hexes can line up side-to-side. For any given
/// hex, a direction points from its center to a neighboring hex's center.
///
/// The variant order here is the canonical ordering for anything that goes
/// around a hex, including the corners in [crate::Layout]. It starts at the
/// lower right and goes counter-clockwise (on a y-down screen with flat-topped
/// hexes).
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Southeast
    SE,
    /// Northeast
    NE,
    /// North
    N,
    /// Northwest
    NW,
    /// Southwest
    SW,
    /// South
    S,
}

/// Unit offsets for each direction, indexed by the direction's discriminant
const DIRECTION_OFFSETS: [Hex; 6] = [
    Hex::new(1, 0),
    Hex::new(1, -1),
    Hex::new(0, -1),
    Hex::new(-1, 0),
    Hex::new(-1, 1),
    Hex::new(0, 1),
];

impl Direction {
    /// Every direction, in canonical order
    pub const ALL: [Self; 6] =
        [Self::SE, Self::NE, Self::N, Self::NW, Self::SW, Self::S];

    /// Get the offset that moves a hex one step in this direction
    pub const fn offset(self) -> Hex {
        DIRECTION_OFFSETS[self as usize]
    }

    /// Get the direction that is directly opposite this one
    pub const fn opposite(self) -> Self {
        Self::ALL[(self as usize + 3) % 6]
    }
}
