use crate::hex::{FractionalHex, Hex};
use std::iter::FusedIterator;

/// Both ends of a line get shifted by this much (on `q` and `r`) before
/// interpolating. Points that land exactly on an edge between two hexes would
/// otherwise round to whichever side float noise favors.
const LINE_NUDGE: f64 = 1e-6;

impl Hex {
    /// Get the hexes along a straight line from this hex to `other`, both ends
    /// included. The line always has exactly `distance + 1` hexes and each one
    /// is adjacent to the next.
    ///
    /// https://www.redblobgames.com/grids/hexagons/#line-drawing
    pub fn line_to(self, other: Hex) -> HexLine {
        HexLine::new(self, other)
    }
}

/// Iterator over the hexes on a line between two hexes. See [Hex::line_to].
#[derive(Clone, Debug)]
pub struct HexLine {
    start: FractionalHex,
    end: FractionalHex,
    /// Fraction of the line covered by one step
    step: f64,
    /// Index of the next hex to yield
    next: u64,
    /// Index of the last hex, which is also the distance between the ends
    last: u64,
}

impl HexLine {
    fn new(start: Hex, end: Hex) -> Self {
        let distance = start.distance_to(end);
        let nudge = |hex: Hex| {
            FractionalHex::new(
                hex.q() as f64 + LINE_NUDGE,
                hex.r() as f64 + LINE_NUDGE,
            )
        };
        Self {
            start: nudge(start),
            end: nudge(end),
            // A zero-length line still has one hex in it, don't divide by 0
            step: 1.0 / distance.max(1) as f64,
            next: 0,
            last: distance,
        }
    }
}

impl Iterator for HexLine {
    type Item = Hex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.last {
            return None;
        }
        let t = self.step * self.next as f64;
        self.next += 1;
        Some(self.start.lerp(self.end, t).round())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.last + 1).saturating_sub(self.next) as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for HexLine {}

impl FusedIterator for HexLine {}
