use crate::hex::Hex;
use derive_more::Display;

/// A point in the hex coordinate system that doesn't have to sit on a hex
/// center. Like [Hex], `q + r + s = 0` always holds and `s` is derived.
///
/// These values are intermediates: they come out of interpolation and pixel
/// conversion, and go back into the integer world through [Self::round].
/// There's no `PartialEq`. Round first and compare the [Hex]es instead.
#[derive(Copy, Clone, Debug, Display)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct FractionalHex {
    q: f64,
    r: f64,
}

impl FractionalHex {
    pub const fn new(q: f64, r: f64) -> Self {
        Self { q, r }
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        -self.q - self.r
    }

    /// Linearly interpolate between this point and another. `t = 0.0` gives
    /// this point, `t = 1.0` gives `other`.
    pub fn lerp(self, other: FractionalHex, t: f64) -> Self {
        Self::new(
            self.q * (1.0 - t) + other.q * t,
            self.r * (1.0 - t) + other.r * t,
        )
    }

    /// Snap this point to the hex that contains it.
    ///
    /// Each component gets rounded on its own (half away from zero), which
    /// can knock the sum off zero. To fix that, whichever component moved the
    /// most during rounding gets thrown out and recalculated from the other
    /// two. `q` is checked first and only gets recomputed if its error is
    /// strictly the biggest, then `r` if it beats `s`, and `s` takes
    /// everything else (including ties). That order decides which side of a
    /// boundary a point lands on, so don't shuffle it around.
    pub fn round(self) -> Hex {
        let q = round_half_away(self.q());
        let r = round_half_away(self.r());
        let s = round_half_away(self.s());

        let q_diff = (q - self.q()).abs();
        let r_diff = (r - self.r()).abs();
        let s_diff = (s - self.s()).abs();

        let (q, r, s) = (q as i64, r as i64, s as i64);
        if q_diff > r_diff && q_diff > s_diff {
            Hex::new(-r - s, r)
        } else if r_diff > s_diff {
            Hex::new(q, -q - s)
        } else {
            Hex::new(q, r)
        }
    }
}

/// Add (or subtract, for negatives) a half and truncate. This is _not_ the
/// same as [f64::round] right below 0.5 and above 2^52, where the addition
/// itself rounds up.
fn round_half_away(value: f64) -> f64 {
    if value < 0.0 {
        (value - 0.5).trunc()
    } else {
        (value + 0.5).trunc()
    }
}

impl From<Hex> for FractionalHex {
    fn from(hex: Hex) -> Self {
        Self::new(hex.q() as f64, hex.r() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_round_centers() {
        for hex in [Hex::ORIGIN, Hex::new(3, -7), Hex::new(-12, 5)] {
            assert_eq!(FractionalHex::from(hex).round(), hex);
        }
        assert_eq!(FractionalHex::new(-2.1, 0.8).round(), Hex::new(-2, 1));
        assert_eq!(FractionalHex::new(0.2, 0.2).round(), Hex::ORIGIN);
    }

    #[test]
    fn test_round_fixes_largest_error() {
        // Rounds to (0, 0, -1), which is off the plane. q moved the most
        // (0.45 vs 0.3 vs 0.25) so it gets recomputed
        assert_eq!(FractionalHex::new(0.45, 0.3).round(), Hex::new(1, 0));
        // r moved the most
        assert_eq!(FractionalHex::new(0.3, 0.45).round(), Hex::new(0, 1));
        // s moved the most
        assert_eq!(FractionalHex::new(0.9, -0.2).round(), Hex::new(1, 0));
    }

    #[test]
    fn test_round_ties() {
        // q and r tie at 0.4. q has to be strictly bigger to win, so r gets
        // recomputed instead
        assert_eq!(FractionalHex::new(0.4, 0.4).round(), Hex::new(0, 1));
        // Exactly halfway between (0,0) and (1,0). q and s tie and r moved
        // the least, so s absorbs the difference
        assert_eq!(FractionalHex::new(0.5, 0.0).round(), Hex::new(1, 0));
        assert_eq!(FractionalHex::new(-0.5, 0.0).round(), Hex::new(-1, 0));
        // The largest float below 0.5. Adding 0.5 rounds up to exactly 1, so
        // this goes to (1,0), where f64::round would give the origin
        assert_eq!(
            FractionalHex::new(0.499_999_999_999_999_94, 0.0).round(),
            Hex::new(1, 0)
        );
    }

    #[test]
    fn test_round_half_away() {
        assert_eq!(round_half_away(2.5), 3.0);
        assert_eq!(round_half_away(-2.5), -3.0);
        assert_eq!(round_half_away(-0.3), 0.0);
        assert_eq!(round_half_away(0.499_999_999_999_999_94), 1.0);
        // Past 2^52, odd values pick up the half and land on the next even
        let big = 4_503_599_627_370_497.0; // 2^52 + 1
        assert_eq!(round_half_away(big), big + 1.0);
        assert_eq!(round_half_away(-big), -big - 1.0);
    }

    #[test]
    fn test_lerp() {
        let a = FractionalHex::new(-3.0, -1.0);
        let b = FractionalHex::new(3.0, -3.0);
        let mid = a.lerp(b, 0.5);
        assert_approx_eq!(mid.q(), 0.0);
        assert_approx_eq!(mid.r(), -2.0);
        assert_approx_eq!(mid.s(), 2.0);
        assert_approx_eq!(a.lerp(b, 0.0).q(), -3.0);
        assert_approx_eq!(a.lerp(b, 1.0).r(), -3.0);
    }
}
