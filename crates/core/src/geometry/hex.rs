//! The cube coordinate type. See the parent module documentation for more info
//! on the coordinate system.

use crate::HexError;
use derive_more::{Add, AddAssign, Display, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// A point in the hex coordinate system, in cube coordinates. Each hex has a
/// `q`, `r`, and `s` component, and **`q + r + s = 0` for every hex**. See
/// this page for info on how the cube coordinate system works:
/// https://www.redblobgames.com/grids/hexagons/#coordinates-cube
///
/// Components are stored as floats. Whole hexes (the ones that correspond to
/// a grid cell) have integer components, but fractional hexes are useful as
/// intermediate values, e.g. the output of converting a pixel back into hex
/// space before it gets rounded. Use [Self::round] to snap a fractional hex to
/// the cell that contains it.
///
/// The invariant is checked on construction (and deserialization), within a
/// small tolerance. Arithmetic between valid hexes always produces a valid
/// hex, since the sum of two zero-sum triples is zero-sum, so the operator
/// impls don't re-check.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Add,
    Sub,
    Mul,
    Neg,
    AddAssign,
    SubAssign,
    MulAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", q, r, s)]
#[serde(try_from = "CubeComponents")]
pub struct Hex {
    q: f64,
    r: f64,
    s: f64,
}

impl Hex {
    /// The hex at the center of the grid, `(0, 0, 0)`
    pub const ORIGIN: Self = Self {
        q: 0.0,
        r: 0.0,
        s: 0.0,
    };

    /// Maximum distance of `q + r + s` from zero that [Self::new] accepts
    pub const DEFAULT_TOLERANCE: f64 = 1e-6;

    /// Construct a new hex from its three cube components. Returns
    /// [HexError::InvalidCoordinate] if `q + r + s` isn't zero (within
    /// [Self::DEFAULT_TOLERANCE]), or if any component is `NaN` or infinite.
    pub fn new(q: f64, r: f64, s: f64) -> Result<Self, HexError> {
        Self::with_tolerance(q, r, s, Self::DEFAULT_TOLERANCE)
    }

    /// Same as [Self::new], but with a caller-defined tolerance for the
    /// zero-sum check. Useful for hexes that were computed through several
    /// float operations and have picked up some error along the way.
    pub fn with_tolerance(
        q: f64,
        r: f64,
        s: f64,
        tolerance: f64,
    ) -> Result<Self, HexError> {
        let finite = q.is_finite() && r.is_finite() && s.is_finite();
        if !finite || (q + r + s).abs() > tolerance {
            Err(HexError::InvalidCoordinate { q, r, s })
        } else {
            Ok(Self { q, r, s })
        }
    }

    /// Construct a new hex with the given q and r. Since q+r+s=0 for all
    /// hexes, we can derive s, so this can never fail.
    pub fn new_qr(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    /// Add another hex to this one, component-wise
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Hex) -> Hex {
        self + other
    }

    /// Subtract another hex from this one, component-wise
    pub fn subtract(self, other: Hex) -> Hex {
        self - other
    }

    /// Multiply each component by a constant factor
    pub fn scale(self, factor: f64) -> Hex {
        self * factor
    }

    /// Round a fractional hex to the whole hex that contains it.
    ///
    /// Rounding each component independently can break the invariant, e.g.
    /// `(0.4, 0.4, -0.8)` would round to `(0, 0, -1)`. To fix that, we throw
    /// away the component that moved furthest during rounding and recompute
    /// it from the other two. On ties, `q` is only reset if its error is
    /// strictly the largest, then `r` if its error beats `s`'s, otherwise `s`.
    ///
    /// https://www.redblobgames.com/grids/hexagons/#rounding
    pub fn round(self) -> Hex {
        let mut q = self.q.round();
        let mut r = self.r.round();
        let mut s = self.s.round();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        } else {
            s = -q - r;
        }

        // Normalize -0.0 so rounded hexes compare and print cleanly
        Self {
            q: q + 0.0,
            r: r + 0.0,
            s: s + 0.0,
        }
    }

    /// Distance from this hex to the origin, in grid steps
    pub fn length(self) -> f64 {
        (self.q.abs() + self.r.abs() + self.s.abs()) / 2.0
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// hops it takes to get from one to the other. 0 if the hexes are equal,
    /// 1 if they're adjacent, etc. For fractional hexes this is a fractional
    /// distance.
    pub fn distance_to(self, other: Hex) -> f64 {
        (self - other).length()
    }
}

impl Default for Hex {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// Unvalidated mirror of [Hex], used as the deserialization target so that
/// every deserialized hex goes through [Hex::new].
#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename = "Hex")]
struct CubeComponents {
    q: f64,
    r: f64,
    s: f64,
}

impl TryFrom<CubeComponents> for Hex {
    type Error = HexError;

    fn try_from(value: CubeComponents) -> Result<Self, Self::Error> {
        Self::new(value.q, value.r, value.s)
    }
}
