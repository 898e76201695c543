use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};

/// A point (or offset) in 2D pixel space. See module-level docs in
/// [crate::geometry] for a description of what pixel space means.
///
/// This is used both for absolute positions (a hex's center on screen) and
/// for relative offsets (a corner relative to its hex's center), since the
/// math is identical. Both components should always be finite; nothing in
/// this crate checks for `NaN` or infinity.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The pixel-space origin, `(0, 0)`
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply each component by the matching component of another point.
    /// Used to apply a non-uniform (x/y independent) scale.
    pub fn scale(self, factor: Point) -> Self {
        Self::new(self.x * factor.x, self.y * factor.y)
    }

    /// Inverse of [Self::scale]
    pub fn unscale(self, factor: Point) -> Self {
        Self::new(self.x / factor.x, self.y / factor.y)
    }
}
