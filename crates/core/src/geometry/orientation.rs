use crate::{Hex, HexError, Point};
use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};
use std::f64;
use strum::{Display, EnumIter, EnumString};

/// `f64::sqrt` isn't const, so spell out √3
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A linear transform between hex space and (unscaled) pixel space, plus the
/// angle at which a hex's first corner sits. This is what distinguishes
/// flat-topped hexes from pointy-topped ones. There are only two orientations
/// that make sense for regular hex grids, [Self::FLAT] and [Self::POINTY], so
/// you'll almost never need to build one yourself.
///
/// The forward matrix `f` maps axial `(q, r)` to a pixel offset for a hex of
/// size 1. The backward matrix `b` is its exact inverse, mapping pixel offsets
/// back to fractional `(q, r)`. `s` never participates in either direction,
/// because it's fully determined by `q` and `r`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orientation {
    f0: f64,
    f1: f64,
    f2: f64,
    f3: f64,
    b0: f64,
    b1: f64,
    b2: f64,
    b3: f64,
    /// Rotation of the first corner, in sixths of a full turn. 0.0 puts the
    /// first corner straight along +x (flat top), 0.5 rotates it by 30° (pointy
    /// top).
    start_angle: f64,
}

impl Orientation {
    /// Flat-topped hexes. Columns of hexes line up vertically.
    pub const FLAT: Self = Self {
        f0: 3.0 / 2.0,
        f1: 0.0,
        f2: SQRT_3 / 2.0,
        f3: SQRT_3,
        b0: 2.0 / 3.0,
        b1: 0.0,
        b2: -1.0 / 3.0,
        b3: SQRT_3 / 3.0,
        start_angle: 0.0,
    };

    /// Pointy-topped hexes. Rows of hexes line up horizontally.
    pub const POINTY: Self = Self {
        f0: SQRT_3,
        f1: SQRT_3 / 2.0,
        f2: 0.0,
        f3: 3.0 / 2.0,
        b0: SQRT_3 / 3.0,
        b1: -1.0 / 3.0,
        b2: 0.0,
        b3: 2.0 / 3.0,
        start_angle: 0.5,
    };

    /// How far `f·b` may stray from the identity matrix
    const INVERSE_TOLERANCE: f64 = 1e-9;

    /// Build a custom orientation. `forward` and `inverse` are both row-major
    /// 2x2 matrices. Returns [HexError::InvalidOrientation] if `inverse`
    /// isn't the inverse of `forward`, since then conversions wouldn't
    /// round-trip.
    pub fn new(
        forward: [f64; 4],
        inverse: [f64; 4],
        start_angle: f64,
    ) -> Result<Self, HexError> {
        let orientation = Self {
            f0: forward[0],
            f1: forward[1],
            f2: forward[2],
            f3: forward[3],
            b0: inverse[0],
            b1: inverse[1],
            b2: inverse[2],
            b3: inverse[3],
            start_angle,
        };
        if orientation.is_invertible() {
            Ok(orientation)
        } else {
            Err(HexError::InvalidOrientation { forward, inverse })
        }
    }

    /// The forward (hex to pixel) matrix
    pub fn forward_matrix(&self) -> Matrix2<f64> {
        Matrix2::new(self.f0, self.f1, self.f2, self.f3)
    }

    /// The backward (pixel to hex) matrix
    pub fn inverse_matrix(&self) -> Matrix2<f64> {
        Matrix2::new(self.b0, self.b1, self.b2, self.b3)
    }

    /// Check that the backward matrix undoes the forward matrix, i.e.
    /// `f·b = I`.
    pub fn is_invertible(&self) -> bool {
        let product = self.forward_matrix() * self.inverse_matrix();
        (product - Matrix2::<f64>::identity())
            .iter()
            .all(|value| value.abs() <= Self::INVERSE_TOLERANCE)
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Convert a hex to its center in pixel space, for a hex of size 1
    /// centered on the origin.
    pub fn to_pixel(&self, hex: Hex) -> Point {
        Point::new(
            self.f0 * hex.q() + self.f1 * hex.r(),
            self.f2 * hex.q() + self.f3 * hex.r(),
        )
    }

    /// Convert an unscaled pixel offset back into a (fractional) hex. This is
    /// the exact inverse of [Self::to_pixel]. The output is **not rounded**.
    pub fn to_hex(&self, point: Point) -> Hex {
        let q = self.b0 * point.x + self.b1 * point.y;
        let r = self.b2 * point.x + self.b3 * point.y;
        Hex::new_qr(q, r)
    }

    /// The angle (in radians) from a hex's center to one of its corners.
    /// Corner 0 sits at `start_angle` sixths of a turn, and each subsequent
    /// corner is another 60° along.
    pub fn corner_angle(&self, corner: usize) -> f64 {
        2.0 * f64::consts::PI * (corner as f64 + self.start_angle) / 6.0
    }
}

/// The two standard hex orientations, as they appear in configuration. Each
/// variant maps to one of the [Orientation] constants.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Eq,
    PartialEq,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrientationKind {
    /// Flat-topped hexes, see [Orientation::FLAT]
    Flat,
    /// Pointy-topped hexes, see [Orientation::POINTY]
    Pointy,
}

impl OrientationKind {
    pub fn orientation(self) -> &'static Orientation {
        match self {
            Self::Flat => &Orientation::FLAT,
            Self::Pointy => &Orientation::POINTY,
        }
    }
}

impl Default for OrientationKind {
    fn default() -> Self {
        Self::Flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_canonical_inverses() {
        for kind in OrientationKind::iter() {
            let orientation = kind.orientation();
            assert!(orientation.is_invertible(), "{kind} is not invertible");
            let product =
                orientation.forward_matrix() * orientation.inverse_matrix();
            assert_approx_eq!(product[(0, 0)], 1.0);
            assert_approx_eq!(product[(0, 1)], 0.0);
            assert_approx_eq!(product[(1, 0)], 0.0);
            assert_approx_eq!(product[(1, 1)], 1.0);
        }
    }

    #[test]
    fn test_sqrt_3() {
        assert_approx_eq!(SQRT_3, 3.0f64.sqrt(), 1e-15);
    }

    #[test]
    fn test_new() {
        let forward = [2.0, 0.0, 0.0, 4.0];
        let orientation =
            Orientation::new(forward, [0.5, 0.0, 0.0, 0.25], 0.0).unwrap();
        assert_eq!(
            orientation.to_pixel(Hex::new_qr(1.0, 1.0)),
            Point::new(2.0, 4.0)
        );

        assert!(matches!(
            Orientation::new(forward, [0.5, 0.0, 0.0, 0.5], 0.0),
            Err(HexError::InvalidOrientation { .. })
        ));
    }

    #[test]
    fn test_to_pixel() {
        let hex = Hex::new_qr(1.0, -1.0);
        let flat = Orientation::FLAT.to_pixel(hex);
        assert_approx_eq!(flat.x, 1.5);
        assert_approx_eq!(flat.y, -SQRT_3 / 2.0);

        let pointy = Orientation::POINTY.to_pixel(hex);
        assert_approx_eq!(pointy.x, SQRT_3 / 2.0);
        assert_approx_eq!(pointy.y, -1.5);
    }

    #[test]
    fn test_to_hex() {
        for kind in OrientationKind::iter() {
            let orientation = kind.orientation();
            let hex = Hex::new_qr(3.0, -7.0);
            let back = orientation.to_hex(orientation.to_pixel(hex));
            assert_approx_eq!(back.q(), hex.q());
            assert_approx_eq!(back.r(), hex.r());
            assert_approx_eq!(back.s(), hex.s());
        }
    }

    #[test]
    fn test_corner_angle() {
        assert_approx_eq!(Orientation::FLAT.corner_angle(0), 0.0);
        assert_approx_eq!(
            Orientation::FLAT.corner_angle(1),
            f64::consts::FRAC_PI_3
        );
        assert_approx_eq!(
            Orientation::POINTY.corner_angle(0),
            f64::consts::FRAC_PI_6
        );
        assert_approx_eq!(
            Orientation::POINTY.corner_angle(5),
            11.0 * f64::consts::FRAC_PI_6
        );
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(
            OrientationKind::from_str("pointy").unwrap(),
            OrientationKind::Pointy
        );
        assert_eq!(OrientationKind::Flat.to_string(), "flat");
        assert_eq!(OrientationKind::default().orientation(), &Orientation::FLAT);
    }
}
