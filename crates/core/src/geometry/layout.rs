use crate::{util, Hex, HexError, LayoutConfig, Orientation, Point};
use log::debug;
use std::array;
use validator::Validate;

/// Everything needed to convert between hex space and pixel space for one
/// grid: an orientation, where hex `(0, 0, 0)` sits on screen, how big each
/// hex is, and how spread out the hexes are.
///
/// A layout is immutable. The corner geometry depends only on the layout (not
/// on any particular hex), so it's computed once up front and shared by every
/// hex drawn with this layout. To change any field, use one of the `with_*`
/// methods, which build a new layout and recompute the corners. That way the
/// derived geometry can never go stale.
///
/// All conversions are total for finite inputs. Feeding `NaN` or infinity in
/// will get you garbage out, not an error.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    orientation: &'static Orientation,
    /// Pixel position of the center of hex `(0, 0, 0)`
    origin: Point,
    /// Independent x/y scale for each hex. Equal components give regular
    /// hexagons. This is the distance from a hex's center to its corners
    /// along each axis.
    size: Point,
    /// Multiplier on the distance between hex centers. 1.0 means hexes share
    /// edges, anything above that opens gaps between them. Corners are
    /// unaffected, so hexes keep their size.
    spacing: f64,
    /// Corner offsets relative to a hex's center, cached
    corners: [Point; 6],
    /// [Self::corners] formatted as an SVG `points` attribute, cached
    points: String,
}

impl Layout {
    /// Create a new layout. Size and spacing aren't validated here; use
    /// [Self::from_config] when the values come from outside.
    pub fn new(
        orientation: &'static Orientation,
        origin: Point,
        size: Point,
        spacing: f64,
    ) -> Self {
        let corners = array::from_fn(|corner| {
            Self::compute_corner_offset(orientation, size, corner)
        });
        let points = corners
            .iter()
            .map(|corner| {
                format!(
                    "{},{}",
                    util::format_number(corner.x),
                    util::format_number(corner.y)
                )
            })
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            orientation,
            origin,
            size,
            spacing,
            corners,
            points,
        }
    }

    /// Validate a config and build a layout from it. Returns an error if the
    /// config is invalid.
    pub fn from_config(config: LayoutConfig) -> Result<Self, HexError> {
        config.validate()?;
        debug!("Building layout from {:?}", config);
        Ok(Self::new(
            config.orientation.orientation(),
            config.origin,
            config.size,
            config.spacing,
        ))
    }

    pub fn orientation(&self) -> &'static Orientation {
        self.orientation
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Point {
        self.size
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Copy this layout with a different orientation
    pub fn with_orientation(&self, orientation: &'static Orientation) -> Self {
        Self::new(orientation, self.origin, self.size, self.spacing)
    }

    /// Copy this layout with a different origin
    pub fn with_origin(&self, origin: Point) -> Self {
        Self::new(self.orientation, origin, self.size, self.spacing)
    }

    /// Copy this layout with a different hex size
    pub fn with_size(&self, size: Point) -> Self {
        Self::new(self.orientation, self.origin, size, self.spacing)
    }

    /// Copy this layout with a different spacing
    pub fn with_spacing(&self, spacing: f64) -> Self {
        Self::new(self.orientation, self.origin, self.size, spacing)
    }

    /// Get the center of a hex, in pixel space
    pub fn hex_to_pixel(&self, hex: Hex) -> Point {
        let offset = self.orientation.to_pixel(hex);
        offset.scale(self.size) * self.spacing + self.origin
    }

    /// Convert a pixel back into hex space, **without** rounding. The output
    /// will generally be a fractional hex. Exact inverse of
    /// [Self::hex_to_pixel].
    pub fn pixel_to_fractional_hex(&self, point: Point) -> Hex {
        let offset = ((point - self.origin) / self.spacing).unscale(self.size);
        self.orientation.to_hex(offset)
    }

    /// Find the hex that contains a pixel. For any whole hex `h`,
    /// `pixel_to_hex(hex_to_pixel(h)) == h`. See [Hex::round] for how points
    /// on a border are resolved.
    pub fn pixel_to_hex(&self, point: Point) -> Hex {
        self.pixel_to_fractional_hex(point).round()
    }

    /// Get the offset from a hex's center to one of its corners. `corner`
    /// should be in `0..6`, but larger values just wrap around.
    pub fn corner_offset(&self, corner: usize) -> Point {
        self.corners[corner % 6]
    }

    fn compute_corner_offset(
        orientation: &Orientation,
        size: Point,
        corner: usize,
    ) -> Point {
        let angle = orientation.corner_angle(corner);
        Point::new(size.x * angle.cos(), size.y * angle.sin())
    }

    /// The 6 corners of a hex, relative to its center. Corners are in
    /// increasing angle order, starting from the orientation's start angle.
    /// This is the same for every hex under this layout.
    pub fn corners(&self) -> &[Point; 6] {
        &self.corners
    }

    /// The 6 corners of a particular hex, in absolute pixel space
    pub fn polygon_corners(&self, hex: Hex) -> [Point; 6] {
        let center = self.hex_to_pixel(hex);
        self.corners.map(|offset| center + offset)
    }

    /// The corners as an SVG `points` string, e.g. `"10,0 5,8.66 ..."`. Like
    /// the corners themselves, this is shared by every hex in the layout, so
    /// shapes translate a polygon with these points to their own center.
    pub fn points(&self) -> &str {
        &self.points
    }
}

impl Default for Layout {
    fn default() -> Self {
        let config = LayoutConfig::default();
        Self::new(
            config.orientation.orientation(),
            config.origin,
            config.size,
            config.spacing,
        )
    }
}
