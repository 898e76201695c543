use crate::{render::DragPayload, Hex, Layout, Point};
use serde_json::Value;

/// A single hexagon that's been placed under a [Layout]. The shape knows its
/// own hex coordinates and its pixel center, plus whatever presentational
/// metadata the caller attaches. It does **not** hold its corners: those
/// come from the layout, since they're identical for every hex in it.
///
/// The pixel center is derived from the hex and the layout, so it's cached
/// here and recomputed whenever either input changes. Use [Self::set_hex] to
/// move the shape and [Self::relayout] when the layout changes.
#[derive(Clone, Debug, PartialEq)]
pub struct HexShape {
    hex: Hex,
    pixel: Point,
    /// ID of an SVG pattern or gradient to fill the polygon with
    pub fill: Option<String>,
    /// Extra CSS class(es) for the outer group
    pub class_name: Option<String>,
    /// Inline CSS for the polygon
    pub cell_style: Option<String>,
    /// Arbitrary caller data, carried along in drag payloads
    pub data: Option<Value>,
}

impl HexShape {
    /// Class applied to the outer group of every shape
    pub const GROUP_CLASS: &'static str = "hexagon-group";
    /// Class applied to the inner group that holds the polygon
    pub const INNER_CLASS: &'static str = "hexagon";

    /// Place a hex under a layout
    pub fn new(hex: Hex, layout: &Layout) -> Self {
        Self {
            hex,
            pixel: layout.hex_to_pixel(hex),
            fill: None,
            class_name: None,
            cell_style: None,
            data: None,
        }
    }

    /// Rebuild a shape from a drag payload. The pixel center is taken from
    /// the payload as-is, i.e. it's still relative to the layout the shape was
    /// dragged out of. Call [Self::relayout] to move it into a new one.
    pub fn from_payload(payload: DragPayload) -> Self {
        Self {
            hex: payload.hex,
            pixel: payload.pixel,
            fill: payload.fill,
            class_name: payload.class_name,
            cell_style: None,
            data: payload.data,
        }
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_cell_style(mut self, cell_style: impl Into<String>) -> Self {
        self.cell_style = Some(cell_style.into());
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn hex(&self) -> Hex {
        self.hex
    }

    /// Center of this shape in pixel space
    pub fn pixel(&self) -> Point {
        self.pixel
    }

    /// Move this shape to a different hex. The pixel center is recomputed,
    /// even if the layout hasn't changed.
    pub fn set_hex(&mut self, hex: Hex, layout: &Layout) {
        self.hex = hex;
        self.relayout(layout);
    }

    /// Recompute the pixel center under a (possibly new) layout
    pub fn relayout(&mut self, layout: &Layout) {
        self.pixel = layout.hex_to_pixel(self.hex);
    }

    /// Full class list for the outer group: the base class plus the caller's
    pub fn class_names(&self) -> String {
        match self.class_name.as_deref() {
            Some(class_name) if !class_name.trim().is_empty() => {
                format!("{} {}", Self::GROUP_CLASS, class_name.trim())
            }
            _ => Self::GROUP_CLASS.to_owned(),
        }
    }

    /// The `fill` attribute value, referencing the fill by ID
    pub fn fill_ref(&self) -> Option<String> {
        self.fill.as_ref().map(|fill| format!("url(#{fill})"))
    }

    /// The `transform` attribute value that moves a polygon built from the
    /// layout's shared corners onto this shape's center
    pub fn transform(&self) -> String {
        format!(
            "translate({}, {})",
            crate::format_number(self.pixel.x),
            crate::format_number(self.pixel.y)
        )
    }

    /// Snapshot this shape for a drag operation
    pub fn drag_payload(&self) -> DragPayload {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Orientation;
    use serde_json::json;

    #[test]
    fn test_new() {
        let layout = Layout::default();
        let hex = Hex::new_qr(2.0, 0.0);
        let shape = HexShape::new(hex, &layout);
        assert_eq!(shape.hex(), hex);
        assert_eq!(shape.pixel(), layout.hex_to_pixel(hex));
    }

    #[test]
    fn test_set_hex() {
        let layout = Layout::default();
        let mut shape = HexShape::new(Hex::ORIGIN, &layout);
        assert_eq!(shape.pixel(), Point::ORIGIN);

        let hex = Hex::new_qr(0.0, 1.0);
        shape.set_hex(hex, &layout);
        assert_eq!(shape.hex(), hex);
        assert_eq!(shape.pixel(), layout.hex_to_pixel(hex));
    }

    #[test]
    fn test_relayout() {
        let layout = Layout::default();
        let hex = Hex::new_qr(1.0, 1.0);
        let mut shape = HexShape::new(hex, &layout);

        for new_layout in [
            layout.with_origin(Point::new(50.0, 50.0)),
            layout.with_size(Point::new(3.0, 3.0)),
            layout.with_spacing(1.25),
            layout.with_orientation(&Orientation::POINTY),
        ] {
            shape.relayout(&new_layout);
            assert_eq!(shape.pixel(), new_layout.hex_to_pixel(hex));
            assert_eq!(shape.hex(), hex);
        }
    }

    #[test]
    fn test_class_names() {
        let shape = HexShape::new(Hex::ORIGIN, &Layout::default());
        assert_eq!(shape.class_names(), "hexagon-group");
        assert_eq!(
            shape.clone().with_class_name("active").class_names(),
            "hexagon-group active"
        );
        assert_eq!(
            shape.with_class_name("  ").class_names(),
            "hexagon-group"
        );
    }

    #[test]
    fn test_fill_ref() {
        let shape = HexShape::new(Hex::ORIGIN, &Layout::default());
        assert_eq!(shape.fill_ref(), None);
        assert_eq!(
            shape.with_fill("pat-1").fill_ref().as_deref(),
            Some("url(#pat-1)")
        );
    }

    #[test]
    fn test_transform() {
        let shape = HexShape::new(Hex::new_qr(2.0, 0.0), &Layout::default());
        assert!(shape.transform().starts_with("translate(30, 17.32050807"));
    }

    #[test]
    fn test_payload_round_trip() {
        let shape = HexShape::new(Hex::new_qr(-1.0, 3.0), &Layout::default())
            .with_fill("water")
            .with_class_name("lake")
            .with_data(json!({"depth": 4}));
        let payload = DragPayload::decode(&shape.drag_payload().encode())
            .unwrap();
        // Cell style is presentational only, it isn't carried by the payload
        assert_eq!(HexShape::from_payload(payload), shape);
    }
}
