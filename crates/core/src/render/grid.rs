use crate::{render::HexShape, Hex, Layout, Point};

/// A collection of shapes that all share one [Layout]. This is the unit that
/// gets rendered: the layout supplies the shared corner geometry, and each
/// shape supplies its own position and styling.
///
/// Config options can't be changed in place on a [Layout], so changing the
/// layout goes through [Self::set_layout], which repositions every shape.
#[derive(Clone, Debug, Default)]
pub struct GridView {
    layout: Layout,
    class_name: Option<String>,
    shapes: Vec<HexShape>,
}

impl GridView {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            class_name: None,
            shapes: Vec::new(),
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn shapes(&self) -> &[HexShape] {
        &self.shapes
    }

    /// Place a new hex in the grid, returning the new shape so the caller can
    /// style it
    pub fn add_hex(&mut self, hex: Hex) -> &mut HexShape {
        self.shapes.push(HexShape::new(hex, &self.layout));
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// Add an existing shape. Its pixel center is recomputed for this grid's
    /// layout, in case it came from somewhere else (e.g. a drop).
    pub fn add_shape(&mut self, mut shape: HexShape) {
        shape.relayout(&self.layout);
        self.shapes.push(shape);
    }

    /// Find the shape that covers a pixel, if any
    pub fn shape_at(&self, pixel: Point) -> Option<&HexShape> {
        let hex = self.layout.pixel_to_hex(pixel);
        self.shapes.iter().find(|shape| shape.hex() == hex)
    }

    /// Swap out the layout. Every shape's center is recomputed.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        for shape in &mut self.shapes {
            shape.relayout(&self.layout);
        }
    }

    /// Get the smallest box that contains every corner of every shape, as
    /// `(min, max)`. For an empty grid, this is the box around a single hex at
    /// the origin.
    pub fn bounds(&self) -> (Point, Point) {
        let offsets = *self.layout.corners();
        let mut corners = self
            .shapes
            .iter()
            .flat_map(|shape| {
                let center = shape.pixel();
                offsets.map(|offset| center + offset)
            })
            .peekable();
        if corners.peek().is_none() {
            let origin = self.layout.origin();
            let size = self.layout.size();
            return (origin - size, origin + size);
        }

        corners.fold(
            (
                Point::new(f64::INFINITY, f64::INFINITY),
                Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
            ),
            |(min, max), corner| {
                (
                    Point::new(min.x.min(corner.x), min.y.min(corner.y)),
                    Point::new(max.x.max(corner.x), max.y.max(corner.y)),
                )
            },
        )
    }
}
