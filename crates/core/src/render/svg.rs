use crate::{
    render::{GridView, HexShape},
    util::format_number,
    Layout,
};
use svg::{
    node::{
        element::{Group, Polygon},
        Comment,
    },
    Document,
};

/// Padding around the outermost corners in the view box, in pixels
const VIEW_BOX_MARGIN: f64 = 1.0;

/// Generate the SVG group for a single shape. The polygon's points come from
/// the layout and are the same for every shape, so the group gets translated
/// onto the shape's center instead.
pub fn draw_shape(shape: &HexShape, layout: &Layout) -> Group {
    let mut polygon = Polygon::new().set("points", layout.points());
    if let Some(fill) = shape.fill_ref() {
        polygon = polygon.set("fill", fill);
    }
    if let Some(cell_style) = &shape.cell_style {
        polygon = polygon.set("style", cell_style.as_str());
    }

    Group::new()
        .set("class", shape.class_names())
        .set("transform", shape.transform())
        .set("draggable", "true")
        .add(Comment::new(shape.hex().to_string())) // Readability!
        .add(
            Group::new()
                .set("class", HexShape::INNER_CLASS)
                .add(polygon),
        )
}

impl GridView {
    /// Render every shape into one group, without the surrounding document
    pub fn to_group(&self) -> Group {
        let class = match self.class_name() {
            Some(class_name) if !class_name.trim().is_empty() => {
                format!("grid {}", class_name.trim())
            }
            _ => "grid".to_owned(),
        };

        self.shapes()
            .iter()
            .fold(Group::new().set("class", class), |group, shape| {
                group.add(draw_shape(shape, self.layout()))
            })
    }

    /// Render the grid as a complete SVG document. The view box is sized to
    /// fit every shape.
    pub fn to_document(&self) -> Document {
        let (min, max) = self.bounds();
        let width = max.x - min.x + VIEW_BOX_MARGIN * 2.0;
        let height = max.y - min.y + VIEW_BOX_MARGIN * 2.0;

        Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    format_number(min.x - VIEW_BOX_MARGIN),
                    format_number(min.y - VIEW_BOX_MARGIN),
                    format_number(width),
                    format_number(height),
                ),
            )
            .add(Comment::new(format!(
                "start_angle={} origin={} size={} spacing={}",
                self.layout().orientation().start_angle(),
                self.layout().origin(),
                self.layout().size(),
                self.layout().spacing(),
            )))
            .add(self.to_group())
    }

    /// Render the grid as an SVG string
    pub fn render(&self) -> String {
        self.to_document().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hex;

    #[test]
    fn test_draw_shape() {
        let layout = Layout::default();
        let shape = HexShape::new(Hex::new_qr(2.0, 0.0), &layout)
            .with_fill("pat-1")
            .with_class_name("selected")
            .with_cell_style("stroke: black");
        let rendered = draw_shape(&shape, &layout).to_string();

        assert!(rendered.contains(r#"class="hexagon-group selected""#));
        assert!(rendered.contains(r#"transform="translate(30, 17.32050807"#));
        assert!(rendered.contains(r#"draggable="true""#));
        assert!(rendered.contains(r#"class="hexagon""#));
        assert!(rendered.contains(&format!(r#"points="{}""#, layout.points())));
        assert!(rendered.contains(r#"fill="url(#pat-1)""#));
        assert!(rendered.contains(r#"style="stroke: black""#));
        assert!(rendered.contains("(2, 0, -2)"));
    }

    #[test]
    fn test_draw_shape_plain() {
        let layout = Layout::default();
        let shape = HexShape::new(Hex::ORIGIN, &layout);
        let rendered = draw_shape(&shape, &layout).to_string();

        assert!(rendered.contains(r#"class="hexagon-group""#));
        assert!(rendered.contains(r#"transform="translate(0, 0)""#));
        assert!(!rendered.contains("fill="));
        assert!(!rendered.contains("style="));
    }

    #[test]
    fn test_render() {
        let mut grid = GridView::default().with_class_name("board");
        grid.add_hex(Hex::ORIGIN);
        grid.add_hex(Hex::new_qr(1.0, 0.0)).fill = Some("grass".into());
        let rendered = grid.render();

        assert!(rendered.starts_with("<svg"));
        assert!(rendered.contains(r#"class="grid board""#));
        assert!(rendered.contains(r#"viewBox="-11 -9.66025403784"#));
        assert_eq!(rendered.matches("<polygon").count(), 2);
        assert_eq!(rendered.matches(r#"fill="url(#grass)""#).count(), 1);
    }

    #[test]
    fn test_render_empty() {
        let rendered = GridView::default().render();
        assert!(rendered.contains(r#"viewBox="-11 -11 22 22""#));
        assert!(!rendered.contains("<polygon"));
    }
}
