//! The shape layer, which sits on top of the geometry. A [HexShape] is a
//! single hex placed under a [Layout](crate::Layout), and a [GridView] is a
//! set of shapes that share one layout. Shapes can be drawn to SVG (with the
//! `svg` feature) and dragged between grids via [DragPayload].
//!
//! None of this is tied to a particular UI host. Pointer and drag/drop events
//! are forwarded in through the functions in [interaction], and the host
//! provides the [DataTransfer] that carries payloads.

mod grid;
pub mod interaction;
mod payload;
mod shape;
#[cfg(feature = "svg")]
mod svg;

pub use self::{
    grid::GridView,
    interaction::{
        DataTransfer, DropEffect, MemoryTransfer, PointerEvent, ShapeHandler,
    },
    payload::DragPayload,
    shape::HexShape,
};
#[cfg(feature = "svg")]
pub use self::svg::draw_shape;
