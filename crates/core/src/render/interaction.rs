//! Pointer and drag/drop dispatch for shapes. This is transport-agnostic:
//! whatever is hosting the shapes (a browser, a native UI toolkit, a test)
//! translates its own events into calls to the functions here, and provides
//! a [DataTransfer] to carry drag payloads between the dragged shape and the
//! drop target.

use crate::render::{DragPayload, HexShape};
use log::{debug, warn};
use std::collections::HashMap;
use strum::{Display, EnumString};

/// Callbacks for shape interactions. Every method has a no-op default, so
/// implementors only override what they care about.
pub trait ShapeHandler {
    fn on_mouse_enter(&mut self, _shape: &HexShape) {}

    fn on_mouse_over(&mut self, _shape: &HexShape) {}

    fn on_mouse_leave(&mut self, _shape: &HexShape) {}

    fn on_click(&mut self, _shape: &HexShape) {}

    /// Called after the shape's payload has been written to the transfer
    fn on_drag_start(&mut self, _shape: &HexShape) {}

    /// Called on the dragged shape once the drag is over. `success` is
    /// whether any target accepted the drop.
    fn on_drag_end(&mut self, _shape: &HexShape, _success: bool) {}

    fn on_drag_over(&mut self, _shape: &HexShape) {}

    /// Called on the drop target, with the dragged shape rebuilt from its
    /// payload
    fn on_drop(&mut self, _target: &HexShape, _source: HexShape) {}
}

/// Simple pointer events, i.e. everything that isn't part of drag/drop
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum PointerEvent {
    MouseEnter,
    MouseOver,
    MouseLeave,
    Click,
    DragOver,
}

/// What the drop target did with the dragged data. Mirrors the HTML drag and
/// drop `dropEffect` values.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum DropEffect {
    /// The drop was rejected (or never happened)
    None,
    Copy,
    Move,
    Link,
}

impl Default for DropEffect {
    fn default() -> Self {
        Self::None
    }
}

/// Carrier for data during a drag operation, keyed by string
pub trait DataTransfer {
    fn set_data(&mut self, key: &str, value: String);

    /// Get the value stored under a key, or `None` if there isn't one
    fn get_data(&self, key: &str) -> Option<&str>;

    fn drop_effect(&self) -> DropEffect;
}

/// A [DataTransfer] that just holds everything in memory. Good for native
/// hosts and for testing.
#[derive(Clone, Debug, Default)]
pub struct MemoryTransfer {
    data: HashMap<String, String>,
    pub drop_effect: DropEffect,
}

impl DataTransfer for MemoryTransfer {
    fn set_data(&mut self, key: &str, value: String) {
        self.data.insert(key.to_owned(), value);
    }

    fn get_data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    fn drop_effect(&self) -> DropEffect {
        self.drop_effect
    }
}

/// Forward a simple pointer event to the matching handler method
pub fn dispatch(
    event: PointerEvent,
    shape: &HexShape,
    handler: &mut impl ShapeHandler,
) {
    match event {
        PointerEvent::MouseEnter => handler.on_mouse_enter(shape),
        PointerEvent::MouseOver => handler.on_mouse_over(shape),
        PointerEvent::MouseLeave => handler.on_mouse_leave(shape),
        PointerEvent::Click => handler.on_click(shape),
        PointerEvent::DragOver => handler.on_drag_over(shape),
    }
}

/// Start dragging a shape: serialize its payload into the transfer, then
/// notify the handler
pub fn drag_start(
    shape: &HexShape,
    transfer: &mut impl DataTransfer,
    handler: &mut impl ShapeHandler,
) {
    let payload = shape.drag_payload();
    transfer.set_data(DragPayload::KEY, payload.encode());
    debug!("Started dragging {}", shape.hex());
    handler.on_drag_start(shape);
}

/// Finish dragging a shape. The drag counts as a success if the drop target
/// set any drop effect other than [DropEffect::None].
pub fn drag_end(
    shape: &HexShape,
    transfer: &impl DataTransfer,
    handler: &mut impl ShapeHandler,
) {
    let success = transfer.drop_effect() != DropEffect::None;
    handler.on_drag_end(shape, success);
}

/// Drop a dragged shape onto `target`. The payload is decoded from the
/// transfer and handed to the handler. If the payload is missing or
/// malformed, the drop is aborted: a warning is logged, the handler is never
/// called, and this returns `false`.
pub fn drop_onto(
    target: &HexShape,
    transfer: &impl DataTransfer,
    handler: &mut impl ShapeHandler,
) -> bool {
    // A missing payload decodes like an empty string, which is malformed
    let input = transfer.get_data(DragPayload::KEY).unwrap_or_default();
    match DragPayload::decode(input) {
        Ok(payload) => {
            handler.on_drop(target, HexShape::from_payload(payload));
            true
        }
        Err(err) => {
            warn!("Ignoring drop onto {}: {}", target.hex(), err);
            false
        }
    }
}
