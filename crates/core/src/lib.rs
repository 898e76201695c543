//! Hexgrid is a library for laying out hexagon grids and drawing them as SVG
//! shapes. The core of the crate is the geometry: cube coordinates, the
//! flat/pointy orientations, and the conversions between hex space and pixel
//! space. On top of that sits a thin shape layer that positions hexagons,
//! renders them to SVG, and handles drag/drop payloads.
//!
//! ```
//! use hexgrid::{Hex, Layout, LayoutConfig};
//!
//! let layout = Layout::from_config(LayoutConfig::default()).unwrap();
//! let hex = Hex::new(1.0, -1.0, 0.0).unwrap();
//! let center = layout.hex_to_pixel(hex);
//! assert_eq!(layout.pixel_to_hex(center), hex);
//! // Every hex in the layout shares the same corner geometry
//! println!("{} at {}", layout.points(), center);
//! ```
//!
//! See [LayoutConfig] for details on how a layout can be customized, and
//! [geometry] for a description of the coordinate systems.

mod config;
mod error;
pub mod geometry;
pub mod render;
mod util;

pub use crate::{
    config::LayoutConfig,
    error::HexError,
    geometry::{Hex, Layout, Orientation, OrientationKind, Point},
    util::format_number,
};
