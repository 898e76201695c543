//! This module holds the basic types and math for hexagon grids.
//!
//! ## Coordinate Systems
//!
//! There are two coordinate systems in play:
//!
//! ### Hex Coordinates
//!
//! Hex coordinates identify cells in the grid. We use the [cube coordinate
//! system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//!
//! Each coordinate has three components (`q`, `r`, and `s`). **For any hex,
//! `q + r + s = 0`.** Even though the grid is two-dimensional, the third
//! component makes a lot of the math symmetric and simple. Since `s` is always
//! `-q - r`, there are really only two degrees of freedom (the "axial"
//! coordinates `q` and `r`), which is why the transforms to and from pixel
//! space never look at `s`.
//!
//! Whole hexes have integer components. Fractional hexes also show up, mostly
//! as the result of converting a pixel back to hex space, before rounding.
//!
//! ### Pixel Coordinates
//!
//! Pixel coordinates are plain 2D Cartesian coordinates, in SVG's convention:
//! `+x` is right and `+y` is **down**. A [Layout] decides where hex `(0, 0, 0)`
//! lands (the layout's origin) and how far apart hexes are.
//!
//! +-------------------+
//! |        -y         |
//! |         ^         |
//! |         |         |
//! | -x <----o----> +x |
//! |         |         |
//! |         v         |
//! |        +y         |
//! +-------------------+
//!
//! #### Calculation
//!
//! Converting from hex coordinates to pixel coordinates involves these steps:
//!
//! 1. Multiply `(q, r)` by the orientation's forward matrix
//! 2. Scale by the layout's size (independently on x and y)
//! 3. Spread by the layout's spacing
//! 4. Translate by the layout's origin
//!
//! Going back runs the same steps in reverse with the inverse matrix, then
//! rounds to the nearest whole hex. Use [Layout::hex_to_pixel] and
//! [Layout::pixel_to_hex] to perform these conversions.

mod hex;
mod layout;
mod orientation;
mod point;

pub use self::{hex::*, layout::*, orientation::*, point::*};
