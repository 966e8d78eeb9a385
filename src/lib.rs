//! Colours for the recipe explorer UI: RGBA values with clamped arithmetic,
//! HSV conversion, and gradient palettes that give each result card its own
//! shade.
//!
//! ```
//! use recipe_palette::{get_palette, palette::BASE};
//!
//! let shades = get_palette(5);
//! assert_eq!(shades.len(), 5);
//! assert_eq!(shades[0].to_string(), BASE[0].to_string());
//! ```

mod colour;
pub use colour::*;

mod hsv;
pub use hsv::*;

mod parse;

/// Gradient interpolation between two colours
pub mod palette;
pub use palette::{get_palette, interpolate_hsv, interpolate_rgb, Interpolation, Palette};

/// Paper sizes for [SwatchSheet]s
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod swatch;
pub use swatch::*;

mod units;
pub use units::*;

mod error;
pub use error::*;
