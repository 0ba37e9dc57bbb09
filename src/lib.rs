//! Positions of the NeoPixels on a round LED panel.
//!
//! The positions are compiled in as a fixed-point table. Look a pixel up by id:
//!
//! ```
//! use neopixel_panel::{count, lookup};
//! let pixel = lookup(0).unwrap();
//! println!("{} of {} is at ({} mm, {} mm)", pixel.id, count(), pixel.x_mm(), pixel.y_mm());
//! assert!(lookup(count()).is_none());
//! ```
//!
//! The [layout] module regenerates the table, and [export] writes it together
//! with the pick-and-place files for the board.

pub mod config;
pub mod export;
pub mod layout;
pub mod viewer;

mod coords;
mod error;
mod table;

pub use config::{LayoutConfig, UnitSpec};
pub use coords::{
    all, count, lookup, to_fixed_point, to_physical_units, NeoPixelCoord, COORDINATE_SCALE,
    NEOPIXEL_COUNT, ROTATION_SCALE,
};
pub use error::{Error, Result};
