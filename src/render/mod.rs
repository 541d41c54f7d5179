//! Drawing surfaces and the draw-once sketch flow
//!
//! This module contains:
//! - The `Surface` trait every tile draws through
//! - A recording surface for inspecting command streams
//! - A raster surface producing RGBA images
//! - The setup/draw sequence a host runs once

/// Raster surface backed by an RGBA image
pub mod raster;
/// Host flow: size the canvas, build the grid, draw
pub mod sketch;
/// Surface trait, colours and the recording surface
pub mod surface;

pub use raster::RasterSurface;
pub use sketch::Sketch;
pub use surface::{Color, DrawCommand, RecordingSurface, Surface};
