//! Tower-defense board rendering from tile-code matrices
//!
//! A board layout is a rectangular matrix of small integer codes. Each code
//! picks a tile kind: blank ground, ground where units may be placed, or a
//! piece of the enemy path. Path tiles draw strokes from their centre to the
//! midpoints of the edges they connect, so neighbouring path tiles join up
//! into one continuous route.

#![forbid(unsafe_code)]

/// Tiles, their geometry, and the grid that holds them
pub mod board;
/// Input/output operations and error handling
pub mod io;
/// Geometric primitives
pub mod math;
/// Drawing surfaces and the setup/draw flow
pub mod render;

pub use io::error::{BoardError, Result};
