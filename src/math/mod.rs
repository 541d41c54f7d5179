//! Geometric primitives shared by tiles and surfaces

/// Points and line segments in pixel space
pub mod geometry;
