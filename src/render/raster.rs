//! Pixel surface backed by an RGBA image buffer

use crate::math::geometry::Segment;
use crate::render::surface::{Color, Surface};
use image::{Rgba, RgbaImage};

/// Surface that rasterizes 1px strokes into an [`RgbaImage`]
///
/// Starts empty (0x0); [`Surface::set_surface_size`] allocates the canvas.
/// Pixels falling outside the canvas are clipped.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
    stroke: Rgba<u8>,
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterSurface {
    /// Create an empty surface with a black stroke
    pub fn new() -> Self {
        Self {
            image: RgbaImage::new(0, 0),
            stroke: Rgba(Color::gray(0).to_rgba()),
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Colour at a pixel, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Color::rgb(p.0[0], p.0[1], p.0[2]))
    }

    /// Borrow the underlying image
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    fn plot(&mut self, x: f32, y: f32) {
        let (px, py) = (x.round(), y.round());
        if px < 0.0 || py < 0.0 {
            return;
        }
        let stroke = self.stroke;
        if let Some(pixel) = self.image.get_pixel_mut_checked(px as u32, py as u32) {
            *pixel = stroke;
        }
    }
}

impl Surface for RasterSurface {
    fn set_surface_size(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::new(width, height);
    }

    fn background(&mut self, color: Color) {
        let fill = Rgba(color.to_rgba());
        for pixel in self.image.pixels_mut() {
            *pixel = fill;
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = Rgba(color.to_rgba());
    }

    // Steps one pixel at a time along the major axis
    fn draw_line(&mut self, segment: Segment) {
        let dx = segment.end.x - segment.start.x;
        let dy = segment.end.y - segment.start.y;
        let steps = dx.abs().max(dy.abs()).ceil() as u32;

        if steps == 0 {
            self.plot(segment.start.x, segment.start.y);
            return;
        }

        let step_x = dx / steps as f32;
        let step_y = dy / steps as f32;
        for i in 0..=steps {
            let t = i as f32;
            self.plot(
                step_x.mul_add(t, segment.start.x),
                step_y.mul_add(t, segment.start.y),
            );
        }
    }
}
