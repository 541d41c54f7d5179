//! Drawing surface abstraction and a command-recording implementation

use crate::math::geometry::Segment;

/// Opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a colour from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Shade of gray with every channel set to `level`
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// Channels plus full alpha, as stored in RGBA pixels
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// Target of every draw call made by tiles and sketches
///
/// Calls arrive strictly in sequence; implementations need no locking.
pub trait Surface {
    /// Resize the surface, discarding anything drawn so far
    fn set_surface_size(&mut self, width: u32, height: u32);

    /// Fill the whole surface with a single colour
    fn background(&mut self, color: Color);

    /// Colour used by subsequent [`Surface::draw_line`] calls
    fn set_stroke_color(&mut self, color: Color);

    /// Stroke a straight line with the current colour
    fn draw_line(&mut self, segment: Segment);
}

/// One call received by a [`RecordingSurface`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// [`Surface::set_surface_size`]
    SurfaceSize {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },
    /// [`Surface::background`]
    Background(Color),
    /// [`Surface::set_stroke_color`]
    Stroke(Color),
    /// [`Surface::draw_line`]
    Line(Segment),
}

/// Surface that keeps the command stream instead of drawing pixels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recorder
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Every command received, in order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Only the line segments, in the order they were drawn
    pub fn lines(&self) -> Vec<Segment> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Line(segment) => Some(*segment),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn set_surface_size(&mut self, width: u32, height: u32) {
        self.commands
            .push(DrawCommand::SurfaceSize { width, height });
    }

    fn background(&mut self, color: Color) {
        self.commands.push(DrawCommand::Background(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::Stroke(color));
    }

    fn draw_line(&mut self, segment: Segment) {
        self.commands.push(DrawCommand::Line(segment));
    }
}
