//! Core types for the anima timed canvas.
//!
//! The canvas hands every animation a [`FrameContext`] and a [`Surface`] to
//! issue drawing primitives onto. Surface coordinates are logical pixels with
//! the origin at the top-left corner and y growing downward.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Logical pixels covered by one terminal cell horizontally.
pub const CELL_WIDTH_PX: f64 = 8.0;

/// Logical pixels covered by one terminal cell vertically.
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// Size the canvas asks for when the surface is first laid out.
pub const PREFERRED_SIZE: Size = Size::new(640.0, 480.0);

/// Width and height of a drawing surface in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Construct a new [`Size`].
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size of a terminal area of `cols` by `rows` cells.
    pub fn from_cells(cols: u16, rows: u16) -> Self {
        Self::new(cols as f64 * CELL_WIDTH_PX, rows as f64 * CELL_HEIGHT_PX)
    }

    /// Number of whole terminal cells needed to show this size.
    pub fn to_cells(self) -> (u16, u16) {
        let cols = (self.width / CELL_WIDTH_PX).ceil().max(0.0) as u16;
        let rows = (self.height / CELL_HEIGHT_PX).ceil().max(0.0) as u16;
        (cols, rows)
    }
}

/// Timing information for a single draw call.
///
/// Built fresh by the canvas for every frame and dropped once the animation
/// returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Current size of the drawing surface.
    pub size: Size,
    /// Seconds since the canvas was created.
    pub elapsed: f64,
    /// Seconds since the previous frame (since creation for the first frame).
    pub delta: f64,
    /// Frame index, starting at 1.
    pub frame_number: u64,
}

/// A drawing primitive recorded on a [`DrawList`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Straight line between two points.
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
    },
    /// Ellipse outline inscribed in the box at `(x, y)` of the given size.
    Oval {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
}

/// Target for the drawing primitives an animation issues.
pub trait Surface {
    /// Remove everything drawn so far.
    fn clear(&mut self);

    /// Color used by subsequent primitives.
    fn set_color(&mut self, color: Color);

    /// Draw a line from `(x1, y1)` to `(x2, y2)`.
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    /// Draw the outline of the ellipse inscribed in the given box.
    fn draw_oval(&mut self, x: f64, y: f64, width: f64, height: f64);
}

/// A [`Surface`] that records primitives for a widget to paint later.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    shapes: Vec<Shape>,
    color: Color,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawList {
    /// Create an empty draw list using the terminal's default color.
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            color: Color::Reset,
        }
    }

    /// Primitives recorded since the last clear, in drawing order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Surface for DrawList {
    fn clear(&mut self) {
        self.shapes.clear();
        self.color = Color::Reset;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.shapes.push(Shape::Line {
            x1,
            y1,
            x2,
            y2,
            color: self.color,
        });
    }

    fn draw_oval(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.shapes.push(Shape::Oval {
            x,
            y,
            width,
            height,
            color: self.color,
        });
    }
}

/// Something that can draw one frame of an animation.
///
/// Implementations only draw: the canvas owns all timing state and passes it
/// in through [`FrameContext`]. The surface is borrowed for the duration of
/// the call only. Returning an error skips the frame without stopping the
/// animation.
pub trait Animation {
    fn draw_frame(&self, surface: &mut dyn Surface, frame: &FrameContext) -> color_eyre::Result<()>;
}

impl<F> Animation for F
where
    F: Fn(&mut dyn Surface, &FrameContext) -> color_eyre::Result<()>,
{
    fn draw_frame(&self, surface: &mut dyn Surface, frame: &FrameContext) -> color_eyre::Result<()> {
        self(surface, frame)
    }
}

/// Animations selectable from the configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    #[default]
    SineWave,
    Lissajous,
}

impl AnimationKind {
    /// Human readable name, used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            AnimationKind::SineWave => "sine wave",
            AnimationKind::Lissajous => "lissajous",
        }
    }
}
