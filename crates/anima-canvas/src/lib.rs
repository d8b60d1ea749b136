//! Timed canvas for the anima demo.
//!
//! [`TimedCanvas`] keeps the frame clock and hands each frame to an
//! [`Animation`](anima_core::Animation); [`CanvasView`] paints the recorded
//! primitives into a ratatui buffer. A couple of animations are bundled,
//! with [`SineWave`] as the default.

mod animations;
mod canvas;
mod color;
mod widget;

pub use animations::{Lissajous, SineWave, animation_for};
pub use canvas::TimedCanvas;
pub use color::{hsl_to_rgb, hue_cycle};
pub use widget::CanvasView;
