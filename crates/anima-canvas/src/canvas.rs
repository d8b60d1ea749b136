//! Timing bookkeeping for the animated canvas.

use std::fmt;
use std::time::Instant;

use anima_core::{Animation, DrawList, FrameContext, PREFERRED_SIZE, Size, Surface};

/// Canvas that owns the frame clock and delegates drawing to an [`Animation`].
///
/// Only [`TimedCanvas::draw`] and [`TimedCanvas::draw_at`] touch the frame
/// counter and timestamps, and both take `&mut self`, so draws are serialized
/// by whoever owns the canvas.
pub struct TimedCanvas {
    /// Animation invoked once per frame.
    animation: Box<dyn Animation>,
    /// Surface the animation draws onto, cleared before every frame.
    surface: DrawList,
    /// Time the canvas was created.
    start_time: Instant,
    /// Time of the previous frame.
    last_frame_time: Instant,
    /// Number of frames drawn so far.
    frame_counter: u64,
    /// Frames whose animation returned an error.
    skipped_frames: u64,
}

impl fmt::Debug for TimedCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimedCanvas")
            .field("surface", &self.surface)
            .field("start_time", &self.start_time)
            .field("last_frame_time", &self.last_frame_time)
            .field("frame_counter", &self.frame_counter)
            .field("skipped_frames", &self.skipped_frames)
            .finish_non_exhaustive()
    }
}

impl TimedCanvas {
    /// Create a canvas whose clock starts now.
    pub fn new(animation: Box<dyn Animation>) -> Self {
        Self::started_at(animation, Instant::now())
    }

    /// Create a canvas whose clock started at `start_time`.
    pub fn started_at(animation: Box<dyn Animation>, start_time: Instant) -> Self {
        Self {
            animation,
            surface: DrawList::new(),
            start_time,
            last_frame_time: start_time,
            frame_counter: 0,
            skipped_frames: 0,
        }
    }

    /// Size the canvas would like to be laid out at. Only a hint.
    pub fn preferred_size(&self) -> Size {
        PREFERRED_SIZE
    }

    /// Draw the next frame for a surface of the given size.
    pub fn draw(&mut self, size: Size) -> &DrawList {
        self.draw_at(size, Instant::now())
    }

    /// Draw the next frame as if the current time were `now`.
    ///
    /// A `now` earlier than the previous frame is treated as the previous
    /// frame's time, so elapsed time never goes backwards.
    pub fn draw_at(&mut self, size: Size, now: Instant) -> &DrawList {
        let now = now.max(self.last_frame_time);

        self.frame_counter += 1;
        self.surface.clear();

        let frame = FrameContext {
            size,
            elapsed: now.duration_since(self.start_time).as_secs_f64(),
            delta: now.duration_since(self.last_frame_time).as_secs_f64(),
            frame_number: self.frame_counter,
        };

        if let Err(err) = self.animation.draw_frame(&mut self.surface, &frame) {
            self.skipped_frames += 1;
            // Drop whatever the animation drew before failing
            self.surface.clear();
            tracing::warn!(
                frame = frame.frame_number,
                elapsed = frame.elapsed,
                error = %err,
                "animation failed, skipping frame"
            );
        }

        self.last_frame_time = now;
        &self.surface
    }

    /// Primitives from the most recent frame.
    pub fn surface(&self) -> &DrawList {
        &self.surface
    }

    /// Number of frames drawn so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_counter
    }

    /// Number of frames left blank because the animation failed.
    pub fn skipped_frames(&self) -> u64 {
        self.skipped_frames
    }

    pub fn start_time(&self) -> Instant {
        self.start_time
    }
}
