//! Lissajous curve animation.

use std::f64::consts::TAU;

use anima_core::{Animation, FrameContext, Surface};

use crate::color::hue_cycle;

/// Number of segments used to draw the trailing curve.
const TRAIL_SEGMENTS: usize = 48;

/// A dot tracing a Lissajous figure, followed by a trail of the
/// curve it covered during the last `trail_secs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lissajous {
    /// Horizontal angular frequency in radians per second.
    pub freq_x: f64,
    /// Vertical angular frequency in radians per second.
    pub freq_y: f64,
    /// Length of the trail in seconds.
    pub trail_secs: f64,
    /// Radius of the head dot.
    pub radius: f64,
}

impl Default for Lissajous {
    fn default() -> Self {
        Self {
            freq_x: 3.0,
            freq_y: 2.0,
            trail_secs: 1.5,
            radius: 5.0,
        }
    }
}

impl Lissajous {
    /// Point on the curve at time `t` for a canvas of the frame's size.
    pub fn point(&self, frame: &FrameContext, t: f64) -> (f64, f64) {
        let cx = frame.size.width / 2.0;
        let cy = frame.size.height / 2.0;
        // Keep a margin so the dot stays inside the canvas
        let ax = (cx - self.radius).max(0.0);
        let ay = (cy - self.radius).max(0.0);
        (
            cx + ax * (self.freq_x * t + TAU / 4.0).sin(),
            cy + ay * (self.freq_y * t).sin(),
        )
    }
}

impl Animation for Lissajous {
    fn draw_frame(&self, surface: &mut dyn Surface, frame: &FrameContext) -> color_eyre::Result<()> {
        surface.set_color(hue_cycle(frame.elapsed, 10.0));

        let trail_start = (frame.elapsed - self.trail_secs).max(0.0);
        let step = (frame.elapsed - trail_start) / TRAIL_SEGMENTS as f64;
        if step > 0.0 {
            let mut prev = self.point(frame, trail_start);
            for i in 1..=TRAIL_SEGMENTS {
                let next = self.point(frame, trail_start + step * i as f64);
                surface.draw_line(prev.0, prev.1, next.0, next.1);
                prev = next;
            }
        }

        let (x, y) = self.point(frame, frame.elapsed);
        surface.draw_oval(
            x - self.radius,
            y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anima_core::{DrawList, PREFERRED_SIZE, Shape};

    use super::*;

    fn frame_at(elapsed: f64) -> FrameContext {
        FrameContext {
            size: PREFERRED_SIZE,
            elapsed,
            delta: 0.0,
            frame_number: 1,
        }
    }

    #[test]
    fn test_first_frame_only_draws_head() {
        let mut list = DrawList::new();
        Lissajous::default()
            .draw_frame(&mut list, &frame_at(0.0))
            .unwrap();
        assert_eq!(list.shapes().len(), 1);
        assert!(matches!(list.shapes()[0], Shape::Oval { .. }));
    }

    #[test]
    fn test_trail_follows_curve() {
        let mut list = DrawList::new();
        Lissajous::default()
            .draw_frame(&mut list, &frame_at(3.0))
            .unwrap();
        assert_eq!(list.shapes().len(), TRAIL_SEGMENTS + 1);
    }

    #[test]
    fn test_curve_stays_inside_canvas() {
        let curve = Lissajous::default();
        let frame = frame_at(0.0);
        for i in 0..500 {
            let (x, y) = curve.point(&frame, i as f64 * 0.05);
            assert!((0.0..=640.0).contains(&x));
            assert!((0.0..=480.0).contains(&y));
        }
    }
}
