//! Sine wave animation.

use anima_core::{Animation, FrameContext, Surface};

/// A dot riding a sine wave across the canvas, with a reference line at the
/// wave's zero point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineWave {
    /// Vertical distance from the zero line to a peak, in pixels.
    pub amplitude: f64,
    /// Angular frequency in radians per second.
    pub angular_frequency: f64,
    /// Seconds the dot takes to sweep the full width.
    pub sweep_secs: f64,
    /// Radius of the dot.
    pub radius: f64,
}

impl Default for SineWave {
    fn default() -> Self {
        Self {
            amplitude: 100.0,
            angular_frequency: 2.0,
            sweep_secs: 5.0,
            radius: 5.0,
        }
    }
}

impl SineWave {
    /// Position of the dot's center for the given frame.
    pub fn point(&self, frame: &FrameContext) -> (f64, f64) {
        let zero = frame.size.height / 2.0;
        let y = zero + self.amplitude * (self.angular_frequency * frame.elapsed).sin();

        // Wrap horizontally every `sweep_secs`
        let x = (frame.elapsed / self.sweep_secs).fract() * frame.size.width;

        (x, y)
    }
}

impl Animation for SineWave {
    fn draw_frame(&self, surface: &mut dyn Surface, frame: &FrameContext) -> color_eyre::Result<()> {
        let zero = frame.size.height / 2.0;
        let (x, y) = self.point(frame);

        surface.draw_line(0.0, zero, frame.size.width, zero);
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
    use std::f64::consts::FRAC_PI_4;

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

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_point_at_start() {
        let (x, y) = SineWave::default().point(&frame_at(0.0));
        assert_close(x, 0.0);
        assert_close(y, 240.0);
    }

    #[test]
    fn test_point_quarter_sweep() {
        let (x, _) = SineWave::default().point(&frame_at(1.25));
        assert_close(x, 160.0);
    }

    #[test]
    fn test_point_at_peak() {
        let (_, y) = SineWave::default().point(&frame_at(FRAC_PI_4));
        assert_close(y, 240.0 + 100.0);
    }

    #[test]
    fn test_point_wraps_every_sweep() {
        let wave = SineWave::default();
        let (x_early, _) = wave.point(&frame_at(1.25));
        let (x_late, _) = wave.point(&frame_at(6.25));
        assert_close(x_early, x_late);
    }

    #[test]
    fn test_draw_frame_shapes() {
        let mut list = DrawList::new();
        SineWave::default()
            .draw_frame(&mut list, &frame_at(1.25))
            .unwrap();

        let shapes = list.shapes();
        assert_eq!(shapes.len(), 2);
        match shapes[0] {
            Shape::Line { x1, y1, x2, y2, .. } => {
                assert_close(x1, 0.0);
                assert_close(x2, 640.0);
                assert_close(y1, 240.0);
                assert_close(y2, 240.0);
            }
            other => panic!("expected a line, got {other:?}"),
        }
        match shapes[1] {
            Shape::Oval {
                x, width, height, ..
            } => {
                assert_close(x + width / 2.0, 160.0);
                assert_close(width, 10.0);
                assert_close(height, 10.0);
            }
            other => panic!("expected an oval, got {other:?}"),
        }
    }
}
