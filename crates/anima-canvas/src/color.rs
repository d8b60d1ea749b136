//! Color helpers for animations.

use ratatui::style::Color;

/// Color cycling through the hue wheel once every `period_secs`.
pub fn hue_cycle(elapsed: f64, period_secs: f64) -> Color {
    let turns = (elapsed / period_secs.max(f64::EPSILON)).fract();
    hsl_to_rgb(turns * 360.0, 0.8, 0.6)
}

/// Convert HSL (hue in degrees, saturation and lightness in 0..1) to RGB.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Color {
    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = h.rem_euclid(360.0) / 360.0;

    let channel = |t: f64| (hue_to_channel(p, q, t) * 255.0).round() as u8;
    Color::Rgb(
        channel(h + 1.0 / 3.0),
        channel(h),
        channel(h - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Color::Rgb(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Color::Rgb(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Color::Rgb(0, 0, 255));
    }

    #[test]
    fn test_grey_when_unsaturated() {
        assert_eq!(hsl_to_rgb(200.0, 0.0, 0.5), Color::Rgb(128, 128, 128));
    }

    #[test]
    fn test_hue_cycle_repeats() {
        assert_eq!(hue_cycle(1.0, 4.0), hue_cycle(5.0, 4.0));
    }
}
