//! Pure conversions between the color representations.
//!
//! Inputs are already validated value objects, so nothing here can fail.
//! Outputs are rounded and clamped into range before being wrapped.

use crate::color::{CssHexColor, HslColor, RgbColor};

/// Formats as the six-digit uppercase form `#RRGGBB`.
pub fn rgb_to_hex(rgb: RgbColor) -> CssHexColor {
    tracing::trace!(%rgb, "rgb -> hex");
    CssHexColor::from_canonical(format!(
        "#{:02X}{:02X}{:02X}",
        rgb.red(),
        rgb.green(),
        rgb.blue()
    ))
}

/// Extracts the channels, expanding `#RGB` shorthand to `#RRGGBB` first.
pub fn hex_to_rgb(hex: &CssHexColor) -> RgbColor {
    tracing::trace!(%hex, "hex -> rgb");
    RgbColor::from_array(hex.channel_bytes())
}

/// Converts to HSL, rounding to whole degrees and whole percentages.
///
/// Grays (including black and white) get hue 0 and saturation 0.
pub fn rgb_to_hsl(rgb: RgbColor) -> HslColor {
    tracing::trace!(%rgb, "rgb -> hsl");

    let r = f64::from(rgb.red()) / 255.0;
    let g = f64::from(rgb.green()) / 255.0;
    let b = f64::from(rgb.blue()) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let delta = max - min;
        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let h = if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        (h, s)
    };

    HslColor::from_canonical(
        h.round().clamp(0.0, HslColor::HUE_MAX as f64) as u16,
        to_percent(s),
        to_percent(l),
    )
}

/// Converts to RGB. Each channel is rounded and clamped to 0–255.
pub fn hsl_to_rgb(hsl: HslColor) -> RgbColor {
    tracing::trace!(%hsl, "hsl -> rgb");

    let h = f64::from(hsl.hue()) / 360.0;
    let s = hsl.saturation_fraction();
    let l = hsl.lightness_fraction();

    if s == 0.0 {
        let gray = to_channel(l);
        return RgbColor::new(gray, gray, gray);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    RgbColor::new(
        to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_rgb(p, q, h)),
        to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

/// Piecewise channel value for hue position `t`, wrapped into `[0, 1]`.
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
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

fn to_channel(fraction: f64) -> u8 {
    (fraction * 255.0).round().clamp(0.0, 255.0) as u8
}

fn to_percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}
