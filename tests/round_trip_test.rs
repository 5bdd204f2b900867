//! Round-Trip Properties
//!
//! Conversions between representations must not drift:
//!
//! 1. RGB -> hex -> RGB is exact for every channel triple
//! 2. `#RGB` decodes exactly like `#RRGGBB`
//! 3. RGB -> HSL -> RGB stays within the rounding of whole degrees and
//!    whole percentages (a single unit for grays)
//! 4. Conversion output always validates when fed back in
//!
//! Run: cargo test --test round_trip_test

#![allow(clippy::unwrap_used)]

use color_speaker::convert::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
use color_speaker::{ColorSpeaker, CssHexColor, HslColor, RgbColor};
use proptest::prelude::*;

/// Largest per-channel drift of RGB -> HSL -> RGB over the whole RGB cube.
///
/// Storing saturation and lightness as whole percentages and hue as whole
/// degrees loses up to half a unit each; for strongly saturated colors the
/// hue error dominates. Reached by e.g. `rgb(248, 10, 11)`.
const HSL_ROUND_TRIP_TOLERANCE: u8 = 6;

fn channel_drift(a: RgbColor, b: RgbColor) -> u8 {
    a.to_array()
        .iter()
        .zip(b.to_array())
        .map(|(x, y)| x.abs_diff(y))
        .max()
        .unwrap_or(0)
}

fn any_rgb() -> impl Strategy<Value = RgbColor> {
    any::<[u8; 3]>().prop_map(RgbColor::from_array)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn prop_rgb_hex_rgb_is_exact(rgb in any_rgb()) {
        let hex = rgb_to_hex(rgb);
        prop_assert_eq!(hex.digits(), 6);
        prop_assert_eq!(hex_to_rgb(&hex), rgb);

        let reparsed = CssHexColor::new(&hex.as_str().to_lowercase()).unwrap();
        prop_assert_eq!(hex_to_rgb(&reparsed), rgb);
    }

    #[test]
    fn prop_shorthand_matches_expansion(r in 0u8..16, g in 0u8..16, b in 0u8..16) {
        let short = CssHexColor::new(&format!("#{r:X}{g:X}{b:X}")).unwrap();
        let long = CssHexColor::new(&format!("#{r:X}{r:X}{g:X}{g:X}{b:X}{b:X}")).unwrap();
        prop_assert_eq!(short.expanded(), long.clone());
        prop_assert_eq!(hex_to_rgb(&short), hex_to_rgb(&long));
    }

    #[test]
    fn prop_rgb_hsl_rgb_within_rounding(rgb in any_rgb()) {
        let back = hsl_to_rgb(rgb_to_hsl(rgb));
        let drift = channel_drift(rgb, back);
        prop_assert!(drift <= HSL_ROUND_TRIP_TOLERANCE,
            "{} -> {} -> {} drifted by {}", rgb, rgb_to_hsl(rgb), back, drift);
    }

    #[test]
    fn prop_gray_round_trip_within_one(v in any::<u8>()) {
        let gray = RgbColor::new(v, v, v);
        let hsl = rgb_to_hsl(gray);
        prop_assert_eq!(hsl.hue(), 0);
        prop_assert_eq!(hsl.saturation(), 0);
        prop_assert!(channel_drift(gray, hsl_to_rgb(hsl)) <= 1);
    }

    #[test]
    fn prop_hsl_output_revalidates(rgb in any_rgb()) {
        let hsl = rgb_to_hsl(rgb);
        let rebuilt = HslColor::try_new(
            i64::from(hsl.hue()),
            i64::from(hsl.saturation()),
            i64::from(hsl.lightness()),
        );
        prop_assert_eq!(rebuilt, Ok(hsl));
    }

    #[test]
    fn prop_any_valid_hsl_converts(h in 0i64..360, s in 0i64..=100, l in 0i64..=100) {
        let hsl = HslColor::try_new(h, s, l).unwrap();
        let rgb = hsl_to_rgb(hsl);
        let speaker = ColorSpeaker::from(hsl);
        prop_assert_eq!(speaker.to_rgb(), rgb);
        prop_assert_eq!(speaker.to_hex_code(), rgb_to_hex(rgb));
    }

    #[test]
    fn prop_out_of_range_rgb_rejected(r in 256i64..10_000, g in any::<u8>(), b in -10_000i64..0) {
        let err = RgbColor::try_new(r, i64::from(g), b).unwrap_err();
        prop_assert_eq!(err.fields().collect::<Vec<_>>(), vec!["red", "blue"]);
    }
}

#[test]
fn achromatic_extremes() {
    assert_eq!(rgb_to_hsl(RgbColor::BLACK), HslColor::try_new(0, 0, 0).unwrap());
    assert_eq!(rgb_to_hsl(RgbColor::WHITE), HslColor::try_new(0, 0, 100).unwrap());
}

#[test]
fn worst_case_drift_is_reached() {
    let rgb = RgbColor::new(248, 10, 11);
    assert_eq!(channel_drift(rgb, hsl_to_rgb(rgb_to_hsl(rgb))), HSL_ROUND_TRIP_TOLERANCE);
}
