//! HSL value object.
//!
//! Saturation and lightness are stored as whole percentages (0–100) and hue
//! as whole degrees (0–359). Inputs given as `"50%"` text or as numbers are
//! normalized to that scale before range validation.

use std::fmt;

use crate::component::Component;
use crate::error::{ValidationError, Violation};
use crate::validate::{check_interval, Violations};

/// Named-field HSL input, validated by [`HslColor::from_input`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct HslInput {
    /// Hue in degrees; must be an integer.
    pub hue: Component,
    /// Saturation, as a percentage number or `"NN%"` text.
    pub saturation: Component,
    /// Lightness, as a percentage number or `"NN%"` text.
    pub lightness: Component,
}

impl From<[Component; 3]> for HslInput {
    fn from([hue, saturation, lightness]: [Component; 3]) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// HSL color with integer components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "HslInput"))]
pub struct HslColor {
    hue: u16,
    saturation: u8,
    lightness: u8,
}

impl HslColor {
    /// Largest legal hue, in degrees.
    pub const HUE_MAX: i64 = 359;
    /// Largest legal saturation or lightness, in percent.
    pub const PERCENT_MAX: i64 = 100;

    const GEOMETRY_MESSAGE: &'static str = "Invalid HSL geometry.";

    /// Create from hue, saturation and lightness.
    ///
    /// ```rust
    /// use color_speaker::HslColor;
    ///
    /// let a = HslColor::try_new(195, "100%", "50%").unwrap();
    /// let b = HslColor::try_new(195, 100, 50).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn try_new(
        hue: impl Into<Component>,
        saturation: impl Into<Component>,
        lightness: impl Into<Component>,
    ) -> Result<Self, ValidationError> {
        Self::from_input(HslInput {
            hue: hue.into(),
            saturation: saturation.into(),
            lightness: lightness.into(),
        })
    }

    /// Positional form: `[hue, saturation, lightness]`.
    pub fn from_components(components: [Component; 3]) -> Result<Self, ValidationError> {
        Self::from_input(components.into())
    }

    /// Named form.
    ///
    /// Each field is normalized first and range-checked only if that
    /// succeeded. One reason is reported per bad field, in field order.
    pub fn from_input(input: HslInput) -> Result<Self, ValidationError> {
        let mut violations = Violations::new();

        let mut field = |name: &'static str, max: i64, normalized: Result<i64, Violation>| {
            let value = violations.take(name, normalized)?;
            let outcome = check_interval(name, 0, max, value);
            let valid = outcome.is_none();
            violations.record(outcome);
            valid.then_some(value)
        };

        let hue = field("hue", Self::HUE_MAX, input.hue.as_integer());
        let saturation = field(
            "saturation",
            Self::PERCENT_MAX,
            input.saturation.as_percentage(),
        );
        let lightness = field(
            "lightness",
            Self::PERCENT_MAX,
            input.lightness.as_percentage(),
        );

        match (hue, saturation, lightness) {
            (Some(hue), Some(saturation), Some(lightness)) => Ok(Self {
                hue: hue as u16,
                saturation: saturation as u8,
                lightness: lightness as u8,
            }),
            _ => Err(violations.into_error(Self::GEOMETRY_MESSAGE)),
        }
    }

    /// Wraps components produced by this crate's own conversion math.
    pub(crate) fn from_canonical(hue: u16, saturation: u8, lightness: u8) -> Self {
        debug_assert!(i64::from(hue) <= Self::HUE_MAX);
        debug_assert!(i64::from(saturation) <= Self::PERCENT_MAX);
        debug_assert!(i64::from(lightness) <= Self::PERCENT_MAX);
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Hue in degrees (0–359).
    pub const fn hue(self) -> u16 {
        self.hue
    }

    /// Saturation in percent (0–100).
    pub const fn saturation(self) -> u8 {
        self.saturation
    }

    /// Lightness in percent (0–100).
    pub const fn lightness(self) -> u8 {
        self.lightness
    }

    /// Saturation as a fraction (0.0–1.0).
    pub fn saturation_fraction(self) -> f64 {
        f64::from(self.saturation) / 100.0
    }

    /// Lightness as a fraction (0.0–1.0).
    pub fn lightness_fraction(self) -> f64 {
        f64::from(self.lightness) / 100.0
    }

    /// Whether this color has no saturation (a gray, black or white).
    pub const fn is_achromatic(self) -> bool {
        self.saturation == 0
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl TryFrom<HslInput> for HslColor {
    type Error = ValidationError;

    fn try_from(input: HslInput) -> Result<Self, Self::Error> {
        Self::from_input(input)
    }
}

impl TryFrom<[Component; 3]> for HslColor {
    type Error = ValidationError;

    fn try_from(components: [Component; 3]) -> Result<Self, Self::Error> {
        Self::from_components(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViolationKind;
    use approx::assert_relative_eq;

    #[test]
    fn test_percent_text_equals_numbers() {
        let text = HslColor::try_new(195, "100%", "50%").expect("valid hsl");
        let numbers = HslColor::try_new(195, 100, 50).expect("valid hsl");
        let positional =
            HslColor::from_components([195.into(), "100%".into(), 50.into()]).expect("valid hsl");
        assert_eq!(text, numbers);
        assert_eq!(text, positional);
        assert_eq!(text.hue(), 195);
        assert_eq!(text.saturation(), 100);
        assert_eq!(text.lightness(), 50);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(HslColor::try_new(359, 0, 99).is_ok());
        assert!(HslColor::try_new(0, 100, 100).is_ok());
        assert!(HslColor::try_new(0, 0, 0).is_ok());
    }

    #[test]
    fn test_collects_every_geometry_violation() {
        let err = HslColor::try_new(-1, 0, 101).expect_err("hue and lightness are invalid");

        assert_eq!(err.message(), "Invalid HSL geometry.");
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["hue", "lightness"]);
        assert_eq!(
            err.reason("hue").map(ToString::to_string).as_deref(),
            Some("Must be between 0 and 359, not -1")
        );
        assert_eq!(
            err.reason("lightness").map(ToString::to_string).as_deref(),
            Some("Must be between 0 and 100, not 101")
        );
    }

    #[test]
    fn test_hue_of_360_is_rejected() {
        let err = HslColor::try_new(360, "99%", "34%").expect_err("hue tops out at 359");
        assert_eq!(
            err.reason("hue"),
            Some(&Violation::OutOfRange {
                min: 0,
                max: 359,
                value: 360
            })
        );
    }

    #[test]
    fn test_type_and_range_violations_together() {
        let err = HslColor::try_new(0.1, "lots", "-1%").expect_err("every field is bad");
        assert_eq!(
            err.fields().collect::<Vec<_>>(),
            vec!["hue", "saturation", "lightness"]
        );
        assert_eq!(err.reason("hue").map(Violation::kind), Some(ViolationKind::Type));
        assert_eq!(
            err.reason("saturation").map(Violation::kind),
            Some(ViolationKind::Type)
        );
        assert_eq!(
            err.reason("lightness").map(Violation::kind),
            Some(ViolationKind::Range)
        );
    }

    #[test]
    fn test_fractional_percent_rounds() {
        let color = HslColor::try_new(359, 100.01, "55.4%").expect("valid hsl");
        assert_eq!(color.saturation(), 100);
        assert_eq!(color.lightness(), 55);
    }

    #[test]
    fn test_fractions() {
        let color = HslColor::try_new(210, 65, 20).expect("valid hsl");
        assert_relative_eq!(color.saturation_fraction(), 0.65);
        assert_relative_eq!(color.lightness_fraction(), 0.2);
        assert!(!color.is_achromatic());
        assert!(HslColor::try_new(0, 0, 50).expect("valid hsl").is_achromatic());
    }

    #[test]
    fn test_display() {
        let color = HslColor::try_new(0, 0, 50).expect("valid hsl");
        assert_eq!(color.to_string(), "hsl(0, 0%, 50%)");
        let color = HslColor::try_new(195, "100%", "50%").expect("valid hsl");
        assert_eq!(color.to_string(), "hsl(195, 100%, 50%)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let color = HslColor::try_new(195, 100, 50).expect("valid hsl");
        let json = serde_json::to_string(&color).expect("serializes");
        assert_eq!(json, r#"{"hue":195,"saturation":100,"lightness":50}"#);

        let from_percents: HslColor =
            serde_json::from_str(r#"{"hue":195,"saturation":"100%","lightness":"50%"}"#)
                .expect("percent strings are accepted");
        assert_eq!(from_percents, color);

        assert!(serde_json::from_str::<HslColor>(r#"{"hue":400,"saturation":1,"lightness":1}"#)
            .is_err());
    }
}
