//! Parsing of the canonical text renderings.
//!
//! # Syntax
//!
//! ```text
//! #RGB | #RRGGBB              - CSS hex code (case-insensitive)
//! rgb(<r>, <g>, <b>)          - integer channels, 0-255
//! hsl(<h>, <s>[%], <l>[%])    - integer hue 0-359, percentages 0-100
//! ```
//!
//! Function names are case-insensitive and whitespace around arguments is
//! ignored. Every value object's `Display` output parses back to an equal
//! value.
//!
//! # Example
//!
//! ```rust
//! use color_speaker::ColorSpeaker;
//!
//! let color: ColorSpeaker = "hsl(195, 100%, 50%)".parse().unwrap();
//! assert_eq!(color.to_hex_code().as_str(), "#00BFFF");
//! ```

use std::str::FromStr;

use crate::color::{CssHexColor, HslColor, RgbColor};
use crate::component::Component;
use crate::error::{Error, Result};
use crate::speaker::ColorSpeaker;

/// Splits `name(a, b, c)` into its three arguments.
fn function_args<'a>(s: &'a str, name: &str) -> Option<[&'a str; 3]> {
    let s = s.trim();
    let head = s.get(..name.len())?;
    let rest = s.get(name.len()..)?;
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }

    let inner = rest.trim_start().strip_prefix('(')?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let args = [parts.next()?, parts.next()?, parts.next()?];
    if parts.next().is_some() {
        return None;
    }

    Some(args)
}

fn components(args: [&str; 3]) -> [Component; 3] {
    args.map(Component::from)
}

impl FromStr for RgbColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let args = function_args(s, "rgb").ok_or_else(|| Error::Syntax(s.to_owned()))?;
        Ok(Self::from_components(components(args))?)
    }
}

impl FromStr for HslColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let args = function_args(s, "hsl").ok_or_else(|| Error::Syntax(s.to_owned()))?;
        Ok(Self::from_components(components(args))?)
    }
}

impl FromStr for CssHexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::new(s.trim())?)
    }
}

impl FromStr for ColorSpeaker {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            return trimmed.parse::<CssHexColor>().map(Self::from);
        }

        let prefix = trimmed.get(..3).map(str::to_ascii_lowercase);
        match prefix.as_deref() {
            Some("rgb") => trimmed.parse::<RgbColor>().map(Self::from),
            Some("hsl") => trimmed.parse::<HslColor>().map(Self::from),
            _ => Err(Error::Syntax(s.to_owned())),
        }
    }
}
