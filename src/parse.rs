//! Parsing colours from the strings the UI's stylesheets use.
//!
//! Accepted forms:
//! * `#rgb` and `#rrggbb`
//! * `rgb(r, g, b)`
//! * `rgba(r, g, b, a)`
//!
//! Components are parsed as floats and are not range-checked, so
//! `"rgb(300, 0, 0)"` parses to a colour with a red channel of 300.

use crate::{Colour, ColourError};
use std::str::FromStr;

impl FromStr for Colour {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(args) = function_args(&lower, "rgba") {
            let [r, g, b, a] = parse_components::<4>(args)?;
            Ok(Colour::rgba(r, g, b, a))
        } else if let Some(args) = function_args(&lower, "rgb") {
            let [r, g, b] = parse_components::<3>(args)?;
            Ok(Colour::new(r, g, b))
        } else {
            Err(ColourError::UnknownFormat(s.to_string()))
        }
    }
}

fn parse_hex(hex: &str) -> Result<Colour, ColourError> {
    let invalid = || ColourError::InvalidHex(format!("#{hex}"));
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).map(f64::from).map_err(|_| invalid());
    match hex.len() {
        3 => {
            // each digit is doubled, so `f` means `ff`
            let r = channel(&hex[0..1])? * 17.0;
            let g = channel(&hex[1..2])? * 17.0;
            let b = channel(&hex[2..3])? * 17.0;
            Ok(Colour::new(r, g, b))
        }
        6 => Ok(Colour::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => Err(invalid()),
    }
}

/// Returns the text between the parentheses of `name( ... )`
fn function_args<'s>(s: &'s str, name: &str) -> Option<&'s str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_components<const N: usize>(args: &str) -> Result<[f64; N], ColourError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(ColourError::ChannelCount {
            expected: N,
            found: parts.len(),
        });
    }

    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|_| ColourError::InvalidChannel(part.to_string()))?;
    }
    Ok(out)
}
