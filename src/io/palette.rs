//! Parsing colors and palettes from text
//!
//! Two color notations are accepted:
//! - hex, `#RRGGBB` or `RRGGBB`
//! - channel triples, `r:g:b` with each channel a real number in `[0, 1]`

use crate::generation::color::{ColorPalette, Rgb};
use crate::io::configuration::DEFAULT_PALETTE;
use crate::io::error::{Result, invalid_argument};

/// Parse a single color in hex or `r:g:b` notation
///
/// # Errors
///
/// Returns `InvalidArgument` if the text is in neither notation or a channel is out of range
pub fn parse_color(text: &str) -> Result<Rgb> {
    let trimmed = text.trim();
    if trimmed.contains(':') {
        parse_channel_triple(trimmed)
    } else {
        parse_hex(trimmed)
    }
}

/// Build a palette from colors, falling back to the default palette when empty
///
/// # Errors
///
/// Returns `InvalidArgument` if the default palette is invalid
pub fn palette_or_default(colors: &[Rgb]) -> Result<ColorPalette> {
    if colors.is_empty() {
        ColorPalette::from_channels(&DEFAULT_PALETTE)
    } else {
        ColorPalette::new(colors.to_vec())
    }
}

fn parse_hex(text: &str) -> Result<Rgb> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    let malformed = || invalid_argument("color", &text, &"expected #RRGGBB or r:g:b");

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let channel = |range: std::ops::Range<usize>| -> Result<f64> {
        let pair = digits.get(range).ok_or_else(malformed)?;
        let value = u8::from_str_radix(pair, 16).map_err(|e| {
            invalid_argument("color", &text, &format!("bad hex pair '{pair}': {e}"))
        })?;
        Ok(f64::from(value) / f64::from(u8::MAX))
    };

    Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)
}

fn parse_channel_triple(text: &str) -> Result<Rgb> {
    let channels = text
        .split(':')
        .map(|part| {
            part.trim().parse::<f64>().map_err(|e| {
                invalid_argument("color", &text, &format!("bad channel '{part}': {e}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    match channels.as_slice() {
        &[r, g, b] => Rgb::new(r, g, b),
        _ => Err(invalid_argument(
            "color",
            &text,
            &format!("expected 3 channels, found {}", channels.len()),
        )),
    }
}
