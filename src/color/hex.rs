use crate::foundation::core::Rgb8;
use crate::foundation::error::{RibbonError, RibbonResult};

/// Parse a `#RRGGBB` color. The `#` is optional and digits are case-insensitive.
///
/// Anything else (3-digit shorthand, alpha suffix, non-hex digits) fails with
/// [`RibbonError::InvalidColorFormat`].
pub fn parse_hex(s: &str) -> RibbonResult<Rgb8> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(RibbonError::invalid_color(format!(
            "\"{s}\" is not a #RRGGBB hex color"
        )));
    }

    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| RibbonError::invalid_color(format!("invalid hex byte in \"{s}\"")))
    };

    Ok(Rgb8::new(byte(0..2)?, byte(2..4)?, byte(4..6)?))
}

#[cfg(test)]
#[path = "../../tests/unit/color/hex.rs"]
mod tests;
