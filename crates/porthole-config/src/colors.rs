//! Hex color parsing for the window background.

use regex::Regex;
use std::sync::LazyLock;

/// Hex color: #RGB, #RRGGBB, or #RRGGBBAA.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// Returns `true` if `s` is a hex color string.
pub fn is_valid_hex(s: &str) -> bool {
    HEX_RE.is_match(s)
}

/// Parse a hex color into `(r, g, b, a)`.
pub fn parse_hex_rgba(s: &str) -> Option<(u8, u8, u8, u8)> {
    if !is_valid_hex(s) {
        return None;
    }
    let hex = &s[1..];
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some((r * 17, g * 17, b * 17, 255))
        }
        6 => Some((channel(0)?, channel(2)?, channel(4)?, 255)),
        8 => Some((channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}
