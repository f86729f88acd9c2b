// SPDX-License-Identifier: MIT
//
// Color strings — the `#rgb[a]` / `#rrggbb[aa]` syntax accepted from users.
//
// Renderers only ever see the long form. Short forms are expanded by nibble
// doubling, a missing alpha becomes `ff`, and anything unparsable becomes
// the empty string, which callers treat as "no color" (for the background:
// don't draw one).

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Normalize a user color string to `#rrggbbaa`.
///
/// Supports `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA` (case-insensitive,
/// `#` required). The result is lowercase. Returns an empty string if the
/// input is not one of those forms.
#[must_use]
pub fn parse_color(s: &str) -> String {
    let Some(digits) = s.strip_prefix('#') else {
        return String::new();
    };
    if !digits.bytes().all(|b| parse_hex_digit(b).is_some()) {
        return String::new();
    }
    let digits = digits.to_ascii_lowercase();

    match digits.len() {
        // #RGB → #RRGGBBff
        3 => format!("#{}ff", double_nibbles(&digits)),
        // #RGBA → #RRGGBBAA
        4 => format!("#{}", double_nibbles(&digits)),
        // #RRGGBB → #RRGGBBff
        6 => format!("#{digits}ff"),
        // #RRGGBBAA
        8 => format!("#{digits}"),
        _ => String::new(),
    }
}

/// Split a long-form color into its `#rrggbb` part and an opacity in [0, 1].
///
/// A 6-digit color is fully opaque. Returns `None` for anything that is not
/// `#rrggbb` or `#rrggbbaa`.
#[must_use]
pub fn split_alpha(color: &str) -> Option<(&str, f64)> {
    let digits = color.strip_prefix('#')?;
    if !digits.bytes().all(|b| parse_hex_digit(b).is_some()) {
        return None;
    }
    match digits.len() {
        6 => Some((color, 1.0)),
        8 => {
            let alpha = parse_hex_byte(&digits.as_bytes()[6..8])?;
            Some((&color[..7], f64::from(alpha) / 255.0))
        }
        _ => None,
    }
}

fn double_nibbles(digits: &str) -> String {
    digits.chars().flat_map(|c| [c, c]).collect()
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
