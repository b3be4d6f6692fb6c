use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{BoomerangError, BoomerangResult};

/// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional, case-insensitive).
pub fn parse_hex(s: &str) -> BoomerangResult<Rgba8Premul> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> BoomerangResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| BoomerangError::config(format!("invalid hex byte \"{pair}\"")))
    }

    if !s.is_ascii() {
        return Err(BoomerangError::config("hex color must be ASCII"));
    }

    let (r, g, b, a) = match s.len() {
        6 => (hex_byte(&s[0..2])?, hex_byte(&s[2..4])?, hex_byte(&s[4..6])?, 255),
        8 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        ),
        _ => {
            return Err(BoomerangError::config(
                "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
            ));
        }
    };

    Ok(Rgba8Premul::from_straight_rgba(r, g, b, a))
}

/// Foreground and background colors used by a stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Glyph stroke color.
    pub fore: Rgba8Premul,
    /// Background fill color.
    pub back: Rgba8Premul,
}

impl Palette {
    /// Parse both colors from hex strings.
    pub fn from_hex(fore: &str, back: &str) -> BoomerangResult<Self> {
        Ok(Self {
            fore: parse_hex(fore)?,
            back: parse_hex(back)?,
        })
    }

    /// The built-in orange-on-grey palette.
    pub fn standard() -> BoomerangResult<Self> {
        Self::from_hex(crate::tunables::FORE_COLOR, crate::tunables::BACK_COLOR)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
