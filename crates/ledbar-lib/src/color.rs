//! RGBW color type, parsing and formatting.
//!
//! Channel values are logical 0–255; scaling to the device's native range
//! happens in [`crate::protocol`], never here.

use std::fmt;

/// One RGBW color. Channels are independent 8-bit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl Color {
    /// All channels zero.
    pub const OFF: Color = Color::new(0, 0, 0, 0);

    /// Default fill color when a caller passes all-zero: white from the
    /// RGB emitters, white channel unused.
    pub const DEFAULT_FILL: Color = Color::new(255, 255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Color {
        Color { r, g, b, w }
    }

    /// True when every channel is zero.
    pub fn is_off(&self) -> bool {
        *self == Color::OFF
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.w != 0 {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.w)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        }
    }
}

/// Parse a color string into a [`Color`].
///
/// Accepts:
/// - Hex: `"#FF0000"`, `"FF0000"` (white channel zero)
/// - Hex with white channel: `"#FF000080"`
/// - Named: `"red"`, `"green"`, `"blue"`, `"white"`, `"orange"`,
///   `"yellow"`, `"purple"`, `"cyan"`, `"off"`/`"black"`
pub fn parse_color(s: &str) -> crate::error::Result<Color> {
    let s = s.trim();

    match s.to_lowercase().as_str() {
        "red" => return Ok(Color::new(255, 0, 0, 0)),
        "green" => return Ok(Color::new(0, 255, 0, 0)),
        "blue" => return Ok(Color::new(0, 0, 255, 0)),
        "white" => return Ok(Color::DEFAULT_FILL),
        "orange" => return Ok(Color::new(255, 128, 0, 0)),
        "yellow" => return Ok(Color::new(255, 255, 0, 0)),
        "purple" => return Ok(Color::new(128, 0, 255, 0)),
        "cyan" => return Ok(Color::new(0, 255, 255, 0)),
        "off" | "black" => return Ok(Color::OFF),
        _ => {}
    }

    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 && hex.len() != 8 {
        return Err(crate::LedbarError::Color(format!(
            "Invalid color: {s} (use #RRGGBB, #RRGGBBWW or a color name)"
        )));
    }
    let val = u32::from_str_radix(hex, 16)
        .map_err(|_| crate::LedbarError::Color(format!("Invalid hex color: {s}")))?;
    let val = if hex.len() == 6 { val << 8 } else { val };
    Ok(Color::new(
        (val >> 24) as u8,
        (val >> 16) as u8,
        (val >> 8) as u8,
        val as u8,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_color ──

    #[test]
    fn parse_named_red() {
        assert_eq!(parse_color("red").unwrap(), Color::new(255, 0, 0, 0));
    }

    #[test]
    fn parse_named_white_is_default_fill() {
        assert_eq!(parse_color("white").unwrap(), Color::DEFAULT_FILL);
        assert_eq!(parse_color("white").unwrap().w, 0);
    }

    #[test]
    fn parse_named_off() {
        assert_eq!(parse_color("off").unwrap(), Color::OFF);
        assert_eq!(parse_color("black").unwrap(), Color::OFF);
    }

    #[test]
    fn parse_named_case_insensitive() {
        assert_eq!(parse_color("RED").unwrap(), Color::new(255, 0, 0, 0));
        assert_eq!(parse_color("  Red  ").unwrap(), Color::new(255, 0, 0, 0));
    }

    #[test]
    fn parse_hex_with_hash() {
        assert_eq!(parse_color("#FF0000").unwrap(), Color::new(255, 0, 0, 0));
        assert_eq!(parse_color("#00FF00").unwrap(), Color::new(0, 255, 0, 0));
    }

    #[test]
    fn parse_hex_without_hash() {
        assert_eq!(parse_color("ABCDEF").unwrap(), Color::new(0xAB, 0xCD, 0xEF, 0));
    }

    #[test]
    fn parse_hex_lowercase() {
        assert_eq!(parse_color("#ff8000").unwrap(), Color::new(255, 128, 0, 0));
    }

    #[test]
    fn parse_hex_with_white_channel() {
        assert_eq!(
            parse_color("#10203040").unwrap(),
            Color::new(0x10, 0x20, 0x30, 0x40)
        );
    }

    #[test]
    fn parse_invalid_short() {
        assert!(parse_color("#FFF").is_err());
    }

    #[test]
    fn parse_invalid_long() {
        assert!(parse_color("#FF00000000").is_err());
    }

    #[test]
    fn parse_invalid_name() {
        assert!(parse_color("chartreuse").is_err());
    }

    #[test]
    fn parse_invalid_hex_chars() {
        assert!(parse_color("#GGHHII").is_err());
    }

    // ── Display ──

    #[test]
    fn display_rgb_only() {
        assert_eq!(Color::new(255, 0, 0, 0).to_string(), "#FF0000");
    }

    #[test]
    fn display_with_white_channel() {
        assert_eq!(Color::new(0x10, 0x20, 0x30, 0x40).to_string(), "#10203040");
    }

    #[test]
    fn parse_display_roundtrip() {
        for name in &["red", "green", "blue", "white", "orange", "yellow"] {
            let c = parse_color(name).unwrap();
            assert_eq!(parse_color(&c.to_string()).unwrap(), c, "round-trip failed for {name}");
        }
    }

    // ── helpers ──

    #[test]
    fn is_off() {
        assert!(Color::OFF.is_off());
        assert!(!Color::new(0, 0, 0, 1).is_off());
        assert!(!Color::DEFAULT_FILL.is_off());
    }
}
