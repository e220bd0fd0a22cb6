//!
//! JSON text components, as consumed by `tellraw`, `bossbar` and friends.
//!

use crate::ParseError;
use derive_more::Display;
use serde::{Serialize, Serializer};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

///
/// Color
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Color {
    #[display("black")]
    Black,
    #[display("dark_blue")]
    DarkBlue,
    #[display("dark_green")]
    DarkGreen,
    #[display("dark_aqua")]
    DarkAqua,
    #[display("dark_red")]
    DarkRed,
    #[display("dark_purple")]
    DarkPurple,
    #[display("gold")]
    Gold,
    #[display("gray")]
    Gray,
    #[display("dark_gray")]
    DarkGray,
    #[display("blue")]
    Blue,
    #[display("green")]
    Green,
    #[display("aqua")]
    Aqua,
    #[display("red")]
    Red,
    #[display("light_purple")]
    LightPurple,
    #[display("yellow")]
    Yellow,
    #[display("white")]
    White,
    /// 24-bit RGB, rendered `#rrggbb`. Build with `Color::hex`; bits above
    /// the low 24 are never rendered.
    #[display("#{:06x}", _0 & Color::RGB_MASK)]
    Hex(u32),
}

impl Color {
    const RGB_MASK: u32 = 0x00FF_FFFF;

    const NAMED: [Self; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    /// A hex colour, rejecting values that do not fit in `#rrggbb`.
    pub fn hex(rgb: u32) -> Result<Self, ParseError> {
        if rgb > Self::RGB_MASK {
            return Err(ParseError::InvalidColor(format!("{rgb:#x}")));
        }

        Ok(Self::Hex(rgb))
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ParseError::InvalidColor(s.to_string()));
            }
            return u32::from_str_radix(hex, 16)
                .map_err(|_| ParseError::InvalidColor(s.to_string()))
                .and_then(Self::hex);
        }

        Self::NAMED
            .into_iter()
            .find(|c| c.to_string() == s)
            .ok_or_else(|| ParseError::InvalidColor(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

///
/// TextElement
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TextElement {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    #[must_use]
    pub const fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Display for TextElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl From<&str> for TextElement {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TextElement {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_compact_json() {
        let t = TextElement::new("hello").color(Color::Red);
        assert_eq!(t.to_string(), r#"{"text":"hello","color":"red"}"#);
    }

    #[test]
    fn omits_unset_fields() {
        assert_eq!(TextElement::from("x").to_string(), r#"{"text":"x"}"#);
        assert_eq!(
            TextElement::new("b").bold(true).to_string(),
            r#"{"text":"b","bold":true}"#
        );
    }

    #[test]
    fn escapes_quotes() {
        let t = TextElement::new(r#"say "hi""#);
        assert_eq!(t.to_string(), r#"{"text":"say \"hi\""}"#);
    }

    #[test]
    fn hex_colors() {
        assert_eq!(Color::Hex(0x00ff_aa).to_string(), "#00ffaa");
        assert_eq!("#FF0000".parse::<Color>().unwrap(), Color::Hex(0xff_0000));
        assert_eq!("gold".parse::<Color>().unwrap(), Color::Gold);
        assert!("#fff".parse::<Color>().is_err());
        assert!("#+12345".parse::<Color>().is_err());
        assert!("orange".parse::<Color>().is_err());
    }

    #[test]
    fn hex_colors_stay_within_24_bits() {
        assert_eq!(Color::hex(0xff_ffff).unwrap().to_string(), "#ffffff");
        assert_eq!(
            Color::hex(0x0100_0000),
            Err(ParseError::InvalidColor("0x1000000".to_string()))
        );

        let raw = TextElement::new("x").color(Color::Hex(0xFFFF_FFFF));
        assert_eq!(raw.to_string(), r##"{"text":"x","color":"#ffffff"}"##);
    }
}
