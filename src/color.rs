//! Color specifications and their SGR fragments.
//!
//! A color argument is one of:
//! - a named color (16 names, case ignored): `red`, `BBLUE`
//! - an 8-bit palette index: `0` to `255`
//! - a hexadecimal triple with optional `#`: `#cc0000`, `2986CC`
//! - a decimal RGB triple: `255,0,0`

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};

/// Which half of the cell a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Foreground,
    Background,
}

impl Layer {
    /// Offset added to the base code of a named color.
    fn named_offset(self) -> u8 {
        match self {
            Layer::Foreground => 0,
            Layer::Background => 10,
        }
    }

    /// Leading parameter of an extended (8-bit or RGB) color.
    fn extended_code(self) -> u8 {
        match self {
            Layer::Foreground => 38,
            Layer::Background => 48,
        }
    }
}

/// The 16 conventional terminal colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    /// Every named color with the name it is spelled as on the command line.
    pub const ALL: [(&'static str, NamedColor); 16] = [
        ("BLACK", NamedColor::Black),
        ("RED", NamedColor::Red),
        ("GREEN", NamedColor::Green),
        ("YELLOW", NamedColor::Yellow),
        ("BLUE", NamedColor::Blue),
        ("MAGENTA", NamedColor::Magenta),
        ("CYAN", NamedColor::Cyan),
        ("WHITE", NamedColor::White),
        ("BBLACK", NamedColor::BrightBlack),
        ("BRED", NamedColor::BrightRed),
        ("BGREEN", NamedColor::BrightGreen),
        ("BYELLOW", NamedColor::BrightYellow),
        ("BBLUE", NamedColor::BrightBlue),
        ("BMAGENTA", NamedColor::BrightMagenta),
        ("BCYAN", NamedColor::BrightCyan),
        ("BWHITE", NamedColor::BrightWhite),
    ];

    /// Look up a color name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|(spelling, _)| spelling.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
    }

    /// Foreground SGR code (30-37, 90-97).
    pub fn base_code(self) -> u8 {
        match self {
            NamedColor::Black => 30,
            NamedColor::Red => 31,
            NamedColor::Green => 32,
            NamedColor::Yellow => 33,
            NamedColor::Blue => 34,
            NamedColor::Magenta => 35,
            NamedColor::Cyan => 36,
            NamedColor::White => 37,
            NamedColor::BrightBlack => 90,
            NamedColor::BrightRed => 91,
            NamedColor::BrightGreen => 92,
            NamedColor::BrightYellow => 93,
            NamedColor::BrightBlue => 94,
            NamedColor::BrightMagenta => 95,
            NamedColor::BrightCyan => 96,
            NamedColor::BrightWhite => 97,
        }
    }
}

/// A parsed color argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    Named(NamedColor),
    /// 256-color palette index
    Indexed(u8),
    /// 24-bit RGB color
    TrueColor(u8, u8, u8),
}

impl ColorSpec {
    /// Parse a color argument.
    ///
    /// Grammars are tried in order: named, 8-bit, hexadecimal, RGB triple.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] when no grammar accepts `spec`, or when a
    /// numeric component is 256 or more. An empty `spec` yields
    /// `InvalidColor(None)`.
    pub fn parse(spec: &str) -> Result<Self> {
        if spec.is_empty() {
            return Err(Error::InvalidColor(None));
        }

        let parsed = NamedColor::from_name(spec)
            .map(ColorSpec::Named)
            .or_else(|| parse_byte(spec).map(ColorSpec::Indexed))
            .or_else(|| parse_hex(spec))
            .or_else(|| parse_rgb(spec));

        parsed.ok_or_else(|| {
            debug!(spec, "Rejected color specification");
            Error::InvalidColor(Some(spec.to_string()))
        })
    }

    /// SGR fragment for this color on the given layer, without `ESC[` or `m`.
    pub fn sgr(&self, layer: Layer) -> String {
        match *self {
            ColorSpec::Named(color) => (color.base_code() + layer.named_offset()).to_string(),
            ColorSpec::Indexed(index) => format!("{};5;{}", layer.extended_code(), index),
            ColorSpec::TrueColor(r, g, b) => {
                format!("{};2;{};{};{}", layer.extended_code(), r, g, b)
            }
        }
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpec::Named(color) => {
                let name = NamedColor::ALL
                    .iter()
                    .find(|(_, c)| c == color)
                    .map_or("?", |&(name, _)| name);
                f.write_str(name)
            }
            ColorSpec::Indexed(index) => write!(f, "{}", index),
            ColorSpec::TrueColor(r, g, b) => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
        }
    }
}

/// Resolve a color argument straight to its SGR fragment.
///
/// An 8-bit index keeps its digits as typed, so `007` gives `38;5;007`.
///
/// # Errors
///
/// See [`ColorSpec::parse`].
pub fn resolve(spec: &str, layer: Layer) -> Result<String> {
    Ok(match ColorSpec::parse(spec)? {
        ColorSpec::Indexed(_) => format!("{};5;{}", layer.extended_code(), spec),
        color => color.sgr(layer),
    })
}

/// 1 to 3 decimal digits with a value below 256.
fn parse_byte(digits: &str) -> Option<u8> {
    if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u16>().ok().and_then(|n| u8::try_from(n).ok())
}

fn parse_hex(spec: &str) -> Option<ColorSpec> {
    let digits = spec.strip_prefix('#').unwrap_or(spec);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(ColorSpec::TrueColor(byte(0)?, byte(2)?, byte(4)?))
}

fn parse_rgb(spec: &str) -> Option<ColorSpec> {
    let mut parts = spec.split(',');
    let r = parse_byte(parts.next()?)?;
    let g = parse_byte(parts.next()?)?;
    let b = parse_byte(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(ColorSpec::TrueColor(r, g, b))
}
