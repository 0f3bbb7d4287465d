//! The flag table: every option escolor understands and the code it applies.

use crate::color::Layer;

/// Text attributes that can be switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italic,
    Underline,
    DoubleUnderline,
    Overline,
    CrossedOut,
    Blink,
    Swap,
}

impl Style {
    pub fn code(self) -> u8 {
        match self {
            Style::Bold => 1,
            Style::Italic => 3,
            Style::Underline => 4,
            Style::Blink => 5,
            Style::Swap => 7,
            Style::CrossedOut => 9,
            Style::DoubleUnderline => 21,
            Style::Overline => 53,
        }
    }
}

/// Attributes that can be switched back off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reset {
    /// Every attribute at once
    All,
    Color,
    Background,
    /// Clears bold (and dim)
    Bold,
    Italic,
    /// Clears single and double underline
    Underline,
    Overline,
    CrossedOut,
    Blink,
    Swap,
}

impl Reset {
    pub fn code(self) -> u8 {
        match self {
            Reset::All => 0,
            Reset::Bold => 22,
            Reset::Italic => 23,
            Reset::Underline => 24,
            Reset::Blink => 25,
            Reset::Swap => 27,
            Reset::CrossedOut => 29,
            Reset::Color => 39,
            Reset::Background => 49,
            Reset::Overline => 55,
        }
    }
}

/// Flags that steer the program rather than the escape run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Help,
    Version,
    Escape,
    NoEscape,
    Newline,
    NoNewline,
}

/// What a recognized flag does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Color(Layer),
    Style(Style),
    Reset(Reset),
    Control(Control),
}

/// One row of the flag table.
#[derive(Debug, Clone, Copy)]
pub struct FlagSpec {
    pub short: char,
    pub long: &'static str,
    pub flag: Flag,
}

const fn spec(short: char, long: &'static str, flag: Flag) -> FlagSpec {
    FlagSpec { short, long, flag }
}

/// Every flag, in the order the usage text lists them.
pub const FLAGS: &[FlagSpec] = &[
    spec('e', "escape", Flag::Control(Control::Escape)),
    spec('n', "newline", Flag::Control(Control::Newline)),
    spec('E', "no-escape", Flag::Control(Control::NoEscape)),
    spec('N', "no-newline", Flag::Control(Control::NoNewline)),
    spec('c', "color", Flag::Color(Layer::Foreground)),
    spec('g', "background", Flag::Color(Layer::Background)),
    spec('b', "bold", Flag::Style(Style::Bold)),
    spec('i', "italic", Flag::Style(Style::Italic)),
    spec('u', "underline", Flag::Style(Style::Underline)),
    spec('d', "double-underline", Flag::Style(Style::DoubleUnderline)),
    spec('o', "overline", Flag::Style(Style::Overline)),
    spec('t', "crossed-out", Flag::Style(Style::CrossedOut)),
    spec('k', "blink", Flag::Style(Style::Blink)),
    spec('s', "swap", Flag::Style(Style::Swap)),
    spec('C', "no-color", Flag::Reset(Reset::Color)),
    spec('G', "no-background", Flag::Reset(Reset::Background)),
    spec('B', "no-bold", Flag::Reset(Reset::Bold)),
    spec('I', "no-italic", Flag::Reset(Reset::Italic)),
    spec('U', "no-underline", Flag::Reset(Reset::Underline)),
    spec('O', "no-overline", Flag::Reset(Reset::Overline)),
    spec('T', "no-crossed-out", Flag::Reset(Reset::CrossedOut)),
    spec('K', "no-blink", Flag::Reset(Reset::Blink)),
    spec('S', "no-swap", Flag::Reset(Reset::Swap)),
    spec('r', "reset", Flag::Reset(Reset::All)),
    spec('h', "help", Flag::Control(Control::Help)),
    spec('v', "version", Flag::Control(Control::Version)),
];

impl Flag {
    pub fn from_short(short: char) -> Option<Self> {
        FLAGS.iter().find(|s| s.short == short).map(|s| s.flag)
    }

    pub fn from_long(long: &str) -> Option<Self> {
        FLAGS.iter().find(|s| s.long == long).map(|s| s.flag)
    }
}
