//! Final rendering of a built sequence.
//!
//! By default escolor prints the *description* of the escape sequence, so
//! `ESC` shows up as the four characters `\x1b` and can be pasted into
//! scripts. With `--escape` the control bytes are written as-is.

use std::io::{self, Write};

/// The two output switches, last write wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFlags {
    /// Write control bytes instead of their textual form
    pub escape: bool,
    /// Terminate the output with `\n`
    pub newline: bool,
}

impl Default for OutputFlags {
    fn default() -> Self {
        Self {
            escape: false,
            newline: true,
        }
    }
}

/// Join `segments` and apply `flags`, producing exactly what goes to stdout.
pub fn render<S: AsRef<str>>(segments: &[S], flags: OutputFlags) -> String {
    let joined: String = segments.iter().map(AsRef::as_ref).collect();
    let mut out = if flags.escape {
        joined
    } else {
        describe(&joined)
    };
    if flags.newline {
        out.push('\n');
    }
    out
}

/// Write the rendered output in a single call.
///
/// # Errors
///
/// Propagates any error from `writer`.
pub fn emit<W: Write, S: AsRef<str>>(
    writer: &mut W,
    segments: &[S],
    flags: OutputFlags,
) -> io::Result<()> {
    writer.write_all(render(segments, flags).as_bytes())?;
    writer.flush()
}

/// Textual form of `text`: backslashes and non-printable characters escaped.
///
/// A single quote is escaped only when the text also holds a double quote.
pub fn describe(text: &str) -> String {
    let escape_single_quote = text.contains('\'') && text.contains('"');
    let mut out = String::with_capacity(text.len() + 8);

    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\'' if escape_single_quote => out.push_str("\\'"),
            c if !is_printable(c) => out.push_str(&hex_escape(c)),
            c => out.push(c),
        }
    }
    out
}

/// `\xNN`, `\uNNNN` or `\UNNNNNNNN`, whichever fits the code point.
fn hex_escape(c: char) -> String {
    let code = u32::from(c);
    if code <= 0xff {
        format!("\\x{:02x}", code)
    } else if code <= 0xffff {
        format!("\\u{:04x}", code)
    } else {
        format!("\\U{:08x}", code)
    }
}

/// Separators other than the ASCII space, format characters, and private use.
const NON_PRINTABLE: &[(u32, u32)] = &[
    (0x00A0, 0x00A0),
    (0x00AD, 0x00AD),
    (0x0600, 0x0605),
    (0x061C, 0x061C),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x0890, 0x0891),
    (0x08E2, 0x08E2),
    (0x1680, 0x1680),
    (0x180E, 0x180E),
    (0x2000, 0x200F),
    (0x2028, 0x202F),
    (0x205F, 0x206F),
    (0x3000, 0x3000),
    (0xE000, 0xF8FF),
    (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0x110BD, 0x110BD),
    (0x110CD, 0x110CD),
    (0x13430, 0x1343F),
    (0x1BCA0, 0x1BCA3),
    (0x1D173, 0x1D17A),
    (0xE0001, 0xE0001),
    (0xE0020, 0xE007F),
    (0xF0000, 0x10FFFF),
];

fn is_printable(c: char) -> bool {
    if c.is_control() {
        return false;
    }
    let code = u32::from(c);
    !NON_PRINTABLE
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}
