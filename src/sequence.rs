//! Escape sequence builder.
//!
//! Folds the token list into output segments. One escape run is always open:
//! style, color, and reset flags append codes to it, and every literal closes
//! it before the text is written. Flags therefore only affect text that comes
//! after them.

use tracing::trace;

use crate::color::resolve;
use crate::error::Result;
use crate::options::{Control, Token};
use crate::output::OutputFlags;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// A finished run: output segments plus the flags that apply to them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rendered {
    pub segments: Vec<String>,
    pub flags: OutputFlags,
}

/// How a build ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Rendered(Rendered),
    /// `-h/--help` was reached; nothing after it was processed
    Help,
    /// `-v/--version` was reached; nothing after it was processed
    Version,
}

/// Result of feeding one token to the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop(Control),
}

/// Accumulates codes and text while tokens are applied in order.
#[derive(Debug, Default)]
pub struct SequenceBuilder {
    pending: Vec<String>,
    segments: Vec<String>,
    flags: OutputFlags,
}

impl SequenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Codes of the open escape run, oldest first.
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    pub fn flags(&self) -> OutputFlags {
        self.flags
    }

    /// Apply a single token.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidColor`] when a color token does not resolve.
    pub fn apply(&mut self, token: &Token) -> Result<Step> {
        match token {
            Token::Style(style) => self.pending.push(style.code().to_string()),
            Token::Reset(reset) => self.pending.push(reset.code().to_string()),
            Token::Color { layer, value } => self.pending.push(resolve(value, *layer)?),
            Token::Control(control) => match control {
                Control::Help | Control::Version => return Ok(Step::Stop(*control)),
                Control::Escape => self.flags.escape = true,
                Control::NoEscape => self.flags.escape = false,
                Control::Newline => self.flags.newline = true,
                Control::NoNewline => self.flags.newline = false,
            },
            Token::Literal(text) | Token::UnknownFlag(text) => self.push_literal(text),
        }
        Ok(Step::Continue)
    }

    /// Close the open run, which becomes a plain reset (`ESC[m`) if empty.
    pub fn finish(mut self) -> Rendered {
        let run = format!("{}{}m", CSI, self.pending.join(";"));
        trace!(run = ?run, "Closed final escape run");
        self.segments.push(run);
        Rendered {
            segments: self.segments,
            flags: self.flags,
        }
    }

    fn push_literal(&mut self, text: &str) {
        if !self.pending.is_empty() {
            let run = format!("{}{}m", CSI, self.pending.join(";"));
            trace!(run = ?run, "Closed escape run");
            self.segments.push(run);
            self.pending.clear();
        }
        self.segments.push(unescape(text).to_string());
    }
}

/// Strip exactly one leading backslash, so `\-E` prints `-E`.
pub fn unescape(text: &str) -> &str {
    text.strip_prefix('\\').unwrap_or(text)
}

/// Run every token through a fresh builder.
///
/// # Errors
///
/// Stops at the first color that does not resolve; no partial output is kept.
pub fn build(tokens: &[Token]) -> Result<Outcome> {
    let mut builder = SequenceBuilder::new();
    for token in tokens {
        match builder.apply(token)? {
            Step::Continue => {}
            Step::Stop(Control::Version) => return Ok(Outcome::Version),
            Step::Stop(_) => return Ok(Outcome::Help),
        }
    }
    Ok(Outcome::Rendered(builder.finish()))
}
