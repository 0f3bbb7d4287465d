//! escolor library
//!
//! Builds ANSI SGR escape sequences from an ordered list of command-line
//! flags and literal strings.

pub mod color;
pub mod error;
pub mod options;
pub mod output;
pub mod sequence;
pub mod usage;

pub use color::{resolve, ColorSpec, Layer, NamedColor};
pub use error::{Error, Result};
pub use options::{tokenize, OptionGrammar, Token};
pub use output::{render, OutputFlags};
pub use sequence::{build, Outcome, Rendered, SequenceBuilder};

/// Tokenize `args` with the default grammar and build the result.
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] for the first color that does not resolve.
pub fn run<I, S>(args: I) -> Result<Outcome>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokens = tokenize(args, &OptionGrammar::default());
    build(&tokens)
}
