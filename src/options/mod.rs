//! Command-line grammar.
//!
//! - flags: the table of known short and long flags
//! - tokenizer: raw arguments to an ordered token list

pub mod flags;
pub mod tokenizer;

pub use flags::{Control, Flag, FlagSpec, Reset, Style, FLAGS};
pub use tokenizer::{tokenize, OptionGrammar, Token};
