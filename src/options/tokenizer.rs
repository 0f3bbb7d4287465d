//! Argument normalization.
//!
//! Turns the raw argument list into an ordered token list in a single pass.
//! Short clusters such as `-ecg` expand to one token per letter, and each
//! value-taking letter binds the next argument after the whole cluster, so
//! `-cg RED BLUE` and `-gc RED BLUE` both pair every color with its flag.

use std::collections::HashSet;

use tracing::trace;

use super::flags::{Control, Flag, Reset, Style, FLAGS};
use crate::color::Layer;

/// One normalized command-line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Style(Style),
    /// A color flag with the raw color argument bound to it
    Color { layer: Layer, value: String },
    Reset(Reset),
    Control(Control),
    /// A flag-shaped argument escolor does not know, kept as typed (`-x`, `--foo`)
    UnknownFlag(String),
    /// Plain text, before backslash unescaping
    Literal(String),
}

/// Which flags consume the argument that follows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGrammar {
    shorts_with_value: HashSet<char>,
    longs_with_value: HashSet<String>,
}

impl Default for OptionGrammar {
    /// The color flags (`-c`, `-g`, `--color`, `--background`) take values.
    fn default() -> Self {
        let colors = FLAGS
            .iter()
            .filter(|spec| matches!(spec.flag, Flag::Color(_)));
        Self {
            shorts_with_value: colors.clone().map(|spec| spec.short).collect(),
            longs_with_value: colors.map(|spec| spec.long.to_string()).collect(),
        }
    }
}

impl OptionGrammar {
    pub fn new<S, L>(shorts_with_value: S, longs_with_value: L) -> Self
    where
        S: IntoIterator<Item = char>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            shorts_with_value: shorts_with_value.into_iter().collect(),
            longs_with_value: longs_with_value.into_iter().map(Into::into).collect(),
        }
    }

    pub fn short_takes_value(&self, short: char) -> bool {
        self.shorts_with_value.contains(&short)
    }

    pub fn long_takes_value(&self, long: &str) -> bool {
        self.longs_with_value.contains(long)
    }
}

/// Shape of a single raw argument.
enum Shape<'a> {
    /// `--name`
    Long(&'a str),
    /// `-abc`, letters after the dash
    Cluster(&'a str),
    Word,
}

fn classify(arg: &str) -> Shape<'_> {
    if let Some(name) = arg.strip_prefix("--").filter(|name| !name.is_empty()) {
        Shape::Long(name)
    } else if let Some(letters) = arg.strip_prefix('-').filter(|letters| !letters.is_empty()) {
        Shape::Cluster(letters)
    } else {
        Shape::Word
    }
}

/// Split `args` into tokens according to `grammar`.
///
/// Never fails: unknown flags become [`Token::UnknownFlag`], and a value-taking
/// flag with nothing left to consume is bound to the empty string.
pub fn tokenize<I, S>(args: I, grammar: &OptionGrammar) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let mut tokens = Vec::with_capacity(args.len());
    let mut cursor = 0;

    while cursor < args.len() {
        let arg = &args[cursor];
        cursor += 1;

        match classify(arg) {
            Shape::Long(name) => {
                let value = grammar
                    .long_takes_value(name)
                    .then(|| take_value(&args, &mut cursor));
                push_flag(&mut tokens, arg.clone(), Flag::from_long(name), value);
            }
            Shape::Cluster(letters) => {
                for short in letters.chars() {
                    let value = grammar
                        .short_takes_value(short)
                        .then(|| take_value(&args, &mut cursor));
                    push_flag(
                        &mut tokens,
                        format!("-{}", short),
                        Flag::from_short(short),
                        value,
                    );
                }
            }
            Shape::Word => tokens.push(Token::Literal(arg.clone())),
        }
    }

    trace!(count = tokens.len(), tokens = ?tokens, "Tokenized arguments");
    tokens
}

/// Consume the argument under the cursor as a flag value.
fn take_value(args: &[String], cursor: &mut usize) -> String {
    match args.get(*cursor) {
        Some(value) => {
            *cursor += 1;
            value.clone()
        }
        None => String::new(),
    }
}

fn push_flag(tokens: &mut Vec<Token>, raw: String, flag: Option<Flag>, value: Option<String>) {
    let token = match flag {
        Some(Flag::Color(layer)) => {
            tokens.push(Token::Color {
                layer,
                value: value.unwrap_or_default(),
            });
            return;
        }
        Some(Flag::Style(style)) => Token::Style(style),
        Some(Flag::Reset(reset)) => Token::Reset(reset),
        Some(Flag::Control(control)) => Token::Control(control),
        None => Token::UnknownFlag(raw),
    };
    tokens.push(token);
    // A grammar may hand a value to a flag that has no use for one; keep it as text.
    if let Some(value) = value {
        tokens.push(Token::Literal(value));
    }
}
