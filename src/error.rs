//! Error type shared by the tokenizer, builder, and color resolver.

/// Errors that abort an escolor invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A color flag carried a value no color grammar accepts.
    ///
    /// `None` means the value was missing or empty.
    #[error("Invalid color given: {}. See usage with -h or --help.", describe(.0))]
    InvalidColor(Option<String>),
}

pub type Result<T> = std::result::Result<T, Error>;

fn describe(color: &Option<String>) -> String {
    match color {
        Some(color) => format!("'{}'", color),
        None => "NO COLOR GIVEN".to_string(),
    }
}
