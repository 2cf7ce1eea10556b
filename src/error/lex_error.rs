/// The kinds of lexical errors.
///
/// This is also the error type of the `logos` lexer; unmatched input produces
/// the default kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    #[default]
    UnexpectedCharacter,
    /// A string literal with no closing `"` before the end of the source.
    UnterminatedString,
}

impl LexErrorKind {
    /// Returns the human readable message for this kind.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnexpectedCharacter => "Unexpected character.",
            Self::UnterminatedString => "Unterminated string.",
        }
    }
}

/// A lexical error together with the line it was detected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// The source line where the error occurred.
    pub line: usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.kind.message())
    }
}

impl std::error::Error for LexError {}
