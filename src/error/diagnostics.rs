use crate::error::{LexError, ParseError, RuntimeError};

/// A single reported failure from any phase of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Reported by the lexer.
    Lex(LexError),
    /// Reported by the parser.
    Parse(ParseError),
    /// Reported by the evaluator.
    Runtime(RuntimeError),
}

impl Diagnostic {
    /// Returns the source line the diagnostic refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line,
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }

    /// Returns `true` for lexical and syntax errors.
    #[must_use]
    pub const fn is_static(&self) -> bool {
        matches!(self, Self::Lex(_) | Self::Parse(_))
    }
}

impl From<LexError> for Diagnostic {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Diagnostic {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Diagnostic {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

/// Collects the diagnostics of one pipeline run.
///
/// A fresh sink is used for every source text (every line in the REPL), so
/// the error flags never leak from one input to the next.
///
/// # Example
/// ```
/// use treelox::{error::Diagnostics, interpreter::lexer::scan};
///
/// let mut diagnostics = Diagnostics::new();
/// scan("1 @ 2", &mut diagnostics);
///
/// assert!(diagnostics.had_error());
/// assert!(!diagnostics.had_runtime_error());
/// assert_eq!(diagnostics.to_string(), "[line 1] Error: Unexpected character.");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Records a diagnostic.
    pub fn report(&mut self, diagnostic: impl Into<Diagnostic>) {
        self.entries.push(diagnostic.into());
    }

    /// Returns `true` if a lexical or syntax error was recorded.
    #[must_use]
    pub fn had_error(&self) -> bool {
        self.entries.iter().any(Diagnostic::is_static)
    }

    /// Returns `true` if a runtime error was recorded.
    #[must_use]
    pub fn had_runtime_error(&self) -> bool {
        self.entries
            .iter()
            .any(|d| matches!(d, Diagnostic::Runtime(_)))
    }

    /// Iterates over the recorded diagnostics in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Returns the number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, diagnostic) in self.entries.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }

            write!(f, "{diagnostic}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Diagnostics {}
