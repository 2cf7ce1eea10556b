/// Lexical errors.
///
/// Defines the failures the lexer can detect: characters that start no token
/// and string literals that run into the end of the source. Lexical errors are
/// never fatal; the lexer records them and keeps scanning.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree:
/// missing expressions, unbalanced parentheses, leftover tokens and excessive
/// nesting. A parse error aborts the current expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Every
/// runtime error carries the operator token whose operands had the wrong
/// type.
pub mod runtime_error;
/// The diagnostics sink.
///
/// Collects the lexical, syntax and runtime failures of one pipeline run in
/// the order they were reported and derives the driver's error flags from
/// them.
pub mod diagnostics;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::{Location, ParseError};
pub use runtime_error::RuntimeError;
