/// The evaluator module computes the value of a parsed expression.
///
/// The evaluator walks the AST, evaluates operands left to right, applies
/// operators and produces a single [`value::core::Value`]. It is the last
/// stage of interpretation.
///
/// # Responsibilities
/// - Evaluates every expression variant.
/// - Enforces operand type rules for arithmetic and comparisons.
/// - Reports runtime errors that name the offending operator token.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens,
/// each corresponding to a punctuator, operator, literal, identifier or
/// keyword. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme,
///   literal and source line.
/// - Skips whitespace and `//` comments while tracking line numbers.
/// - Reports lexical errors and keeps scanning after them.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and builds
/// one expression tree that respects operator precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] nodes.
/// - Validates grammar, reporting the first error with its location.
/// - Bounds expression nesting.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares [`value::core::Value`] together with its truthiness, equality and
/// display rules.
pub mod value;
