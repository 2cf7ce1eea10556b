//! # treelox
//!
//! treelox is a tree-walking interpreter for the expression subset of Lox,
//! written in Rust. It scans, parses and evaluates a single expression over
//! numbers, strings, booleans and `nil`, reporting errors in the classic
//! `[line N] Error ...` format.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::Diagnostics,
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{Token, scan},
        parser::core::{MAX_DEPTH, Parser},
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// the syntactic structure of an expression as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of expression variants.
/// - Keeps the operator token on operator nodes for error reporting.
/// - Prints trees in prefix form and back to re-parsable source.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while interpreting an
/// expression, together with the [`error::Diagnostics`] sink that collects
/// them.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, parser, evaluator).
/// - Attaches line numbers and locations for context.
/// - Formats every error exactly as it is reported to the user.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for each phase.
pub mod interpreter;
/// General utilities shared by several phases.
///
/// Currently holds the number formatting used wherever a number is shown to
/// the user.
pub mod util;

/// Receives the intermediate products of a pipeline run.
///
/// Both hooks default to doing nothing; the driver uses them to dump tokens
/// and trees.
pub trait Observer {
    /// Called with every scanned token, EOF included, before parsing.
    fn scanned(&mut self, _tokens: &[Token]) {}

    /// Called with the parsed expression right before it is evaluated.
    fn parsed(&mut self, _expr: &Expr) {}
}

impl Observer for () {}

/// Scans, parses and evaluates `source` with the default nesting budget.
///
/// Every problem is reported into `diagnostics`. Evaluation only runs when
/// scanning and parsing produced no error, so a runtime error is never
/// reported for an input that also has a static error.
///
/// Returns the value of the expression, or `None` if any error was reported.
///
/// # Examples
/// ```
/// use treelox::{error::Diagnostics, interpreter::value::core::Value, run};
///
/// let mut diagnostics = Diagnostics::new();
/// assert_eq!(run("1 + 2 * 3", &mut diagnostics), Some(Value::Number(7.0)));
/// assert!(diagnostics.is_empty());
///
/// assert_eq!(run("-\"muffin\"", &mut diagnostics), None);
/// assert!(diagnostics.had_runtime_error());
/// ```
pub fn run(source: &str, diagnostics: &mut Diagnostics) -> Option<Value> {
    run_with(source, MAX_DEPTH, &mut (), diagnostics)
}

/// Same as [`run`], with an explicit nesting budget for the parser and an
/// [`Observer`] that sees the tokens and the tree.
pub fn run_with(source: &str,
                max_depth: usize,
                observer: &mut impl Observer,
                diagnostics: &mut Diagnostics)
                -> Option<Value> {
    let tokens = scan(source, diagnostics);
    observer.scanned(&tokens);

    let expr = match Parser::new(&tokens).with_max_depth(max_depth).parse() {
        Ok(expr) => expr,
        Err(error) => {
            diagnostics.report(error);
            return None;
        },
    };

    if diagnostics.had_error() {
        return None;
    }

    observer.parsed(&expr);

    match Interpreter::new().evaluate(&expr) {
        Ok(value) => Some(value),
        Err(error) => {
            diagnostics.report(error);
            None
        },
    }
}

/// Returns the value of the expression in `source`.
///
/// This is a convenience wrapper over [`run`] for callers that want a plain
/// `Result`.
///
/// # Errors
/// Returns every collected diagnostic if scanning, parsing or evaluation
/// failed.
///
/// # Examples
/// ```
/// use treelox::get_result;
///
/// // Simple expression: the result will be calculated and no error should occur.
/// let value = get_result("\"foo\" + \"bar\"").unwrap();
/// assert_eq!(value.to_string(), "foobar");
///
/// // Example with an intentional error (mixed operand types).
/// let errors = get_result("1 + \"1\"").unwrap_err();
/// assert_eq!(errors.to_string(),
///            "Operands must be two numbers or two strings.\n[line 1]");
/// ```
pub fn get_result(source: &str) -> Result<Value, Diagnostics> {
    let mut diagnostics = Diagnostics::new();

    match run(source, &mut diagnostics) {
        Some(value) if diagnostics.is_empty() => Ok(value),
        _ => Err(diagnostics),
    }
}
