/// Core evaluation logic.
///
/// Contains the [`core::Interpreter`], the dispatch over expression variants
/// and the evaluator's result type.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements logical NOT and arithmetic negation.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparisons and equality.
pub mod binary;
