/// Core parsing logic.
///
/// Contains the [`core::Parser`] state, the entry points and the shared
/// token-stream helpers, including the nesting budget.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative precedence layers: equality, comparison,
/// term and factor.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals and parenthesized groups.
pub mod unary;
