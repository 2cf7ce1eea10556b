/// Numeric helpers.
///
/// This module provides the canonical text form of numbers, shared by value
/// stringification, the AST printers and the token dump.
pub mod num;
