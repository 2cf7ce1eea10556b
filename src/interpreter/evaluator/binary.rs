/// Dispatch of binary operators to their handlers.
pub mod core;

/// Arithmetic on numbers and `+` on strings.
pub mod arithmetic;

/// Ordering comparisons and equality.
pub mod comparison;
