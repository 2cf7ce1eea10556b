/// Runtime values and their truthiness, equality and display rules.
pub mod core;
