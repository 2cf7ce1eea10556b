use crate::util::num::format_number;

/// Represents a runtime value in the interpreter.
///
/// Every literal token and every computed result is one of these four
/// variants. There are no implicit conversions between them; operators that
/// need a particular variant check for it and fail with a runtime error
/// otherwise.
///
/// Equality is structural: `Nil` equals `Nil`, values of different variants
/// are never equal, and values of the same variant compare by their contents.
/// Numbers follow IEEE comparison, so `NaN` is not equal to itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A double precision floating-point number.
    Number(f64),
    /// An immutable piece of text.
    String(String),
    /// A boolean value (`true` or `false`).
    /// Produced by literals, comparison and equality operators, and `!`.
    Bool(bool),
    /// The absence of a value.
    Nil,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl Value {
    /// Returns the truthiness of the value.
    ///
    /// `Nil` and `false` are falsy; every other value, including `0` and the
    /// empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Returns the number if the value is a [`Value::Number`].
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Stringifies the value for display.
///
/// Numbers print in their shortest form without a trailing `.0`, strings
/// print their raw contents, `Nil` prints as `nil`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
        }
    }
}
