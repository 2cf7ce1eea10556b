use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The tree-walking evaluator.
///
/// Expressions are evaluated by recursing over the tree directly. The
/// expression language has no variables, so the interpreter holds no state;
/// every call to [`Interpreter::evaluate`] is independent.
#[derive(Debug, Default, Clone, Copy)]
pub struct Interpreter;

impl Interpreter {
    /// Creates a new interpreter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals yield
    /// their value, groupings yield their inner value, operator nodes
    /// evaluate their operands (left before right) and then apply the
    /// operator.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised anywhere in the tree; no
    /// partial value is produced.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     error::Diagnostics,
    ///     interpreter::{
    ///         evaluator::core::Interpreter, lexer::scan, parser::core::parse_expression,
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let mut diagnostics = Diagnostics::new();
    /// let tokens = scan("(1 + 2) * 3 == 9", &mut diagnostics);
    /// let expr = parse_expression(&tokens).unwrap();
    ///
    /// assert_eq!(Interpreter::new().evaluate(&expr).unwrap(), Value::Bool(true));
    /// ```
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(value.clone()),
            Expr::Grouping { expr } => self.evaluate(expr),
            Expr::Unary { op, token, operand } => {
                let operand = self.evaluate(operand)?;
                Self::eval_unary(*op, token, &operand)
            },
            Expr::Binary { left,
                           op,
                           token,
                           right, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Self::eval_binary(*op, token, &left, &right)
            },
        }
    }
}
