use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::Token,
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Not`: negation of the operand's truthiness; accepts any value.
    /// - `Negate`: arithmetic negation; the operand must be a number.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `token`: The operator token, named by any error.
    /// - `value`: Input value.
    ///
    /// # Errors
    /// `OperandMustBeNumber` when negating a non-number.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let not = UnaryOperator::Not.token(1);
    /// let v = Interpreter::eval_unary(UnaryOperator::Not, &not, &Value::Nil).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// let minus = UnaryOperator::Negate.token(1);
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, &minus, &Value::Number(5.0));
    /// assert_eq!(v.unwrap(), Value::Number(-5.0));
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, &minus, &Value::from("5"));
    /// assert!(v.is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, token: &Token, value: &Value) -> EvalResult<Value> {
        match op {
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
            UnaryOperator::Negate => match value.as_number() {
                Some(n) => Ok(Value::Number(-n)),
                None => Err(RuntimeError::OperandMustBeNumber { operator: token.clone() }),
            },
        }
    }
}
