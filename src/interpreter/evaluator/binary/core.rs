use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::Token,
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation between two already evaluated values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator. `+` is overloaded for numbers and strings and goes to
    /// `eval_addition`. The other arithmetic operators use
    /// `eval_arithmetic`. Ordering operators use `eval_comparison` and the
    /// equality operators use `eval_equality`, which never fails.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `token`: The operator token, named by any error.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let plus = BinaryOperator::Add.token(1);
    /// let left = Value::from("con");
    /// let right = Value::from("cat");
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::Add, &plus, &left, &right);
    /// assert_eq!(result.unwrap(), Value::from("concat"));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       token: &Token,
                       left: &Value,
                       right: &Value)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };

        match op {
            Add => Self::eval_addition(token, left, right),
            Sub | Mul | Div => Self::eval_arithmetic(op, token, left, right),
            Greater | GreaterEqual | Less | LessEqual => {
                Self::eval_comparison(op, token, left, right)
            },
            Equal | NotEqual => Ok(Self::eval_equality(op, left, right)),
        }
    }

    /// Extracts two numbers from the operands of `token`.
    ///
    /// # Errors
    /// `OperandsMustBeNumbers` unless both operands are numbers.
    pub(crate) fn number_operands(token: &Token,
                                  left: &Value,
                                  right: &Value)
                                  -> EvalResult<(f64, f64)> {
        match (left.as_number(), right.as_number()) {
            (Some(l), Some(r)) => Ok((l, r)),
            _ => Err(RuntimeError::OperandsMustBeNumbers { operator: token.clone() }),
        }
    }
}
