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
    /// Evaluates `-`, `*` or `/` on two numbers.
    ///
    /// Results follow IEEE double precision semantics. In particular division
    /// by zero is not an error: it yields an infinity, or `NaN` for `0 / 0`.
    ///
    /// # Errors
    /// `OperandsMustBeNumbers` unless both operands are numbers.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let slash = BinaryOperator::Div.token(1);
    /// let result = Interpreter::eval_arithmetic(BinaryOperator::Div,
    ///                                           &slash,
    ///                                           &Value::Number(1.0),
    ///                                           &Value::Number(0.0));
    ///
    /// assert_eq!(result.unwrap(), Value::Number(f64::INFINITY));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           token: &Token,
                           left: &Value,
                           right: &Value)
                           -> EvalResult<Value> {
        use BinaryOperator::{Div, Mul, Sub};

        let (left, right) = Self::number_operands(token, left, right)?;

        Ok(Value::Number(match op {
                             Sub => left - right,
                             Mul => left * right,
                             Div => left / right,
                             _ => unreachable!("eval_arithmetic used with {op}"),
                         }))
    }

    /// Evaluates `+`: numeric addition or string concatenation.
    ///
    /// # Errors
    /// `OperandsMustBeNumbersOrStrings` for any other combination of operand
    /// types, including a number and a string.
    pub fn eval_addition(token: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
            (Value::String(l), Value::String(r)) => Ok(Value::String(format!("{l}{r}"))),
            _ => Err(RuntimeError::OperandsMustBeNumbersOrStrings { operator: token.clone() }),
        }
    }
}
