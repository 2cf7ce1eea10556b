use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::Token,
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates an ordering comparison of the form `Number <Operator> Number`.
    ///
    /// Uses the natural floating-point ordering, so every comparison involving
    /// `NaN` is false.
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
    /// let less = BinaryOperator::Less.token(1);
    /// let result = Interpreter::eval_comparison(BinaryOperator::Less,
    ///                                           &less,
    ///                                           &Value::Number(3.0),
    ///                                           &Value::Number(5.0));
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           token: &Token,
                           left: &Value,
                           right: &Value)
                           -> EvalResult<Value> {
        let (left, right) = Self::number_operands(token, left, right)?;

        Ok(Value::Bool(match op {
                           BinaryOperator::Greater => left > right,
                           BinaryOperator::GreaterEqual => left >= right,
                           BinaryOperator::Less => left < right,
                           BinaryOperator::LessEqual => left <= right,
                           _ => unreachable!("eval_comparison used with {op}"),
                       }))
    }

    /// Evaluates `==` or `!=`.
    ///
    /// Defined for every pair of values and never fails: values of different
    /// variants are unequal, values of the same variant compare by contents.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let one = Value::Number(1.0);
    ///
    /// assert_eq!(Interpreter::eval_equality(BinaryOperator::Equal, &one, &one),
    ///            Value::Bool(true));
    /// assert_eq!(Interpreter::eval_equality(BinaryOperator::Equal, &one, &Value::from("1")),
    ///            Value::Bool(false));
    /// assert_eq!(Interpreter::eval_equality(BinaryOperator::NotEqual, &Value::Nil, &Value::Nil),
    ///            Value::Bool(false));
    /// ```
    #[must_use]
    pub fn eval_equality(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let is_equal = left == right;

        Value::Bool(match op {
                        BinaryOperator::Equal => is_equal,
                        BinaryOperator::NotEqual => !is_equal,
                        _ => unreachable!("eval_equality used with {op}"),
                    })
    }
}
