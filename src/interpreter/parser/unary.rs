use crate::{
    ast::{Expr, UnaryOperator},
    error::{Location, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{GROUP_COST, ParseResult, Parser},
        value::core::Value,
    },
};

/// Maps a token kind to its corresponding unary operator.
///
/// # Example
/// ```
/// use treelox::{
///     ast::UnaryOperator,
///     interpreter::{lexer::TokenKind, parser::unary::token_to_unary_operator},
/// };
///
/// assert_eq!(token_to_unary_operator(TokenKind::Bang), Some(UnaryOperator::Not));
/// assert_eq!(token_to_unary_operator(TokenKind::Plus), None);
/// ```
#[must_use]
pub const fn token_to_unary_operator(kind: TokenKind) -> Option<UnaryOperator> {
    match kind {
        TokenKind::Bang => Some(UnaryOperator::Not),
        TokenKind::Minus => Some(UnaryOperator::Negate),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Supports prefix operators:
    /// - `-`  (numeric negation)
    /// - `!`  (logical not)
    ///
    /// Unary operators are right-associative, so an input like `!-x` is parsed
    /// as `!( -x )`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("!" | "-") unary
    ///            | primary
    /// ```
    pub(crate) fn parse_unary(&mut self) -> ParseResult<Expr> {
        if let Some(token) = self.peek()
           && let Some(op) = token_to_unary_operator(token.kind)
        {
            self.advance();

            let depth = self.depth();
            self.descend(token, 1)?;
            let operand = self.parse_unary()?;
            self.restore_depth(depth);

            return Ok(Expr::Unary { op,
                                    token: token.clone(),
                                    operand: Box::new(operand) });
        }

        self.parse_primary()
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER | STRING | "true" | "false" | "nil"
    ///              | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// - `ExpectedExpression` if the next token starts no expression.
    /// - `ExpectedClosingParen` if a group is not closed right after its inner
    ///   expression.
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Expr> {
        let expected_expression =
            |location: Location, line: usize| ParseError::ExpectedExpression { location, line };

        let Some(token) = self.advance() else {
            return Err(self.error_at(None, expected_expression));
        };

        match token.kind {
            TokenKind::Number | TokenKind::String => match &token.literal {
                Some(value) => Ok(Expr::Literal { value: value.clone() }),
                None => Err(self.error_at(Some(token), expected_expression)),
            },
            TokenKind::True => Ok(Expr::Literal { value: Value::Bool(true) }),
            TokenKind::False => Ok(Expr::Literal { value: Value::Bool(false) }),
            TokenKind::Nil => Ok(Expr::Literal { value: Value::Nil }),
            TokenKind::LeftParen => self.parse_grouping(token),
            _ => Err(self.error_at(Some(token), expected_expression)),
        }
    }

    /// Parses the rest of a parenthesized expression after its `(`.
    ///
    /// Grammar: `grouping := "(" expression ")"`
    fn parse_grouping(&mut self, open: &Token) -> ParseResult<Expr> {
        let depth = self.depth();
        self.descend(open, GROUP_COST)?;
        let expr = self.parse_expression()?;
        self.restore_depth(depth);

        match self.peek() {
            Some(token) if token.kind == TokenKind::RightParen => {
                self.advance();
                Ok(Expr::Grouping { expr: Box::new(expr) })
            },
            next => Err(self.error_at(next, |location, line| {
                                ParseError::ExpectedClosingParen { location, line }
                            })),
        }
    }
}
