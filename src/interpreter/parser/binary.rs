use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token kind represents a binary
/// operator (`+`, `-`, `*`, `/`, comparison and equality operators).
/// Returns `None` for all other kinds.
///
/// # Example
/// ```
/// use treelox::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses equality expressions.
    ///
    /// Handles left-associative binary operators: `==` and `!=`.
    ///
    /// Grammar: `equality := comparison (("!=" | "==") comparison)*`
    pub(crate) fn parse_equality(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(&[BinaryOperator::NotEqual, BinaryOperator::Equal],
                              Self::parse_comparison)
    }

    /// Parses relational expressions.
    ///
    /// Handles left-associative binary operators: `>`, `>=`, `<` and `<=`.
    ///
    /// Grammar: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
    pub(crate) fn parse_comparison(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(&[BinaryOperator::Greater,
                                BinaryOperator::GreaterEqual,
                                BinaryOperator::Less,
                                BinaryOperator::LessEqual],
                              Self::parse_term)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// Grammar: `term := factor (("-" | "+") factor)*`
    pub(crate) fn parse_term(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(&[BinaryOperator::Sub, BinaryOperator::Add],
                              Self::parse_factor)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative binary operators: `/` and `*`.
    ///
    /// Grammar: `factor := unary (("/" | "*") unary)*`
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Expr> {
        self.parse_left_assoc(&[BinaryOperator::Div, BinaryOperator::Mul],
                              Self::parse_unary)
    }

    /// Parses one left-associative precedence layer.
    ///
    /// Parses an operand with `operand`, then loops while the next token is
    /// one of `operators`, wrapping the expression built so far as the left
    /// side of a new binary node. Each link of the chain costs one nesting
    /// unit, since evaluating it recurses once more.
    fn parse_left_assoc(&mut self,
                        operators: &[BinaryOperator],
                        operand: fn(&mut Self) -> ParseResult<Expr>)
                        -> ParseResult<Expr> {
        let depth = self.depth();
        let mut left = operand(self)?;

        while let Some(token) = self.peek()
              && let Some(op) = token_to_binary_operator(token.kind)
              && operators.contains(&op)
        {
            self.advance();
            self.descend(token, 1)?;

            let right = operand(self)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  token: token.clone(),
                                  right: Box::new(right) };
        }

        self.restore_depth(depth);
        Ok(left)
    }
}
