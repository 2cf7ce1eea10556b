use std::{iter::Peekable, slice::Iter};

use crate::{
    ast::Expr,
    error::{Location, ParseError},
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default nesting budget.
///
/// Every prefix operator and binary-chain link costs one unit; a
/// parenthesized group costs [`GROUP_COST`]. The budget keeps parsing,
/// evaluation and dropping of any accepted tree within a 2 MiB stack, even in
/// debug builds.
pub const MAX_DEPTH: usize = 256;

/// Nesting units charged for a parenthesized group.
///
/// A group re-enters the whole grammar from `expression` down to `primary`,
/// so one level of parentheses takes several times the stack of a prefix
/// operator.
pub const GROUP_COST: usize = 4;

/// Recursive-descent parser over a scanned token sequence.
///
/// The parser reads exactly one expression. Each grammar rule is a method;
/// the binary layers live in `binary.rs`, the unary and primary rules in
/// `unary.rs`.
pub struct Parser<'a> {
    tokens:    Peekable<Iter<'a, Token>>,
    /// Line of the most recently consumed token, used when the tokens run out
    /// without an EOF token.
    last_line: usize,
    depth:     usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens` with the default nesting budget.
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens:    tokens.iter().peekable(),
               last_line: 1,
               depth:     0,
               max_depth: MAX_DEPTH, }
    }

    /// Replaces the nesting budget. Budgets larger than [`MAX_DEPTH`] may need
    /// a bigger stack than the default thread stack.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses one complete expression.
    ///
    /// The expression must be followed by the EOF token (or the end of the
    /// token slice).
    ///
    /// # Errors
    /// Returns the first [`ParseError`] encountered; parsing stops there.
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;

        match self.peek() {
            Some(token) if token.kind != TokenKind::Eof => {
                Err(self.error_at(Some(token), |location, line| {
                            ParseError::UnexpectedTrailingTokens { location, line }
                        }))
            },
            _ => Ok(expr),
        }
    }

    /// Parses a full expression.
    ///
    /// This is the entry point of the grammar. It begins at the
    /// lowest-precedence level, equality, and recursively descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := equality`
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_equality()
    }

    /// Returns the next token without consuming it.
    pub(in crate::interpreter::parser) fn peek(&mut self) -> Option<&'a Token> {
        self.tokens.peek().copied()
    }

    /// Consumes and returns the next token.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.next()?;
        self.last_line = token.line;
        Some(token)
    }

    /// Builds an error located at `token`, or at the end of input when there
    /// is no token left.
    pub(in crate::interpreter::parser) fn error_at(&self,
                                                   token: Option<&Token>,
                                                   make: fn(Location, usize) -> ParseError)
                                                   -> ParseError {
        match token {
            Some(token) => make(Location::of(token), token.line),
            None => make(Location::End, self.last_line),
        }
    }

    /// Charges `cost` nesting units at `token`.
    ///
    /// Callers record [`Parser::depth`] before descending and restore it with
    /// [`Parser::restore_depth`] once their rule is complete.
    ///
    /// # Errors
    /// Returns `NestingTooDeep` if the charge would exceed the budget.
    pub(in crate::interpreter::parser) fn descend(&mut self,
                                                  token: &Token,
                                                  cost: usize)
                                                  -> ParseResult<()> {
        if self.depth.saturating_add(cost) > self.max_depth {
            return Err(self.error_at(Some(token), |location, line| {
                                ParseError::NestingTooDeep { location, line }
                            }));
        }

        self.depth += cost;
        Ok(())
    }

    /// Returns the current nesting depth.
    pub(in crate::interpreter::parser) const fn depth(&self) -> usize {
        self.depth
    }

    /// Resets the nesting depth to a previously recorded value.
    pub(in crate::interpreter::parser) const fn restore_depth(&mut self, depth: usize) {
        self.depth = depth;
    }
}

/// Parses a token sequence into a single expression with the default nesting
/// budget.
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
///
/// # Example
/// ```
/// use treelox::{
///     error::Diagnostics,
///     interpreter::{lexer::scan, parser::core::parse_expression},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("-123 * (45.67)", &mut diagnostics);
/// let expr = parse_expression(&tokens).unwrap();
///
/// assert_eq!(expr.to_string(), "(* (- 123) (group 45.67))");
///
/// let tokens = scan("(1 + 2", &mut diagnostics);
/// let error = parse_expression(&tokens).unwrap_err();
///
/// assert_eq!(error.to_string(),
///            "[line 1] Error at end: Expect ')' after expression.");
/// ```
pub fn parse_expression(tokens: &[Token]) -> ParseResult<Expr> {
    Parser::new(tokens).parse()
}
