use logos::Logos;

use crate::{
    error::{Diagnostics, LexError, LexErrorKind},
    interpreter::value::core::Value,
};

/// The kind of a lexical token.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized token kinds of the language.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// Identifier tokens, such as `average` or `_tmp1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// String literal tokens, such as `"hello"`. May span several lines.
    #[regex(r#""[^"]*""#, string_literal)]
    #[regex(r#""[^"]*"#, unterminated_string, allow_greedy = true)]
    String,
    /// Numeric literal tokens, such as `42` or `3.14`. A `.` is only part of
    /// the number when a digit follows it.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `for`
    #[token("for")]
    For,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks; counted, never emitted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
    /// End of input. Always the last token of a scan.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::For => "FOR",
            Self::Fun => "FUN",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Comment => "COMMENT",
            Self::NewLine => "NEWLINE",
            Self::Ignored => "IGNORED",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented for every `\n`, including the ones inside string literals.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Counts the line breaks inside the current string slice.
fn count_lines(lex: &mut logos::Lexer<TokenKind>) {
    let newlines = lex.slice().chars().filter(|&c| c == '\n').count();
    lex.extras.line += newlines;
}

/// Accepts a terminated string literal, keeping the line counter in step.
fn string_literal(lex: &mut logos::Lexer<TokenKind>) {
    count_lines(lex);
}

/// Rejects a string literal that reaches the end of the source.
///
/// The line counter is advanced first so the error is reported at the line
/// where the input ended.
fn unterminated_string(lex: &mut logos::Lexer<TokenKind>) -> Result<(), LexErrorKind> {
    count_lines(lex);
    Err(LexErrorKind::UnterminatedString)
}

/// A classified lexeme with its source line and, for literals, its value.
///
/// Tokens are created once by [`scan`] and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token kind.
    pub kind:    TokenKind,
    /// The exact source text of the token. Empty for EOF.
    pub lexeme:  String,
    /// The literal value; present only for `NUMBER` and `STRING` tokens.
    pub literal: Option<Value>,
    /// The source line the token ends on.
    pub line:    usize,
}

impl Token {
    /// Creates a token from its parts.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Option<Value>, line: usize)
               -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal,
               line }
    }

    /// Creates a token from a scanned lexeme, computing the literal value for
    /// numbers and strings.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{
    ///     lexer::{Token, TokenKind},
    ///     value::core::Value,
    /// };
    ///
    /// let token = Token::from_lexeme(TokenKind::String, "\"hi\"", 3);
    /// assert_eq!(token.literal, Some(Value::from("hi")));
    ///
    /// let token = Token::from_lexeme(TokenKind::Number, "2.5", 3);
    /// assert_eq!(token.literal, Some(Value::Number(2.5)));
    /// ```
    #[must_use]
    pub fn from_lexeme(kind: TokenKind, lexeme: &str, line: usize) -> Self {
        let literal = match kind {
            TokenKind::Number => lexeme.parse().ok().map(Value::Number),
            TokenKind::String => {
                lexeme.strip_prefix('"')
                      .and_then(|s| s.strip_suffix('"'))
                      .map(Value::from)
            },
            _ => None,
        };

        Self::new(kind, lexeme, literal, line)
    }

    /// Creates the end-of-input token.
    #[must_use]
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", None, line)
    }
}

/// Formats the token as `<KIND> <lexeme> <literal>`; the literal part is
/// empty when the token has none.
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;

        match &self.literal {
            Some(literal) => write!(f, "{literal}"),
            None => Ok(()),
        }
    }
}

/// Scans source text into tokens.
///
/// The result always ends with exactly one EOF token. Characters that start
/// no token and unterminated strings are reported to `diagnostics` and
/// skipped; scanning always continues to the end of the source.
///
/// # Example
/// ```
/// use treelox::{
///     error::Diagnostics,
///     interpreter::lexer::{TokenKind, scan},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("1 <= 2.5 // note", &mut diagnostics);
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::LessEqual, TokenKind::Number, TokenKind::Eof]);
/// assert!(diagnostics.is_empty());
/// ```
pub fn scan(source: &str, diagnostics: &mut Diagnostics) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        match result {
            Ok(kind) => tokens.push(Token::from_lexeme(kind, lexer.slice(), line)),
            Err(kind) => diagnostics.report(LexError { kind, line }),
        }
    }

    tokens.push(Token::eof(lexer.extras.line));
    tokens
}
