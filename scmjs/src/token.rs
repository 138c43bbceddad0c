//! Tokens produced by the scanner.

use std::fmt;

use crate::number::Number;
use crate::span::{Position, Span};

/// The closed set of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `'`, shorthand for `quote`.
    Apostrophe,
    /// `` ` ``, shorthand for `quasiquote`.
    Backtick,
    /// `,`, shorthand for `unquote`.
    Comma,
    /// `,@`, shorthand for `unquote-splicing`.
    CommaAt,
    /// `#` directly followed by an opening parenthesis; starts a vector.
    Hash,
    /// `#;`, which comments out the following form.
    DatumComment,
    /// A lone `.`, separating the tail of a dotted list.
    Dot,
    /// Any atom that is not a number, boolean or keyword.
    Identifier,
    /// A numeric literal.
    Number,
    /// `#t`, `#f`, `#true` or `#false`.
    Boolean,
    /// A string literal.
    String,
    /// A special-form keyword.
    Keyword(Keyword),
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns true for `(` and `[`.
    pub fn is_open(self) -> bool {
        matches!(self, TokenKind::LeftParen | TokenKind::LeftBracket)
    }

    /// Returns true for `)` and `]`.
    pub fn is_close(self) -> bool {
        matches!(self, TokenKind::RightParen | TokenKind::RightBracket)
    }

    /// Returns true for the literal kinds: numbers, booleans and strings.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::Boolean | TokenKind::String
        )
    }

    /// The keyword a prefix shorthand expands to.
    pub fn prefix_keyword(self) -> Option<Keyword> {
        match self {
            TokenKind::Apostrophe => Some(Keyword::Quote),
            TokenKind::Backtick => Some(Keyword::Quasiquote),
            TokenKind::Comma => Some(Keyword::Unquote),
            TokenKind::CommaAt => Some(Keyword::UnquoteSplicing),
            TokenKind::Hash => Some(Keyword::Vector),
            _ => None,
        }
    }
}

/// Special-form keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `define`
    Define,
    /// `if`
    If,
    /// `else`, only meaningful as a `cond` clause head.
    Else,
    /// `lambda`
    Lambda,
    /// `let`
    Let,
    /// `cond`
    Cond,
    /// `quote`
    Quote,
    /// `quasiquote`
    Quasiquote,
    /// `unquote`
    Unquote,
    /// `unquote-splicing`
    UnquoteSplicing,
    /// Vector literal; only produced by expanding `#(`.
    Vector,
    /// `set!`
    Set,
    /// `begin`
    Begin,
    /// `delay`
    Delay,
    /// `import`
    Import,
    /// `export`
    Export,
}

impl Keyword {
    /// Looks up the keyword spelled `lexeme`.
    ///
    /// Vector literals have no spelling of their own; `vector` is an ordinary
    /// identifier.
    pub fn from_lexeme(lexeme: &str) -> Option<Keyword> {
        Some(match lexeme {
            "define" => Keyword::Define,
            "if" => Keyword::If,
            "else" => Keyword::Else,
            "lambda" => Keyword::Lambda,
            "let" => Keyword::Let,
            "cond" => Keyword::Cond,
            "quote" => Keyword::Quote,
            "quasiquote" => Keyword::Quasiquote,
            "unquote" => Keyword::Unquote,
            "unquote-splicing" => Keyword::UnquoteSplicing,
            "set!" => Keyword::Set,
            "begin" => Keyword::Begin,
            "delay" => Keyword::Delay,
            "import" => Keyword::Import,
            "export" => Keyword::Export,
            _ => return None,
        })
    }

    /// The keyword's name, used as the lexeme of expanded prefix tokens.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Define => "define",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Lambda => "lambda",
            Keyword::Let => "let",
            Keyword::Cond => "cond",
            Keyword::Quote => "quote",
            Keyword::Quasiquote => "quasiquote",
            Keyword::Unquote => "unquote",
            Keyword::UnquoteSplicing => "unquote-splicing",
            Keyword::Vector => "vector",
            Keyword::Set => "set!",
            Keyword::Begin => "begin",
            Keyword::Delay => "delay",
            Keyword::Import => "import",
            Keyword::Export => "export",
        }
    }

    /// The lowest language level (chapter) at which the keyword is available.
    pub fn minimum_chapter(self) -> u8 {
        match self {
            Keyword::Define
            | Keyword::If
            | Keyword::Else
            | Keyword::Lambda
            | Keyword::Let
            | Keyword::Cond
            | Keyword::Begin
            | Keyword::Import
            | Keyword::Export => 1,
            Keyword::Quote
            | Keyword::Quasiquote
            | Keyword::Unquote
            | Keyword::UnquoteSplicing
            | Keyword::Vector => 2,
            Keyword::Set | Keyword::Delay => 3,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decoded value of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// A numeric literal.
    Number(Number),
    /// A boolean literal.
    Boolean(bool),
    /// A string literal with its escapes resolved.
    String(String),
}

/// A positioned token.
///
/// Offsets are byte offsets into the source text; the end offset is
/// exclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    value: Option<TokenValue>,
    start_offset: usize,
    end_offset: usize,
    span: Span,
}

impl Token {
    pub(crate) fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        value: Option<TokenValue>,
        offsets: (usize, usize),
        span: Span,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            value,
            start_offset: offsets.0,
            end_offset: offsets.1,
            span,
        }
    }

    /// Builds the keyword token a prefix token expands to.
    ///
    /// The new token keeps the position of the prefix it replaces.
    pub(crate) fn expand_prefix(&self, keyword: Keyword) -> Token {
        Token {
            kind: TokenKind::Keyword(keyword),
            lexeme: keyword.as_str().to_owned(),
            value: None,
            ..self.clone()
        }
    }

    /// The token's kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The keyword, if this is a keyword token.
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    /// The source text of the token.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The decoded literal value, for numbers, booleans and strings.
    pub fn value(&self) -> Option<&TokenValue> {
        self.value.as_ref()
    }

    /// Byte offset of the first character.
    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    /// Byte offset just past the last character.
    pub fn end_offset(&self) -> usize {
        self.end_offset
    }

    /// The token's extent in lines and columns.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The token's starting position.
    pub fn start(&self) -> Position {
        self.span.start()
    }

    /// One-based line of the first character.
    pub fn line(&self) -> usize {
        self.span.start().line()
    }

    /// Zero-based column of the first character.
    pub fn column(&self) -> usize {
        self.span.start().column()
    }
}
