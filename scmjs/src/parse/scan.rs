//! The scanner: source text to a flat sequence of tokens.

use crate::number::{self, Number};
use crate::span::{Position, Span};
use crate::token::{Keyword, Token, TokenKind, TokenValue};

use super::error::{Error, ErrorCode, Result};

/// Characters that end an atom.
fn is_delimiter(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '(' | ')' | '[' | ']' | '\'' | '`' | ',' | '"' | ';' | '#' | '@' | '{' | '}' | '|'
        )
}

/// Converts source text into tokens, one at a time.
///
/// Comments are skipped; every other character sequence either forms a
/// token or is reported as a lexical error. Once the end of the input is
/// reached, [`next_token`](Scanner::next_token) keeps returning
/// [`TokenKind::Eof`] tokens.
pub struct Scanner<'a> {
    source: &'a str,
    /// Byte index of the *next* character that will be returned by next() or
    /// peek().
    index: usize,
    line: usize,
    column: usize,
}

/// Scans `source` completely; the returned vector ends with an EOF token.
///
/// ```
/// use scmjs::parse::scan;
/// use scmjs::token::TokenKind;
///
/// let tokens = scan("(+ 1 2)").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::LeftParen,
///         TokenKind::Identifier,
///         TokenKind::Number,
///         TokenKind::Number,
///         TokenKind::RightParen,
///         TokenKind::Eof,
///     ]
/// );
/// ```
pub fn scan(source: &str) -> Result<Vec<Token>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner
            .next_token()
            .map_err(|err| err.with_source(source))?;
        let eof = token.kind() == TokenKind::Eof;
        tokens.push(token);
        if eof {
            return Ok(tokens);
        }
    }
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            index: 0,
            line: 1,
            column: 0,
        }
    }

    /// The source text being scanned.
    pub fn source(&self) -> &'a str {
        self.source
    }

    fn peek(&self) -> Option<char> {
        self.source[self.index..].chars().next()
    }

    fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.index += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn error(&self, code: ErrorCode, (offset, position): (usize, Position)) -> Error {
        Error::at(code, position, offset)
    }

    fn mark(&self) -> (usize, Position) {
        (self.index, self.position())
    }

    fn token(&self, kind: TokenKind, start: (usize, Position), value: Option<TokenValue>) -> Token {
        let (offset, position) = start;
        Token::new(
            kind,
            &self.source[offset..self.index],
            value,
            (offset, self.index),
            Span::new(position, self.position()),
        )
    }

    /// Produces the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        loop {
            while self.peek().map_or(false, char::is_whitespace) {
                self.next();
            }
            let start = self.mark();
            let c = match self.next() {
                Some(c) => c,
                None => return Ok(self.token(TokenKind::Eof, start, None)),
            };
            let kind = match c {
                ';' => {
                    while !matches!(self.next(), Some('\n') | None) {}
                    continue;
                }
                '(' => TokenKind::LeftParen,
                ')' => TokenKind::RightParen,
                '[' => TokenKind::LeftBracket,
                ']' => TokenKind::RightBracket,
                '\'' => TokenKind::Apostrophe,
                '`' => TokenKind::Backtick,
                ',' => {
                    if self.peek() == Some('@') {
                        self.next();
                        TokenKind::CommaAt
                    } else {
                        TokenKind::Comma
                    }
                }
                '"' => return self.string(start),
                '#' => match self.hash(start)? {
                    Some(token) => return Ok(token),
                    None => continue,
                },
                c if is_delimiter(c) => {
                    return Err(self.error(ErrorCode::UnexpectedCharacter(c), start))
                }
                _ => return self.atom(start),
            };
            return Ok(self.token(kind, start, None));
        }
    }

    fn skip_atom(&mut self) {
        while self.peek().map_or(false, |c| !is_delimiter(c)) {
            self.next();
        }
    }

    /// Assumes the first character of the atom was consumed.
    fn atom(&mut self, start: (usize, Position)) -> Result<Token> {
        self.skip_atom();
        let lexeme = &self.source[start.0..self.index];
        if lexeme == "." {
            return Ok(self.token(TokenKind::Dot, start, None));
        }
        if let Some(keyword) = Keyword::from_lexeme(lexeme) {
            return Ok(self.token(TokenKind::Keyword(keyword), start, None));
        }
        if number::is_number(lexeme) {
            let value = lexeme
                .parse::<Number>()
                .map_err(|err| self.error(ErrorCode::InvalidNumber(err), start))?;
            return Ok(self.token(
                TokenKind::Number,
                start,
                Some(TokenValue::Number(value)),
            ));
        }
        Ok(self.token(TokenKind::Identifier, start, None))
    }

    /// Assumes the `#` was consumed. Returns `None` after skipping a block
    /// comment.
    fn hash(&mut self, start: (usize, Position)) -> Result<Option<Token>> {
        match self.peek() {
            Some('(') => return Ok(Some(self.token(TokenKind::Hash, start, None))),
            Some(';') => {
                self.next();
                return Ok(Some(self.token(TokenKind::DatumComment, start, None)));
            }
            Some('|') => {
                self.next();
                self.block_comment(start)?;
                return Ok(None);
            }
            _ => {}
        }
        self.skip_atom();
        let value = match &self.source[start.0 + 1..self.index] {
            "t" | "true" => true,
            "f" | "false" => false,
            _ => return Err(self.error(ErrorCode::UnexpectedCharacter('#'), start)),
        };
        Ok(Some(self.token(
            TokenKind::Boolean,
            start,
            Some(TokenValue::Boolean(value)),
        )))
    }

    /// Assumes the opening `#|` was consumed. Block comments nest.
    fn block_comment(&mut self, start: (usize, Position)) -> Result<()> {
        let mut depth = 1;
        while depth > 0 {
            match self.next() {
                None => return Err(self.error(ErrorCode::EofWhileScanningComment, start)),
                Some('|') if self.peek() == Some('#') => {
                    self.next();
                    depth -= 1;
                }
                Some('#') if self.peek() == Some('|') => {
                    self.next();
                    depth += 1;
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Assumes the opening quotation mark was consumed.
    fn string(&mut self, start: (usize, Position)) -> Result<Token> {
        let mut value = String::new();
        loop {
            let escape = self.mark();
            match self.next() {
                None => return Err(self.error(ErrorCode::EofWhileScanningString, start)),
                Some('"') => break,
                Some('\\') => {
                    let c = match self.next() {
                        None => return Err(self.error(ErrorCode::EofWhileScanningString, start)),
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some('a') => '\x07',
                        Some('0') => '\0',
                        Some(c) => return Err(self.error(ErrorCode::InvalidEscape(c), escape)),
                    };
                    value.push(c);
                }
                Some(c) => value.push(c),
            }
        }
        Ok(self.token(TokenKind::String, start, Some(TokenValue::String(value))))
    }
}
