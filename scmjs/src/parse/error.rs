//! When parsing Scheme source goes wrong.

use std::error;
use std::fmt::{self, Debug, Display};
use std::result;

use crate::number;
use crate::span::Position;
use crate::token::{Keyword, Token};

use super::group::Group;

/// This type represents the possible errors when parsing Scheme source.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible. A
    /// larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `scmjs::parse::Error`.
pub type Result<T> = result::Result<T, Error>;

/// Location of a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    line: usize,
    column: usize,
    offset: usize,
}

impl Location {
    /// One-based line number at which the error was detected.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Zero-based column number at which the error was detected.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Byte offset into the source text at which the error was detected.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Error {
    /// Location of the error in the source text.
    pub fn location(&self) -> Location {
        self.err.location
    }

    /// The full source line the error was detected on, without its line
    /// terminator.
    ///
    /// This is available on every error returned by the parsing entry points.
    pub fn source_line(&self) -> Option<&str> {
        self.err.source_line.as_deref()
    }

    /// The lexeme of the offending token, for errors caused by a specific
    /// token.
    pub fn token(&self) -> Option<&str> {
        match &self.err.code {
            ErrorCode::UnexpectedToken(lexeme)
            | ErrorCode::UnsupportedToken(lexeme)
            | ErrorCode::UnexpectedClose(lexeme) => Some(lexeme.as_str()),
            ErrorCode::DisallowedKeyword { keyword, .. } => Some(keyword.as_str()),
            _ => None,
        }
    }

    /// For keywords used below their language level, the minimum chapter the
    /// keyword requires and the chapter that was configured.
    pub fn chapters(&self) -> Option<(u8, u8)> {
        match self.err.code {
            ErrorCode::DisallowedKeyword {
                keyword,
                configured,
            } => Some((keyword.minimum_chapter(), configured)),
            _ => None,
        }
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Lexical` - a character or escape that cannot start or
    ///   continue a token, or input ending inside a string or comment
    /// - `Category::Structural` - unbalanced or mismatched brackets
    /// - `Category::Syntax` - a malformed special form or a token in a
    ///   position where it is not allowed
    /// - `Category::Numeric` - a numeric literal that cannot be constructed
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::UnexpectedCharacter(_)
            | ErrorCode::InvalidEscape(_)
            | ErrorCode::EofWhileScanningString
            | ErrorCode::EofWhileScanningComment => Category::Lexical,
            ErrorCode::MismatchedParenthesis { .. }
            | ErrorCode::UnclosedGroup
            | ErrorCode::UnexpectedClose(_)
            | ErrorCode::RecursionLimitExceeded => Category::Structural,
            ErrorCode::InvalidSyntax(_)
            | ErrorCode::UnexpectedToken(_)
            | ErrorCode::UnsupportedToken(_)
            | ErrorCode::DisallowedKeyword { .. } => Category::Syntax,
            ErrorCode::InvalidNumber(_) => Category::Numeric,
        }
    }

    /// Returns true if this error was caused by a character sequence that
    /// does not form a token.
    pub fn is_lexical(&self) -> bool {
        self.classify() == Category::Lexical
    }

    /// Returns true if this error was caused by unbalanced brackets.
    ///
    /// Input ending inside an open group falls into this category, so
    /// interactive callers may retry once more input is available.
    pub fn is_structural(&self) -> bool {
        self.classify() == Category::Structural
    }

    /// Returns true if this error was caused by a malformed or misplaced form.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by an unconstructible number.
    pub fn is_numeric(&self) -> bool {
        self.classify() == Category::Numeric
    }

    /// Returns true if the input ended while a group was still open.
    pub fn is_eof(&self) -> bool {
        matches!(self.err.code, ErrorCode::UnclosedGroup)
    }
}

/// Categorizes the cause of a `scmjs::parse::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was raised by the scanner.
    Lexical,

    /// The error was caused by unbalanced or mismatched brackets.
    Structural,

    /// The error was caused by a malformed special form or a misplaced
    /// token.
    Syntax,

    /// The error was caused by a literal the numeric tower rejected.
    Numeric,
}

impl Error {
    pub(crate) fn at(code: ErrorCode, position: Position, offset: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code,
                location: Location {
                    line: position.line(),
                    column: position.column(),
                    offset,
                },
                source_line: None,
            }),
        }
    }

    pub(crate) fn at_token(code: ErrorCode, token: &Token) -> Self {
        Error::at(code, token.start(), token.start_offset())
    }

    pub(crate) fn syntax(form: &'static str, group: &Group) -> Self {
        Error::at(
            ErrorCode::InvalidSyntax(form),
            group.start(),
            group.start_offset(),
        )
    }

    pub(crate) fn unexpected(token: &Token) -> Self {
        Error::at_token(ErrorCode::UnexpectedToken(token.lexeme().into()), token)
    }

    /// Fills in the offending source line from the complete source text.
    pub(crate) fn with_source(mut self, source: &str) -> Self {
        if self.err.source_line.is_none() {
            let line = self.err.location.line.saturating_sub(1);
            self.err.source_line = Some(source.lines().nth(line).unwrap_or("").to_owned());
        }
        self
    }
}

struct ErrorImpl {
    code: ErrorCode,
    location: Location,
    source_line: Option<String>,
}

pub(crate) enum ErrorCode {
    /// A character that cannot start a token.
    UnexpectedCharacter(char),

    /// Unknown escape sequence in a string literal.
    InvalidEscape(char),

    /// EOF while scanning a string literal.
    EofWhileScanningString,

    /// EOF while scanning a block comment.
    EofWhileScanningComment,

    /// Closed a group with the wrong kind of bracket.
    MismatchedParenthesis { expected: char },

    /// EOF while a group or a prefix shorthand was still open.
    UnclosedGroup,

    /// A closing bracket without a matching opening one.
    UnexpectedClose(String),

    /// Encountered nesting deeper than the configured maximum.
    RecursionLimitExceeded,

    /// A special form with the wrong shape; carries the form's name.
    InvalidSyntax(&'static str),

    /// A token that may not appear in this position.
    UnexpectedToken(String),

    /// A token that is recognized but not supported in this position.
    UnsupportedToken(String),

    /// A keyword above the configured language level.
    DisallowedKeyword { keyword: Keyword, configured: u8 },

    /// A numeric literal the numeric tower rejected.
    InvalidNumber(number::Error),
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::UnexpectedCharacter(c) => write!(f, "unexpected character `{}`", c),
            ErrorCode::InvalidEscape(c) => write!(f, "invalid escape `\\{}`", c),
            ErrorCode::EofWhileScanningString => f.write_str("EOF while scanning a string"),
            ErrorCode::EofWhileScanningComment => f.write_str("EOF while scanning a comment"),
            ErrorCode::MismatchedParenthesis { expected } => {
                write!(f, "mismatched parenthesis, expected `{}`", expected)
            }
            ErrorCode::UnclosedGroup => f.write_str("EOF while parsing a list"),
            ErrorCode::UnexpectedClose(lexeme) => write!(f, "unexpected `{}`", lexeme),
            ErrorCode::RecursionLimitExceeded => f.write_str("recursion limit exceeded"),
            ErrorCode::InvalidSyntax(form) => write!(f, "invalid syntax in `{}`", form),
            ErrorCode::UnexpectedToken(lexeme) => write!(f, "unexpected token `{}`", lexeme),
            ErrorCode::UnsupportedToken(lexeme) => write!(f, "unsupported token `{}`", lexeme),
            ErrorCode::DisallowedKeyword {
                keyword,
                configured,
            } => write!(
                f,
                "`{}` requires chapter {} but chapter {} is configured",
                keyword,
                keyword.minimum_chapter(),
                configured
            ),
            ErrorCode::InvalidNumber(err) => Display::fmt(err, f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.err.code {
            ErrorCode::InvalidNumber(err) => Some(err),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {} column {}",
            self.code, self.location.line, self.location.column
        )
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error({:?}, line: {}, column: {})",
            self.err.code.to_string(),
            self.err.location.line,
            self.err.location.column,
        )
    }
}
