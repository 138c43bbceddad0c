//! Parser and options.
//!
//! Parsing runs three stages over each top-level form in turn:
//!
//! 1. the [`Scanner`] splits the source text into [`Token`]s,
//! 2. the [`Grouper`] rebuilds bracket nesting into [`Group`]s, expanding the
//!    prefix shorthands `'x`, `` `x ``, `,x`, `,@x` and `#(...)` into
//!    two-element groups,
//! 3. the [`Translator`] turns each group into an ESTree statement.
//!
//! The first error aborts parsing; no partial tree is returned.
//!
//! [`Token`]: crate::token::Token

use crate::estree::{Program, Statement};
use crate::span::{Position, Span};
use crate::translate::Translator;

pub mod error;
pub mod group;
mod scan;

#[doc(inline)]
pub use self::error::{Error, Result};
pub use self::group::{Group, Grouper, List};
pub use self::scan::{scan, Scanner};

/// The highest language level; every special form is available.
pub const MAX_CHAPTER: u8 = 4;

/// Parser for Scheme source text.
///
/// This type provides the [`next_statement`] method, which translates one
/// top-level form at a time, and [`parse_program`], which translates the
/// rest of the input.
///
/// [`next_statement`]: Parser::next_statement
/// [`parse_program`]: Parser::parse_program
pub struct Parser<'a> {
    source: &'a str,
    grouper: Grouper<'a>,
    translator: Translator,
}

/// Various options to influence parser behavior.
#[derive(Debug, Clone)]
pub struct Options {
    chapter: u8,
    max_depth: usize,
}

impl Options {
    /// Construct the default set of options: the full language and a nesting
    /// limit of 128.
    pub fn new() -> Self {
        Options {
            chapter: MAX_CHAPTER,
            max_depth: 128,
        }
    }

    /// Restrict the language to the special forms introduced up to
    /// `chapter`.
    ///
    /// Values outside `1..=4` are clamped into that range.
    pub fn with_chapter(mut self, chapter: u8) -> Self {
        self.chapter = chapter.clamp(1, MAX_CHAPTER);
        self
    }

    /// Set the maximum nesting depth of brackets and prefix shorthands.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Query the configured language level.
    pub fn chapter(&self) -> u8 {
        self.chapter
    }

    /// Query the maximum nesting depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::new()
    }
}

impl<'a> Parser<'a> {
    /// Create a parser for `source` with the default options.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(source: &'a str) -> Self {
        Parser::from_str_custom(source, Options::default())
    }

    /// Create a customized parser for `source`.
    pub fn from_str_custom(source: &'a str, options: Options) -> Self {
        Parser {
            source,
            grouper: Grouper::new(Scanner::new(source), options.max_depth),
            translator: Translator::new(options.chapter),
        }
    }

    /// Groups the next top-level form without translating it.
    ///
    /// Returns `Ok(None)` at the end of the input.
    pub fn next_group(&mut self) -> Result<Option<Group>> {
        self.grouper
            .next_form()
            .map_err(|err| err.with_source(self.source))
    }

    /// Parses the next top-level form.
    ///
    /// Returns `Ok(None)` at the end of the input.
    pub fn next_statement(&mut self) -> Result<Option<Statement>> {
        let group = match self.next_group()? {
            Some(group) => group,
            None => return Ok(None),
        };
        self.translator
            .statement(&group, true)
            .map(Some)
            .map_err(|err| err.with_source(self.source))
    }

    /// Parses all remaining top-level forms into a program.
    pub fn parse_program(mut self) -> Result<Program> {
        let mut body = Vec::new();
        while let Some(statement) = self.next_statement()? {
            body.push(statement);
        }
        Ok(Program {
            body,
            loc: Span::new(Position::default(), end_position(self.source)),
        })
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Result<Statement>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_statement().transpose()
    }
}

fn end_position(source: &str) -> Position {
    let line = 1 + source.matches('\n').count();
    let last_line = source.rsplit('\n').next().unwrap_or("");
    Position::new(line, last_line.chars().count())
}

/// Parse a program from source text using the default options.
///
/// ```
/// use scmjs::estree::Statement;
///
/// let program = scmjs::parse("(define x 1) (display x)").unwrap();
/// assert_eq!(program.body.len(), 2);
/// assert!(matches!(program.body[0], Statement::Declaration(_)));
/// ```
pub fn parse(source: &str) -> Result<Program> {
    Parser::from_str(source).parse_program()
}

/// Parse a program from source text using the given options.
///
/// ```
/// use scmjs::parse::Options;
///
/// let err = scmjs::parse_custom("(set! x 1)", Options::new().with_chapter(2)).unwrap_err();
/// assert!(err.is_syntax());
/// assert_eq!(err.chapters(), Some((3, 2)));
/// ```
pub fn parse_custom(source: &str, options: Options) -> Result<Program> {
    Parser::from_str_custom(source, options).parse_program()
}

#[cfg(test)]
mod tests;
