//! The grouper: rebuilds bracket nesting on top of the token stream.

use crate::span::{Position, Span};
use crate::token::{Keyword, Token, TokenKind};

use super::error::{Error, ErrorCode, Result};
use super::scan::Scanner;

/// One node of the untyped S-expression skeleton.
#[derive(Debug, Clone, PartialEq)]
pub enum Group {
    /// A single token.
    Token(Token),
    /// A bracketed sequence, or the two-element group a prefix shorthand
    /// expands to.
    List(List),
}

/// A sequence of groups together with the extent of its brackets.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    elements: Vec<Group>,
    span: Span,
    start_offset: usize,
    end_offset: usize,
}

impl Group {
    /// The extent of the group in the source text.
    pub fn span(&self) -> Span {
        match self {
            Group::Token(token) => token.span(),
            Group::List(list) => list.span,
        }
    }

    /// The position of the group's first character.
    pub fn start(&self) -> Position {
        self.span().start()
    }

    /// Byte offset of the group's first character.
    pub fn start_offset(&self) -> usize {
        match self {
            Group::Token(token) => token.start_offset(),
            Group::List(list) => list.start_offset,
        }
    }

    /// Byte offset just past the group's last character.
    pub fn end_offset(&self) -> usize {
        match self {
            Group::Token(token) => token.end_offset(),
            Group::List(list) => list.end_offset,
        }
    }

    /// The token, if this group is a leaf.
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Group::Token(token) => Some(token),
            Group::List(_) => None,
        }
    }

    /// The list, if this group is not a leaf.
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Group::Token(_) => None,
            Group::List(list) => Some(list),
        }
    }

    /// The token if this group is a plain identifier.
    pub fn as_identifier(&self) -> Option<&Token> {
        self.as_token()
            .filter(|token| token.kind() == TokenKind::Identifier)
    }

    /// The keyword heading this group, if it is a list starting with one.
    pub fn head_keyword(&self) -> Option<Keyword> {
        self.as_list()?.elements.first()?.as_token()?.keyword()
    }
}

impl List {
    fn new(elements: Vec<Group>, start: (usize, Position), end: (usize, Position)) -> Self {
        List {
            elements,
            span: Span::new(start.1, end.1),
            start_offset: start.0,
            end_offset: end.0,
        }
    }

    /// The elements of the list.
    pub fn elements(&self) -> &[Group] {
        &self.elements
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true for `()`.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The extent of the list, brackets included.
    pub fn span(&self) -> Span {
        self.span
    }
}

fn closing(open: TokenKind) -> (TokenKind, char) {
    match open {
        TokenKind::LeftBracket => (TokenKind::RightBracket, ']'),
        _ => (TokenKind::RightParen, ')'),
    }
}

/// Pulls tokens from a [`Scanner`] and assembles them into top-level
/// [`Group`]s, one form at a time.
pub struct Grouper<'a> {
    scanner: Scanner<'a>,
    remaining_depth: usize,
}

impl<'a> Grouper<'a> {
    /// Create a grouper that allows nesting up to `max_depth` levels.
    pub fn new(scanner: Scanner<'a>, max_depth: usize) -> Self {
        Grouper {
            scanner,
            remaining_depth: max_depth,
        }
    }

    /// Reads the next top-level form.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn next_form(&mut self) -> Result<Option<Group>> {
        loop {
            let token = self.scanner.next_token()?;
            match token.kind() {
                TokenKind::Eof => return Ok(None),
                kind if kind.is_close() => {
                    return Err(Error::at_token(
                        ErrorCode::UnexpectedClose(token.lexeme().into()),
                        &token,
                    ))
                }
                TokenKind::DatumComment => self.skip_datum(&token)?,
                _ => return self.form(token).map(Some),
            }
        }
    }

    fn enter(&mut self, token: &Token) -> Result<()> {
        self.remaining_depth = self.remaining_depth.saturating_sub(1);
        if self.remaining_depth == 0 {
            return Err(Error::at_token(ErrorCode::RecursionLimitExceeded, token));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.remaining_depth += 1;
    }

    /// Builds the form starting with `token`, which is neither a closing
    /// bracket nor a datum comment.
    fn form(&mut self, token: Token) -> Result<Group> {
        if token.kind().is_open() {
            self.enter(&token)?;
            let ret = self.list(token);
            self.leave();
            return ret;
        }
        if let Some(keyword) = token.kind().prefix_keyword() {
            self.enter(&token)?;
            let ret = self.operand(&token);
            self.leave();
            let operand = ret?;
            let start = (token.start_offset(), token.start());
            let end = (operand.end_offset(), operand.span().end());
            let head = Group::Token(token.expand_prefix(keyword));
            return Ok(Group::List(List::new(vec![head, operand], start, end)));
        }
        Ok(Group::Token(token))
    }

    /// Discards the form commented out by a `#;` token.
    fn skip_datum(&mut self, comment: &Token) -> Result<()> {
        self.enter(comment)?;
        let ret = self.operand(comment);
        self.leave();
        ret.map(drop)
    }

    /// Reads the single form following a prefix token or datum comment.
    fn operand(&mut self, prefix: &Token) -> Result<Group> {
        loop {
            let token = self.scanner.next_token()?;
            match token.kind() {
                TokenKind::Eof => return Err(Error::at_token(ErrorCode::UnclosedGroup, prefix)),
                kind if kind.is_close() => {
                    return Err(Error::at_token(
                        ErrorCode::UnexpectedClose(token.lexeme().into()),
                        &token,
                    ))
                }
                TokenKind::DatumComment => self.skip_datum(&token)?,
                _ => return self.form(token),
            }
        }
    }

    /// Assumes `open` was just read; reads up to and including the matching
    /// closing bracket.
    fn list(&mut self, open: Token) -> Result<Group> {
        let (expected, expected_char) = closing(open.kind());
        let mut elements = Vec::new();
        loop {
            let token = self.scanner.next_token()?;
            match token.kind() {
                TokenKind::Eof => return Err(Error::at_token(ErrorCode::UnclosedGroup, &open)),
                kind if kind == expected => {
                    let start = (open.start_offset(), open.start());
                    let end = (token.end_offset(), token.span().end());
                    return Ok(Group::List(List::new(elements, start, end)));
                }
                kind if kind.is_close() => {
                    return Err(Error::at_token(
                        ErrorCode::MismatchedParenthesis {
                            expected: expected_char,
                        },
                        &token,
                    ))
                }
                TokenKind::DatumComment => self.skip_datum(&token)?,
                _ => elements.push(self.form(token)?),
            }
        }
    }
}
