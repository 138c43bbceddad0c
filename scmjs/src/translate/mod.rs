//! Syntax-directed translation of groups into the target tree.
//!
//! A group whose first element is a keyword token is handed to the handler
//! for that special form; any other non-empty list is an application. Quoted
//! data never reaches the evaluating translation and is expanded into
//! constructor calls instead (see the `quote` submodule).
//!
//! The emitted tree refers to a handful of runtime helpers by name. Their
//! names are listed in [`names`] so a code generator can provide them.

use crate::estree::{
    CallExpression, Expression, ExpressionStatement, Identifier, Literal, LiteralValue, Statement,
};
use crate::parse::error::{Error, ErrorCode, Result};
use crate::parse::group::Group;
use crate::span::Span;
use crate::token::{Keyword, Token, TokenKind, TokenValue};

mod body;
mod forms;
mod quote;

/// Names of the runtime helpers the emitted tree calls.
pub mod names {
    /// Truthiness normalization: returns `false` only for the boolean false
    /// value.
    pub const TRUTHY: &str = "truthy";
    /// Builds a symbol from its name.
    pub const STRING_TO_SYMBOL: &str = "string->symbol";
    /// Builds a proper list from its arguments; `list()` is the empty list.
    pub const LIST: &str = "list";
    /// Builds a pair.
    pub const CONS: &str = "cons";
    /// Concatenates lists.
    pub const APPEND: &str = "append";
    /// Builds a vector from its arguments.
    pub const VECTOR: &str = "vector";
    /// The value of a missing `if` alternate or of a `cond` without a
    /// matching clause.
    pub const UNDEFINED: &str = "undefined";
}

/// Translates top-level groups under a fixed language level.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    chapter: u8,
}

impl Translator {
    /// Create a translator for the given language level.
    pub fn new(chapter: u8) -> Self {
        Translator { chapter }
    }

    /// Translates a form in statement position.
    ///
    /// Only top-level statements may be `import` or `export` declarations.
    pub fn statement(&self, group: &Group, top_level: bool) -> Result<Statement> {
        let (keyword, head) = match self.head(group)? {
            Some(head) => head,
            None => return self.expression_statement(group),
        };
        match keyword {
            Keyword::Define => Ok(Statement::Declaration(self.define(group)?)),
            Keyword::Import | Keyword::Export if !top_level => Err(Error::unexpected(head)),
            Keyword::Import => Ok(Statement::Import(self.import(group)?)),
            Keyword::Export => Ok(Statement::Export(self.export(group)?)),
            _ => self.expression_statement(group),
        }
    }

    fn expression_statement(&self, group: &Group) -> Result<Statement> {
        let expression = self.expression(group)?;
        Ok(Statement::Expression(ExpressionStatement {
            loc: expression.loc(),
            expression,
        }))
    }

    /// Translates a form in expression position.
    pub fn expression(&self, group: &Group) -> Result<Expression> {
        let list = match group {
            Group::Token(token) => return self.atom(token),
            Group::List(list) => list,
        };
        let (keyword, head) = match self.head(group)? {
            Some(head) => head,
            None => return self.application(group),
        };
        match keyword {
            Keyword::If => self.if_(group),
            Keyword::Cond => self.cond(group),
            Keyword::Lambda => self.lambda(group),
            Keyword::Let => self.let_(group),
            Keyword::Begin => self.begin(group),
            Keyword::Delay => self.delay(group),
            Keyword::Set => self.set(group),
            Keyword::Quote | Keyword::Quasiquote => {
                match list.elements() {
                    [_, quoted] => self.quote(quoted, keyword == Keyword::Quasiquote),
                    _ => Err(Error::syntax(keyword.as_str(), group)),
                }
            }
            Keyword::Vector | Keyword::UnquoteSplicing => Err(Error::at_token(
                ErrorCode::UnsupportedToken(head.lexeme().into()),
                head,
            )),
            Keyword::Define
            | Keyword::Import
            | Keyword::Export
            | Keyword::Else
            | Keyword::Unquote => Err(Error::unexpected(head)),
        }
    }

    /// The keyword heading `group`, checked against the language level.
    fn head<'g>(&self, group: &'g Group) -> Result<Option<(Keyword, &'g Token)>> {
        let head = match group.as_list().and_then(|list| list.elements().first()) {
            Some(Group::Token(token)) => token,
            _ => return Ok(None),
        };
        let keyword = match head.keyword() {
            Some(keyword) => keyword,
            None => return Ok(None),
        };
        if keyword.minimum_chapter() > self.chapter {
            return Err(Error::at_token(
                ErrorCode::DisallowedKeyword {
                    keyword,
                    configured: self.chapter,
                },
                head,
            ));
        }
        Ok(Some((keyword, head)))
    }

    fn atom(&self, token: &Token) -> Result<Expression> {
        match token.kind() {
            TokenKind::Identifier => Ok(Expression::Identifier(identifier(token))),
            kind if kind.is_literal() => Ok(Expression::Literal(literal(token))),
            _ => Err(Error::unexpected(token)),
        }
    }

    fn application(&self, group: &Group) -> Result<Expression> {
        let elements = match group.as_list().map(|list| list.elements()) {
            Some([callee, arguments @ ..]) => (callee, arguments),
            _ => return Err(Error::syntax("application", group)),
        };
        let callee = self.expression(elements.0)?;
        let arguments = elements
            .1
            .iter()
            .map(|argument| self.expression(argument))
            .collect::<Result<Vec<_>>>()?;
        let end = arguments.last().map_or(callee.loc(), Expression::loc);
        Ok(Expression::Call(CallExpression {
            loc: callee.loc().to(end),
            callee: Box::new(callee),
            arguments,
        }))
    }
}

fn identifier(token: &Token) -> Identifier {
    Identifier::new(token.lexeme(), token.span())
}

/// Assumes `token` is a number, boolean or string.
fn literal(token: &Token) -> Literal {
    let value = match token.value() {
        Some(TokenValue::Number(n)) => LiteralValue::Number(n.clone()),
        Some(TokenValue::Boolean(b)) => LiteralValue::Boolean(*b),
        Some(TokenValue::String(s)) => LiteralValue::String(s.clone()),
        None => LiteralValue::String(token.lexeme().into()),
    };
    Literal {
        value,
        raw: token.lexeme().into(),
        loc: token.span(),
    }
}

/// A call to one of the [`names`] helpers.
fn helper_call(name: &str, arguments: Vec<Expression>, loc: Span) -> Expression {
    Expression::Call(CallExpression {
        callee: Box::new(Expression::Identifier(Identifier::new(name, loc))),
        arguments,
        loc,
    })
}

fn undefined(loc: Span) -> Expression {
    Expression::Identifier(Identifier::new(names::UNDEFINED, loc))
}

fn truthy(test: Expression) -> Expression {
    let loc = test.loc();
    helper_call(names::TRUTHY, vec![test], loc)
}

#[cfg(test)]
mod tests;
