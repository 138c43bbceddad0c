//! Quoted data: `quote` and `quasiquote` expansion into constructor calls.
//!
//! Literals stay literals and every other token becomes a symbol. Lists turn
//! into `list(...)` calls, dotted lists into nested `cons(...)` calls and
//! vectors into `vector(...)` calls. Inside a quasiquote, `unquote` escapes
//! back to evaluation and `unquote-splicing` splices a list in via
//! `append(...)`.

use crate::estree::{Expression, Literal, LiteralValue};
use crate::parse::error::{Error, ErrorCode, Result};
use crate::parse::group::Group;
use crate::span::Span;
use crate::token::{Keyword, Token, TokenKind};

use super::{helper_call, literal, names, Translator};

/// The operand of a `(keyword operand)` group headed by `keyword`.
fn unwrap_prefix(group: &Group, keyword: Keyword) -> Option<&Group> {
    if group.head_keyword() != Some(keyword) {
        return None;
    }
    match group.as_list()?.elements() {
        [_, operand] => Some(operand),
        _ => None,
    }
}

fn symbol(token: &Token) -> Expression {
    let name = Expression::Literal(Literal {
        value: LiteralValue::String(token.lexeme().into()),
        raw: format!("{:?}", token.lexeme()),
        loc: token.span(),
    });
    helper_call(names::STRING_TO_SYMBOL, vec![name], token.span())
}

fn is_dot(group: &Group) -> bool {
    group
        .as_token()
        .map_or(false, |token| token.kind() == TokenKind::Dot)
}

fn unsupported(group: &Group) -> Error {
    let lexeme = group
        .as_list()
        .and_then(|list| list.elements().first())
        .and_then(Group::as_token)
        .map_or_else(String::new, |token| token.lexeme().to_owned());
    Error::at(
        ErrorCode::UnsupportedToken(lexeme),
        group.start(),
        group.start_offset(),
    )
}

impl Translator {
    /// Expands the quoted datum `group`.
    pub(super) fn quote(&self, group: &Group, quasi: bool) -> Result<Expression> {
        let list = match group {
            Group::Token(token) if token.kind().is_literal() => {
                return Ok(Expression::Literal(literal(token)))
            }
            Group::Token(token) if token.kind() == TokenKind::Dot => {
                return Err(Error::unexpected(token))
            }
            Group::Token(token) => return Ok(symbol(token)),
            Group::List(list) => list,
        };
        let loc = list.span();
        if list.is_empty() {
            return Ok(helper_call(names::LIST, Vec::new(), loc));
        }
        if quasi {
            if let Some(operand) = unwrap_prefix(group, Keyword::Unquote) {
                return self.expression(operand);
            }
            if unwrap_prefix(group, Keyword::UnquoteSplicing).is_some() {
                return Err(unsupported(group));
            }
        }
        if let Some(vector) = unwrap_prefix(group, Keyword::Vector) {
            let elements = vector.as_list().map_or(&[][..], |list| list.elements());
            let elements = self.quote_all(elements, quasi)?;
            return Ok(helper_call(names::VECTOR, elements, loc));
        }

        let elements = list.elements();
        let (items, tail) = match elements.iter().position(is_dot) {
            None => (elements, None),
            Some(dot) => match &elements[dot..] {
                [_, tail] if dot > 0 && !is_dot(tail) => (&elements[..dot], Some(tail)),
                _ => return Err(Error::syntax("quote", group)),
            },
        };
        let tail = match tail {
            Some(tail) => Some(self.quote(tail, quasi)?),
            None => None,
        };
        let splices = items
            .iter()
            .any(|item| unwrap_prefix(item, Keyword::UnquoteSplicing).is_some());
        if quasi && splices {
            return self.splice(items, tail, loc);
        }
        let items = self.quote_all(items, quasi)?;
        Ok(match tail {
            None => helper_call(names::LIST, items, loc),
            Some(tail) => items.into_iter().rev().fold(tail, |cdr, car| {
                let pair_loc = car.loc().to(loc);
                helper_call(names::CONS, vec![car, cdr], pair_loc)
            }),
        })
    }

    fn quote_all(&self, groups: &[Group], quasi: bool) -> Result<Vec<Expression>> {
        groups
            .iter()
            .map(|group| {
                if is_dot(group) {
                    return Err(Error::syntax("quote", group));
                }
                self.quote(group, quasi)
            })
            .collect()
    }

    /// `(a ,@xs b . t)` becomes `append(list(a), xs, list(b), t)`.
    fn splice(&self, items: &[Group], tail: Option<Expression>, loc: Span) -> Result<Expression> {
        let mut segments = Vec::new();
        let mut run = Vec::new();
        for item in items {
            match unwrap_prefix(item, Keyword::UnquoteSplicing) {
                Some(spliced) => {
                    if !run.is_empty() {
                        let run_loc = segment_loc(&run, loc);
                        segments.push(helper_call(names::LIST, std::mem::take(&mut run), run_loc));
                    }
                    segments.push(self.expression(spliced)?);
                }
                None => run.push(self.quote(item, true)?),
            }
        }
        if !run.is_empty() {
            let run_loc = segment_loc(&run, loc);
            segments.push(helper_call(names::LIST, run, run_loc));
        }
        segments.extend(tail);
        Ok(helper_call(names::APPEND, segments, loc))
    }
}

fn segment_loc(run: &[Expression], fallback: Span) -> Span {
    match (run.first(), run.last()) {
        (Some(first), Some(last)) => first.loc().to(last.loc()),
        _ => fallback,
    }
}
