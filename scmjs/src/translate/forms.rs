//! Handlers for the evaluated special forms.

use crate::estree::{
    ArrowFunctionExpression, AssignmentExpression, BlockStatement, ConditionalExpression,
    DeclarationKind, ExportNamedDeclaration, Expression, Identifier, ImportDeclaration,
    ImportSpecifier, ReturnStatement, Statement, VariableDeclaration, VariableDeclarator,
};
use crate::parse::error::{Error, Result};
use crate::parse::group::Group;
use crate::span::Span;
use crate::token::{Keyword, TokenKind};

use super::body::immediately_invoked;
use super::{identifier, literal, truthy, undefined, Translator};

/// The elements of `group`, which is known to be a list headed by a keyword.
fn elements(group: &Group) -> &[Group] {
    match group.as_list() {
        Some(list) => list.elements(),
        None => &[],
    }
}

/// The names in a parameter or import list, which must all be identifiers.
fn identifiers(form: &'static str, groups: &[Group]) -> Result<Vec<Identifier>> {
    groups
        .iter()
        .map(|group| {
            group
                .as_identifier()
                .map(identifier)
                .ok_or_else(|| Error::syntax(form, group))
        })
        .collect()
}

impl Translator {
    /// `(define name value)` or `(define (name params...) body...)`.
    pub(super) fn define(&self, group: &Group) -> Result<VariableDeclaration> {
        let loc = group.span();
        let (id, init) = match elements(group) {
            [_, Group::Token(name), value] if name.kind() == TokenKind::Identifier => {
                (identifier(name), self.expression(value)?)
            }
            [_, Group::List(signature), body @ ..] if !body.is_empty() => {
                let (name, params) = match signature.elements() {
                    [Group::Token(name), params @ ..] if name.kind() == TokenKind::Identifier => {
                        (name, params)
                    }
                    _ => return Err(Error::syntax("define", group)),
                };
                let function = ArrowFunctionExpression {
                    params: identifiers("define", params)?,
                    body: self.body("define", group, body)?,
                    loc,
                };
                (identifier(name), Expression::ArrowFunction(function))
            }
            _ => return Err(Error::syntax("define", group)),
        };
        Ok(VariableDeclaration {
            kind: DeclarationKind::Const,
            declarations: vec![VariableDeclarator { id, init, loc }],
            loc,
        })
    }

    /// `(if test consequent [alternate])`
    pub(super) fn if_(&self, group: &Group) -> Result<Expression> {
        let (test, consequent, alternate) = match elements(group) {
            [_, test, consequent] => (test, consequent, None),
            [_, test, consequent, alternate] => (test, consequent, Some(alternate)),
            _ => return Err(Error::syntax("if", group)),
        };
        let test = truthy(self.expression(test)?);
        let consequent = self.expression(consequent)?;
        let alternate = match alternate {
            Some(alternate) => self.expression(alternate)?,
            None => undefined(group.span()),
        };
        Ok(Expression::Conditional(ConditionalExpression {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
            loc: group.span(),
        }))
    }

    /// `(cond (test body...)... [(else body...)])`
    pub(super) fn cond(&self, group: &Group) -> Result<Expression> {
        let clauses = match elements(group) {
            [_, clauses @ ..] if !clauses.is_empty() => clauses,
            _ => return Err(Error::syntax("cond", group)),
        };
        let mut fallback = None;
        let mut tests = Vec::with_capacity(clauses.len());
        for (i, clause) in clauses.iter().enumerate() {
            let (test, body) = match clause.as_list().map(|list| list.elements()) {
                Some([test, body @ ..]) if !body.is_empty() => (test, body),
                _ => return Err(Error::syntax("cond", clause)),
            };
            let is_else = test.as_token().and_then(|token| token.keyword()) == Some(Keyword::Else);
            if is_else {
                if i + 1 != clauses.len() {
                    return Err(Error::syntax("cond", clause));
                }
                fallback = Some(self.body_expression("cond", clause, body)?);
            } else {
                let test = truthy(self.expression(test)?);
                let consequent = self.body_expression("cond", clause, body)?;
                tests.push((clause, test, consequent));
            }
        }
        let end = group.span();
        let mut result = fallback.unwrap_or_else(|| undefined(end));
        for (clause, test, consequent) in tests.into_iter().rev() {
            result = Expression::Conditional(ConditionalExpression {
                test: Box::new(test),
                consequent: Box::new(consequent),
                alternate: Box::new(result),
                loc: Span::new(clause.start(), end.end()),
            });
        }
        Ok(result.with_loc(group.span()))
    }

    /// `(lambda (params...) body...)`
    pub(super) fn lambda(&self, group: &Group) -> Result<Expression> {
        let (params, body) = match elements(group) {
            [_, Group::List(params), body @ ..] if !body.is_empty() => (params, body),
            _ => return Err(Error::syntax("lambda", group)),
        };
        Ok(Expression::ArrowFunction(ArrowFunctionExpression {
            params: identifiers("lambda", params.elements())?,
            body: self.body("lambda", group, body)?,
            loc: group.span(),
        }))
    }

    /// `(let ((name value)...) body...)`, as an immediately-invoked function.
    pub(super) fn let_(&self, group: &Group) -> Result<Expression> {
        let (bindings, body) = match elements(group) {
            [_, Group::List(bindings), body @ ..] if !body.is_empty() => (bindings, body),
            _ => return Err(Error::syntax("let", group)),
        };
        let mut params = Vec::with_capacity(bindings.len());
        let mut arguments = Vec::with_capacity(bindings.len());
        for binding in bindings.elements() {
            match binding.as_list().map(|list| list.elements()) {
                Some([Group::Token(name), value]) if name.kind() == TokenKind::Identifier => {
                    params.push(identifier(name));
                    arguments.push(self.expression(value)?);
                }
                _ => return Err(Error::syntax("let", binding)),
            }
        }
        let body = self.body("let", group, body)?;
        Ok(immediately_invoked(params, body, arguments, group.span()))
    }

    /// `(begin body...)`
    pub(super) fn begin(&self, group: &Group) -> Result<Expression> {
        let body = elements(group).get(1..).unwrap_or_default();
        Ok(self
            .body_expression("begin", group, body)?
            .with_loc(group.span()))
    }

    /// `(delay expression)`, a thunk returning the expression's value.
    pub(super) fn delay(&self, group: &Group) -> Result<Expression> {
        let expression = match elements(group) {
            [_, expression] => self.expression(expression)?,
            _ => return Err(Error::syntax("delay", group)),
        };
        Ok(Expression::ArrowFunction(ArrowFunctionExpression {
            params: Vec::new(),
            body: BlockStatement {
                body: vec![Statement::Return(ReturnStatement {
                    loc: expression.loc(),
                    argument: expression,
                })],
                loc: group.span(),
            },
            loc: group.span(),
        }))
    }

    /// `(set! name value)`; evaluates to the assigned value.
    pub(super) fn set(&self, group: &Group) -> Result<Expression> {
        match elements(group) {
            [_, Group::Token(name), value] if name.kind() == TokenKind::Identifier => {
                Ok(Expression::Assignment(AssignmentExpression {
                    left: identifier(name),
                    right: Box::new(self.expression(value)?),
                    loc: group.span(),
                }))
            }
            _ => Err(Error::syntax("set!", group)),
        }
    }

    /// `(import "module" (name...))`
    pub(super) fn import(&self, group: &Group) -> Result<ImportDeclaration> {
        let (source, names) = match elements(group) {
            [_, Group::Token(source), Group::List(names)]
                if source.kind() == TokenKind::String =>
            {
                (source, names)
            }
            _ => return Err(Error::syntax("import", group)),
        };
        let specifiers = identifiers("import", names.elements())?
            .into_iter()
            .map(|name| ImportSpecifier {
                loc: name.loc,
                imported: name.clone(),
                local: name,
            })
            .collect();
        Ok(ImportDeclaration {
            specifiers,
            source: literal(source),
            loc: group.span(),
        })
    }

    /// `(export (define ...))`
    pub(super) fn export(&self, group: &Group) -> Result<ExportNamedDeclaration> {
        match elements(group) {
            [_, definition] if definition.head_keyword() == Some(Keyword::Define) => {
                Ok(ExportNamedDeclaration {
                    declaration: self.define(definition)?,
                    loc: group.span(),
                })
            }
            _ => Err(Error::syntax("export", group)),
        }
    }
}
