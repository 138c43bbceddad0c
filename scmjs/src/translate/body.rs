//! Bodies: a prefix of definitions followed by expressions.

use crate::estree::{
    ArrowFunctionExpression, BlockStatement, CallExpression, Expression, Identifier,
    ReturnStatement, Statement,
};
use crate::parse::error::{Error, Result};
use crate::parse::group::Group;
use crate::span::Span;
use crate::token::Keyword;

use super::Translator;

impl Translator {
    /// Translates the forms of a body into a block ending in a return of the
    /// final form's value.
    ///
    /// Definitions may only appear before the first expression; the final
    /// form must be an expression. `owner` is the special form named `name`
    /// the body belongs to.
    pub(super) fn body(
        &self,
        name: &'static str,
        owner: &Group,
        forms: &[Group],
    ) -> Result<BlockStatement> {
        let (last, init) = match forms.split_last() {
            Some(split) => split,
            None => return Err(Error::syntax(name, owner)),
        };
        let mut seen_expression = false;
        for form in forms {
            if form.head_keyword() != Some(Keyword::Define) {
                seen_expression = true;
            } else if seen_expression {
                return Err(Error::syntax("define", form));
            }
        }
        let mut body = init
            .iter()
            .map(|form| self.statement(form, false))
            .collect::<Result<Vec<_>>>()?;
        let argument = self.expression(last)?;
        body.push(Statement::Return(ReturnStatement {
            loc: argument.loc(),
            argument,
        }));
        Ok(BlockStatement {
            body,
            loc: owner.span(),
        })
    }

    /// Translates a body in expression position.
    ///
    /// A body consisting of a single expression is that expression; anything
    /// longer becomes an immediately-invoked function without parameters.
    pub(super) fn body_expression(
        &self,
        name: &'static str,
        owner: &Group,
        forms: &[Group],
    ) -> Result<Expression> {
        if let [single] = forms {
            if single.head_keyword() != Some(Keyword::Define) {
                return self.expression(single);
            }
        }
        let body = self.body(name, owner, forms)?;
        Ok(immediately_invoked(Vec::new(), body, Vec::new(), owner.span()))
    }
}

/// `((params) => { body })(arguments)`
pub(super) fn immediately_invoked(
    params: Vec<Identifier>,
    body: BlockStatement,
    arguments: Vec<Expression>,
    loc: Span,
) -> Expression {
    let function = ArrowFunctionExpression { params, body, loc };
    Expression::Call(CallExpression {
        callee: Box::new(Expression::ArrowFunction(function)),
        arguments,
        loc,
    })
}
