//! The target tree: ESTree-shaped statements and expressions.
//!
//! Only the node kinds the translator emits are modelled. Every node carries
//! its source range in a `loc` field; the tree is built bottom-up, so a
//! node's range is known by the time it is constructed.
//!
//! The `serde-scmjs` crate serializes this tree into the JSON interchange
//! format consumed by ESTree tooling.

use crate::number::Number;
use crate::span::Span;

/// A complete program: the translated top-level forms in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level statements.
    pub body: Vec<Statement>,
    /// Source range of the whole input.
    pub loc: Span,
}

/// Statement nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression evaluated for its effect, `ExpressionStatement`.
    Expression(ExpressionStatement),
    /// A `VariableDeclaration`, produced by `define`.
    Declaration(VariableDeclaration),
    /// A `ReturnStatement`, ending function bodies.
    Return(ReturnStatement),
    /// An `ImportDeclaration`.
    Import(ImportDeclaration),
    /// An `ExportNamedDeclaration`.
    Export(ExportNamedDeclaration),
}

impl Statement {
    /// Source range of the statement.
    pub fn loc(&self) -> Span {
        match self {
            Statement::Expression(stmt) => stmt.loc,
            Statement::Declaration(decl) => decl.loc,
            Statement::Return(stmt) => stmt.loc,
            Statement::Import(decl) => decl.loc,
            Statement::Export(decl) => decl.loc,
        }
    }
}

/// `ExpressionStatement`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// The evaluated expression.
    pub expression: Expression,
    /// Source range.
    pub loc: Span,
}

/// The `kind` of a `VariableDeclaration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// `const`
    Const,
    /// `let`
    Let,
}

impl DeclarationKind {
    /// The keyword as written in the target language.
    pub fn as_str(self) -> &'static str {
        match self {
            DeclarationKind::Const => "const",
            DeclarationKind::Let => "let",
        }
    }
}

/// `VariableDeclaration`.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    /// Binding kind.
    pub kind: DeclarationKind,
    /// The declarators; `define` always produces exactly one.
    pub declarations: Vec<VariableDeclarator>,
    /// Source range.
    pub loc: Span,
}

/// `VariableDeclarator`.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    /// The bound name.
    pub id: Identifier,
    /// The initial value.
    pub init: Expression,
    /// Source range.
    pub loc: Span,
}

/// `ReturnStatement`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// The returned value.
    pub argument: Expression,
    /// Source range.
    pub loc: Span,
}

/// `BlockStatement`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The statements of the block.
    pub body: Vec<Statement>,
    /// Source range.
    pub loc: Span,
}

/// `ImportDeclaration`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDeclaration {
    /// One specifier per imported name.
    pub specifiers: Vec<ImportSpecifier>,
    /// The module path, a string literal.
    pub source: Literal,
    /// Source range.
    pub loc: Span,
}

/// `ImportSpecifier`; the imported and local names are always the same.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpecifier {
    /// The name exported by the module.
    pub imported: Identifier,
    /// The name bound locally.
    pub local: Identifier,
    /// Source range.
    pub loc: Span,
}

/// `ExportNamedDeclaration`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportNamedDeclaration {
    /// The exported definition.
    pub declaration: VariableDeclaration,
    /// Source range.
    pub loc: Span,
}

/// Expression nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// `Identifier`
    Identifier(Identifier),
    /// `Literal`
    Literal(Literal),
    /// `CallExpression`
    Call(CallExpression),
    /// `ConditionalExpression`
    Conditional(ConditionalExpression),
    /// `ArrowFunctionExpression`
    ArrowFunction(ArrowFunctionExpression),
    /// `AssignmentExpression`
    Assignment(AssignmentExpression),
}

impl Expression {
    /// Source range of the expression.
    pub fn loc(&self) -> Span {
        match self {
            Expression::Identifier(node) => node.loc,
            Expression::Literal(node) => node.loc,
            Expression::Call(node) => node.loc,
            Expression::Conditional(node) => node.loc,
            Expression::ArrowFunction(node) => node.loc,
            Expression::Assignment(node) => node.loc,
        }
    }

    /// The same expression with its source range replaced.
    pub(crate) fn with_loc(mut self, loc: Span) -> Expression {
        match &mut self {
            Expression::Identifier(node) => node.loc = loc,
            Expression::Literal(node) => node.loc = loc,
            Expression::Call(node) => node.loc = loc,
            Expression::Conditional(node) => node.loc = loc,
            Expression::ArrowFunction(node) => node.loc = loc,
            Expression::Assignment(node) => node.loc = loc,
        }
        self
    }
}

/// `Identifier`.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The name, exactly as written in the source; mangling into valid
    /// target identifiers is left to the code generator.
    pub name: String,
    /// Source range.
    pub loc: Span,
}

impl Identifier {
    /// Create an identifier.
    pub fn new(name: impl Into<String>, loc: Span) -> Self {
        Identifier {
            name: name.into(),
            loc,
        }
    }
}

/// `Literal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    /// The literal's value.
    pub value: LiteralValue,
    /// The literal as written in the source.
    pub raw: String,
    /// Source range.
    pub loc: Span,
}

/// Values a [`Literal`] can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// `#t` or `#f`.
    Boolean(bool),
    /// A string; also used for symbol names in quoted data.
    String(String),
    /// A number of any rank.
    Number(Number),
}

/// `CallExpression`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    /// The called function.
    pub callee: Box<Expression>,
    /// The arguments, in order.
    pub arguments: Vec<Expression>,
    /// Source range.
    pub loc: Span,
}

/// `ConditionalExpression`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    /// The condition.
    pub test: Box<Expression>,
    /// Value when the condition holds.
    pub consequent: Box<Expression>,
    /// Value otherwise.
    pub alternate: Box<Expression>,
    /// Source range.
    pub loc: Span,
}

/// `ArrowFunctionExpression`, always with a block body.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowFunctionExpression {
    /// Parameter names.
    pub params: Vec<Identifier>,
    /// The function body, ending in a `ReturnStatement`.
    pub body: BlockStatement,
    /// Source range.
    pub loc: Span,
}

/// `AssignmentExpression` with the `=` operator; evaluates to the assigned
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    /// The assigned variable.
    pub left: Identifier,
    /// The new value.
    pub right: Box<Expression>,
    /// Source range.
    pub loc: Span,
}
