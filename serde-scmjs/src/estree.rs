//! `Serialize` implementations producing ESTree JSON.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use scmjs::estree::*;
use scmjs::{Number, Position, Span};

/// Serializes the borrowed syntax tree node in ESTree form.
///
/// The tree types in `scmjs` carry no serialization logic themselves; this
/// wrapper supplies it for every node type, and for vectors of nodes.
///
/// ```
/// use serde_scmjs::Estree;
///
/// let program = scmjs::parse("(f 1)").unwrap();
/// let json = serde_json::to_value(Estree(&program.body[0])).unwrap();
/// assert_eq!(json["expression"]["type"], "CallExpression");
/// ```
pub struct Estree<'a, T>(pub &'a T);

macro_rules! impl_serialize_seq {
    ($($node:ty),*) => {
        $(
            impl Serialize for Estree<'_, Vec<$node>> {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_seq(self.0.iter().map(Estree))
                }
            }
        )*
    };
}

impl_serialize_seq!(Statement, Expression, Identifier, ImportSpecifier, VariableDeclarator);

impl Serialize for Estree<'_, Position> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Position", 2)?;
        state.serialize_field("line", &self.0.line())?;
        state.serialize_field("column", &self.0.column())?;
        state.end()
    }
}

impl Serialize for Estree<'_, Span> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SourceLocation", 2)?;
        state.serialize_field("start", &Estree(&self.0.start()))?;
        state.serialize_field("end", &Estree(&self.0.end()))?;
        state.end()
    }
}

impl Serialize for Estree<'_, Program> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.0;
        let mut state = serializer.serialize_struct("Program", 4)?;
        state.serialize_field("type", "Program")?;
        state.serialize_field("sourceType", "module")?;
        state.serialize_field("body", &Estree(&node.body))?;
        state.serialize_field("loc", &Estree(&node.loc))?;
        state.end()
    }
}

impl Serialize for Estree<'_, Statement> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Statement::Expression(node) => {
                let mut state = serializer.serialize_struct("ExpressionStatement", 3)?;
                state.serialize_field("type", "ExpressionStatement")?;
                state.serialize_field("expression", &Estree(&node.expression))?;
                state.serialize_field("loc", &Estree(&node.loc))?;
                state.end()
            }
            Statement::Declaration(node) => Estree(node).serialize(serializer),
            Statement::Return(node) => {
                let mut state = serializer.serialize_struct("ReturnStatement", 3)?;
                state.serialize_field("type", "ReturnStatement")?;
                state.serialize_field("argument", &Estree(&node.argument))?;
                state.serialize_field("loc", &Estree(&node.loc))?;
                state.end()
            }
            Statement::Import(node) => {
                let mut state = serializer.serialize_struct("ImportDeclaration", 4)?;
                state.serialize_field("type", "ImportDeclaration")?;
                state.serialize_field("specifiers", &Estree(&node.specifiers))?;
                state.serialize_field("source", &Estree(&node.source))?;
                state.serialize_field("loc", &Estree(&node.loc))?;
                state.end()
            }
            Statement::Export(node) => {
                let mut state = serializer.serialize_struct("ExportNamedDeclaration", 5)?;
                state.serialize_field("type", "ExportNamedDeclaration")?;
                state.serialize_field("declaration", &Estree(&node.declaration))?;
                state.serialize_field("specifiers", &[(); 0])?;
                state.serialize_field("source", &())?;
                state.serialize_field("loc", &Estree(&node.loc))?;
                state.end()
            }
        }
    }
}

impl Serialize for Estree<'_, VariableDeclaration> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.0;
        let mut state = serializer.serialize_struct("VariableDeclaration", 4)?;
        state.serialize_field("type", "VariableDeclaration")?;
        state.serialize_field("kind", node.kind.as_str())?;
        state.serialize_field("declarations", &Estree(&node.declarations))?;
        state.serialize_field("loc", &Estree(&node.loc))?;
        state.end()
    }
}

impl Serialize for Estree<'_, VariableDeclarator> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.0;
        let mut state = serializer.serialize_struct("VariableDeclarator", 4)?;
        state.serialize_field("type", "VariableDeclarator")?;
        state.serialize_field("id", &Estree(&node.id))?;
        state.serialize_field("init", &Estree(&node.init))?;
        state.serialize_field("loc", &Estree(&node.loc))?;
        state.end()
    }
}

impl Serialize for Estree<'_, BlockStatement> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.0;
        let mut state = serializer.serialize_struct("BlockStatement", 3)?;
        state.serialize_field("type", "BlockStatement")?;
        state.serialize_field("body", &Estree(&node.body))?;
        state.serialize_field("loc", &Estree(&node.loc))?;
        state.end()
    }
}

impl Serialize for Estree<'_, ImportSpecifier> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.0;
        let mut state = serializer.serialize_struct("ImportSpecifier", 4)?;
        state.serialize_field("type", "ImportSpecifier")?;
        state.serialize_field("imported", &Estree(&node.imported))?;
        state.serialize_field("local", &Estree(&node.local))?;
        state.serialize_field("loc", &Estree(&node.loc))?;
        state.end()
    }
}

impl Serialize for Estree<'_, Expression> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Expression::Identifier(node) => Estree(node).serialize(serializer),
            Expression::Literal(node) => Estree(node).serialize(serializer),
            Expression::Call(node) => {
                let mut state = serializer.serialize_struct("CallExpression", 5)?;
                state.serialize_field("type", "CallExpression")?;
                state.serialize_field("callee", &Estree(&*node.callee))?;
                state.serialize_field("arguments", &Estree(&node.arguments))?;
                state.serialize_field("optional", &false)?;
                state.serialize_field("loc", &Estree(&node.loc))?;
                state.end()
            }
            Expression::Conditional(node) => {
                let mut state = serializer.serialize_struct("ConditionalExpression", 5)?;
                state.serialize_field("type", "ConditionalExpression")?;
                state.serialize_field("test", &Estree(&*node.test))?;
                state.serialize_field("consequent", &Estree(&*node.consequent))?;
                state.serialize_field("alternate", &Estree(&*node.alternate))?;
                state.serialize_field("loc", &Estree(&node.loc))?;
                state.end()
            }
            Expression::ArrowFunction(node) => {
                let mut state = serializer.serialize_struct("ArrowFunctionExpression", 5)?;
                state.serialize_field("type", "ArrowFunctionExpression")?;
                state.serialize_field("params", &Estree(&node.params))?;
                state.serialize_field("body", &Estree(&node.body))?;
                state.serialize_field("expression", &false)?;
                state.serialize_field("loc", &Estree(&node.loc))?;
                state.end()
            }
            Expression::Assignment(node) => {
                let mut state = serializer.serialize_struct("AssignmentExpression", 5)?;
                state.serialize_field("type", "AssignmentExpression")?;
                state.serialize_field("operator", "=")?;
                state.serialize_field("left", &Estree(&node.left))?;
                state.serialize_field("right", &Estree(&*node.right))?;
                state.serialize_field("loc", &Estree(&node.loc))?;
                state.end()
            }
        }
    }
}

impl Serialize for Estree<'_, Identifier> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.0;
        let mut state = serializer.serialize_struct("Identifier", 3)?;
        state.serialize_field("type", "Identifier")?;
        state.serialize_field("name", &node.name)?;
        state.serialize_field("loc", &Estree(&node.loc))?;
        state.end()
    }
}

fn number_type(n: &Number) -> &'static str {
    match n {
        Number::Integer(_) => "integer",
        Number::Rational(_) => "rational",
        Number::Real(_) => "real",
        Number::Complex(_) => "complex",
    }
}

impl Serialize for Estree<'_, Literal> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.0;
        let mut state = serializer.serialize_struct("Literal", 4)?;
        state.serialize_field("type", "Literal")?;
        match &node.value {
            LiteralValue::Boolean(b) => state.serialize_field("value", b)?,
            LiteralValue::String(s) => state.serialize_field("value", s)?,
            LiteralValue::Number(n) => {
                state.serialize_field("value", &n.to_string())?;
                state.serialize_field("numberType", number_type(n))?;
            }
        }
        state.serialize_field("raw", &node.raw)?;
        state.serialize_field("loc", &Estree(&node.loc))?;
        state.end()
    }
}
