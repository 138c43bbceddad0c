#![deny(missing_docs)]

//! This crate provides [Serde]-based serialization of the syntax trees
//! produced by [`scmjs`] into [ESTree] JSON, the interchange format read by
//! JavaScript code generators.
//!
//! ```
//! let json = serde_scmjs::from_source("(define x 1)").unwrap();
//! assert_eq!(json["type"], "Program");
//! assert_eq!(json["body"][0]["type"], "VariableDeclaration");
//! assert_eq!(json["body"][0]["kind"], "const");
//! ```
//!
//! Every node carries a `loc` object with one-based lines and zero-based
//! columns. Number literals additionally carry a `numberType` field naming
//! their rank, and their `value` is the printed number, since most numbers of
//! the tower have no faithful JSON representation.
//!
//! [Serde]: https://crates.io/crates/serde
//! [`scmjs`]: https://docs.rs/scmjs/
//! [ESTree]: https://github.com/estree/estree

use std::io;

use serde::Serialize;
use serde_json::Value;

use scmjs::parse::Options;

pub use error::{Error, Result};
pub use estree::Estree;

pub mod error;
mod estree;

/// Convert a syntax tree node into a JSON value.
pub fn to_value<'a, T>(node: &'a T) -> Result<Value>
where
    Estree<'a, T>: Serialize,
{
    Ok(serde_json::to_value(Estree(node))?)
}

/// Serialize a syntax tree node as a compact JSON string.
pub fn to_string<'a, T>(node: &'a T) -> Result<String>
where
    Estree<'a, T>: Serialize,
{
    Ok(serde_json::to_string(&Estree(node))?)
}

/// Serialize a syntax tree node as a pretty-printed JSON string.
pub fn to_string_pretty<'a, T>(node: &'a T) -> Result<String>
where
    Estree<'a, T>: Serialize,
{
    Ok(serde_json::to_string_pretty(&Estree(node))?)
}

/// Serialize a syntax tree node as JSON into an I/O stream.
pub fn to_writer<'a, W, T>(writer: W, node: &'a T) -> Result<()>
where
    W: io::Write,
    Estree<'a, T>: Serialize,
{
    Ok(serde_json::to_writer(writer, &Estree(node))?)
}

/// Parse Scheme source text and convert the program into a JSON value.
pub fn from_source(source: &str) -> Result<Value> {
    from_source_custom(source, Options::default())
}

/// Parse Scheme source text with the given options and convert the program
/// into a JSON value.
pub fn from_source_custom(source: &str, options: Options) -> Result<Value> {
    let program = scmjs::parse_custom(source, options)?;
    to_value(&program)
}
