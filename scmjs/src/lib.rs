#![deny(missing_docs)]

//! This crate provides a front end for a teaching dialect of Scheme: it
//! parses source text into an [ESTree]-shaped syntax tree that a JavaScript
//! code generator can consume, and it implements the Scheme numeric tower
//! used for numeric literals and arithmetic.
//!
//! ```scheme
//! (define (square x)
//!   (* x x))
//!
//! (display (square 1/2)) ; 1/4
//! ```
//!
//! # Parsing programs
//!
//! [`parse`] translates a whole program; each top-level form becomes one
//! statement of the resulting [`Program`].
//!
//! ```
//! use scmjs::estree::{Expression, Statement};
//!
//! fn example() -> Result<(), scmjs::parse::Error> {
//!     let program = scmjs::parse("(define (square x) (* x x))")?;
//!     let declaration = match &program.body[0] {
//!         Statement::Declaration(declaration) => declaration,
//!         _ => unreachable!(),
//!     };
//!     assert_eq!(declaration.declarations[0].id.name, "square");
//!     assert!(matches!(
//!         declaration.declarations[0].init,
//!         Expression::ArrowFunction(_)
//!     ));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! The language is divided into levels, called chapters, each adding special
//! forms to the previous one. [`parse_custom`] restricts parsing to a
//! chapter; using a special form from a later chapter is a syntax error.
//!
//! | Chapter | Adds                                                     |
//! |---------|----------------------------------------------------------|
//! | 1       | `define`, `if`, `cond`, `lambda`, `let`, `begin`, `import`, `export` |
//! | 2       | `quote`, `quasiquote`, `unquote`, `unquote-splicing`, vectors |
//! | 3       | `set!`, `delay`                                          |
//! | 4       | nothing further; the default                             |
//!
//! # Numbers
//!
//! Numeric literals are parsed into a [`Number`], which is an exact integer,
//! an exact rational, an inexact real or a complex number. Arithmetic
//! between numbers of different ranks promotes the lower-ranked operand.
//!
//! ```
//! use scmjs::Number;
//!
//! let half: Number = "1/2".parse().unwrap();
//! let sum = &half + &half;
//! assert!(sum.is_exact());
//! assert_eq!(sum.to_string(), "1");
//! ```
//!
//! # Serialization
//!
//! The [`serde-scmjs`] crate serializes [`Program`] into ESTree JSON.
//!
//! [ESTree]: https://github.com/estree/estree
//! [`serde-scmjs`]: https://docs.rs/serde-scmjs/

pub mod estree;
pub mod number;
pub mod parse;
pub mod span;
pub mod token;
pub mod translate;

#[doc(inline)]
pub use self::parse::{parse, parse_custom, Parser};

#[doc(inline)]
pub use estree::Program;

#[doc(inline)]
pub use number::Number;

#[doc(inline)]
pub use span::{Position, Span};
