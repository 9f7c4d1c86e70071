//! # TreeComb - Grammar Combinator Engine
//!
//! A backtracking recursive-descent parser combinator engine. A small closed
//! set of primitives (exact literals, ordered sequences, ordered choice,
//! bounded repetition and lazy rule references) composes into grammars that
//! consume an input text and produce a labeled parse tree. The library
//! emphasizes:
//!
//! - **Zero panics while parsing**: every failure travels as a `Result`
//! - **Clean backtracking**: a failed attempt never consumes input, so an
//!   enclosing choice can retry from the exact same position
//! - **Recursive grammars**: rules may reference rules defined later,
//!   including themselves, through lazily resolved references
//! - **Zero-copy leaves**: tokens borrow their lexemes from the input
//!
//! ```
//! use treecomb::{Grammar, branch, literal, sequence};
//!
//! let grammar = Grammar::new(|| {
//!     sequence(
//!         "PAIR",
//!         vec![
//!             branch(vec![literal("\"a\""), literal("\"b\"")]),
//!             literal(":"),
//!             branch(vec![literal("1"), literal("2"), literal("3")]),
//!         ],
//!     )
//! });
//!
//! let tree = grammar.parse("\"a\":1").unwrap();
//! assert_eq!(tree.label(), "PAIR");
//! assert_eq!(tree.children().len(), 3);
//! ```

pub mod cursor;
pub mod error;
pub mod grammar;
pub mod group;
mod lazy;
pub mod parser;
pub mod token;
pub mod tree;

pub use cursor::Cursor;
pub use error::ParseError;
pub use grammar::Grammar;
pub use group::group;
pub use parser::{Bounds, Parser, branch, literal, multiplicity, rule, sequence};
pub use token::Token;
pub use tree::Tree;
