//! kiwi-wire-compiler
//!
//! Front end for `.kiwi` schema files:
//!  1) A tokenizer producing position-tagged tokens,
//!  2) A recursive-descent parser building a [`Schema`],
//!  3) The AST types, with a canonical text printer (`Display`),
//!  4) Error types (`KiwiError`, `ParseFailure`).
//!
//! ```
//! use kiwi_wire_compiler::*;
//!
//! let schema = compile_schema("message M { int id = 1; string name = 2 [deprecated]; }").unwrap();
//! let name = schema.definitions()[0].field("name").unwrap();
//! assert!(name.is_deprecated());
//! assert_eq!(name.to_string(), "string name = 2 [deprecated];");
//! ```

pub mod error;
pub mod types;
pub mod utils;
pub mod tokenizer;
pub mod parser;
pub mod compiler;

pub use compiler::compile_schema;
pub use error::{KiwiError, ParseFailure};
pub use parser::parse_schema;
pub use tokenizer::{tokenize_schema, Keyword, Token, TokenKind};
pub use types::{Definition, DefinitionKind, Field, Schema};
