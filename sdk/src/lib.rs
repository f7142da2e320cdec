//! kiwi-wire
//!
//! One-stop crate for working with Kiwi data and schemas.
//!
//! - `Reader` / `Writer` for the wire primitives (re-exported from the codec)
//! - `compile_schema` and the schema AST (re-exported from the compiler)
//! - Helpers to dump a schema as JSON or canonical text.

pub use kiwi_wire_codec::{CodecError, Reader, Writer};
pub use kiwi_wire_compiler::{
    compile_schema, Definition, DefinitionKind, Field, KiwiError, ParseFailure, Schema,
};

/// Serialize a parsed schema into pretty-printed JSON.
pub fn schema_to_json(schema: &Schema) -> Result<String, KiwiError> {
    Ok(serde_json::to_string_pretty(schema)?)
}

/// Parse schema text and print it back in canonical form. Comments and the
/// original layout are not kept.
pub fn format_schema(text: &str) -> Result<String, KiwiError> {
    Ok(compile_schema(text)?.to_string())
}

pub mod codec {
    pub use kiwi_wire_codec::{float, varint, CodecError, Reader, Writer};
}

pub mod error {
    pub use kiwi_wire_compiler::error::{KiwiError, ParseFailure};
}

pub mod schema {
    pub use kiwi_wire_compiler::types::{Definition, DefinitionKind, Field, Schema};
}
