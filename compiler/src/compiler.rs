use log::{debug, trace};

use crate::{
    error::ParseFailure,
    parser::parse_schema,
    tokenizer::tokenize_schema,
    types::Schema,
};

/// Compile schema text into a [`Schema`].
///
/// A lexical error fails before any definition is built, so its partial
/// schema is empty.
pub fn compile_schema(text: &str) -> Result<Schema, ParseFailure> {
    let tokens = tokenize_schema(text).map_err(|error| ParseFailure {
        partial: Schema::empty(),
        error,
    })?;
    trace!("tokenized schema into {} tokens", tokens.len());

    let schema = parse_schema(&tokens)?;
    debug!(
        "parsed schema {:?} with {} definitions",
        schema.package().unwrap_or(""),
        schema.definitions().len()
    );
    Ok(schema)
}
