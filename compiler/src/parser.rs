use crate::{
    error::{KiwiError, ParseFailure},
    tokenizer::{Keyword, Token, TokenKind},
    types::{Definition, DefinitionKind, Field, Schema},
};

/// Cursor over an immutable token list. Only ever moves forward.
struct Parser<'a> {
    tokens: &'a [Token],
    index:  usize,
}

impl<'a> Parser<'a> {
    /// The token under the cursor. Past the end this keeps returning the
    /// final (`Eof`) token.
    fn current(&self) -> &'a Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.index.min(last)]
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current().kind == kind {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<&'a Token, KiwiError> {
        let token = self.current();
        if self.eat(kind) {
            Ok(token)
        } else {
            Err(expected_error(token, expected))
        }
    }

    fn expect_identifier(&mut self) -> Result<&'a Token, KiwiError> {
        let token = self.current();
        if token.is_identifier() {
            self.index += 1;
            Ok(token)
        } else {
            Err(expected_error(token, "identifier"))
        }
    }

    fn expect_integer(&mut self) -> Result<u32, KiwiError> {
        let token = self.expect(TokenKind::Integer, "integer")?;
        token.text.parse::<u32>().map_err(|_| KiwiError::InvalidInteger {
            text:   token.text.clone(),
            line:   token.line,
            column: token.column,
        })
    }

    fn unexpected_token(&self) -> KiwiError {
        let token = self.current();
        KiwiError::UnexpectedToken {
            found:  token.text.clone(),
            line:   token.line,
            column: token.column,
        }
    }

    /// `package name;`. The name lands in `schema` before the `;` is
    /// checked, so a failure still reports it.
    fn parse_package(&mut self, schema: &mut Schema) -> Result<(), KiwiError> {
        if !self.eat(TokenKind::Keyword(Keyword::Package)) {
            return Ok(());
        }
        let name = self.expect_identifier()?;
        *schema = Schema::new(Some(name.text.clone()), Vec::new())?;
        self.expect(TokenKind::Semicolon, "\";\"")?;
        Ok(())
    }

    /// `(enum | struct | message) Name { field* }`
    fn parse_definition(&mut self) -> Result<Definition, KiwiError> {
        let kind = if self.eat(TokenKind::Keyword(Keyword::Enum)) {
            DefinitionKind::Enum
        } else if self.eat(TokenKind::Keyword(Keyword::Struct)) {
            DefinitionKind::Struct
        } else if self.eat(TokenKind::Keyword(Keyword::Message)) {
            DefinitionKind::Message
        } else {
            return Err(self.unexpected_token());
        };

        let name = self.expect_identifier()?;
        self.expect(TokenKind::LeftBrace, "\"{\"")?;

        let mut fields = Vec::new();
        while !self.eat(TokenKind::RightBrace) {
            fields.push(self.parse_field(kind)?);
        }

        Ok(Definition::new(name.text.as_str(), kind, fields)?.at(name.line, name.column))
    }

    fn parse_field(&mut self, kind: DefinitionKind) -> Result<Field, KiwiError> {
        let mut field_type = None;
        let mut is_array = false;

        if kind != DefinitionKind::Enum {
            field_type = Some(self.expect_identifier()?);
            is_array = self.eat(TokenKind::Array);
        }

        let name = self.expect_identifier()?;

        let value = if kind != DefinitionKind::Struct {
            self.expect(TokenKind::Equals, "\"=\"")?;
            Some(self.expect_integer()?)
        } else {
            None
        };

        // Accepted anywhere by the grammar, only meaningful on messages
        let is_deprecated = self.eat(TokenKind::Deprecated);
        if is_deprecated && kind != DefinitionKind::Message {
            return Err(KiwiError::CannotDeprecate {
                field:  name.text.clone(),
                line:   name.line,
                column: name.column,
            });
        }

        self.expect(TokenKind::Semicolon, "\";\"")?;

        let field = match (kind, field_type, value) {
            (DefinitionKind::Enum, _, Some(value)) => Field::enum_value(name.text.as_str(), value)?,
            (DefinitionKind::Struct, Some(ty), _) => {
                Field::struct_field(name.text.as_str(), ty.text.as_str(), is_array)?
            }
            (DefinitionKind::Message, Some(ty), Some(value)) => Field::message_field(
                name.text.as_str(),
                ty.text.as_str(),
                is_array,
                value,
                is_deprecated,
            )?,
            _ => return Err(self.unexpected_token()),
        };
        Ok(field.at(name.line, name.column))
    }
}

fn expected_error(token: &Token, expected: &str) -> KiwiError {
    KiwiError::Expected {
        expected: expected.to_owned(),
        found:    token.text.clone(),
        line:     token.line,
        column:   token.column,
    }
}

/// Parse a token list produced by [`tokenize_schema`](crate::tokenizer::tokenize_schema).
///
/// Stops at the first error. The failure carries the definitions that were
/// completed before it, and the package name once it has been read.
pub fn parse_schema(tokens: &[Token]) -> Result<Schema, ParseFailure> {
    let mut schema = Schema::empty();
    if tokens.is_empty() {
        return Ok(schema);
    }

    let mut parser = Parser { tokens, index: 0 };
    let fail = |partial: Schema, error: KiwiError| ParseFailure { partial, error };

    if let Err(error) = parser.parse_package(&mut schema) {
        return Err(fail(schema, error));
    }

    while parser.index < tokens.len() && !parser.eat(TokenKind::Eof) {
        match parser.parse_definition() {
            Ok(definition) => schema.push(definition),
            Err(error) => return Err(fail(schema, error)),
        }
    }

    Ok(schema)
}
