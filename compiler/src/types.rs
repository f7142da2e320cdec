use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::error::KiwiError;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

fn check_name(name: &str) -> Result<(), KiwiError> {
    if IDENTIFIER.is_match(name) {
        Ok(())
    } else {
        Err(KiwiError::InvalidName(name.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    package:     Option<String>,
    definitions: Vec<Definition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DefinitionKind {
    Enum,
    Struct,
    Message,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    name:          String,
    line:          usize,
    column:        usize,
    field_type:    Option<String>,
    is_array:      bool,
    is_deprecated: bool,
    value:         Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Definition {
    name:   String,
    line:   usize,
    column: usize,
    kind:   DefinitionKind,
    fields: Vec<Field>,
}

impl Schema {
    pub fn new(package: Option<String>, definitions: Vec<Definition>) -> Result<Schema, KiwiError> {
        if let Some(ref name) = package {
            check_name(name)?;
        }
        Ok(Schema { package, definitions })
    }

    pub fn empty() -> Schema {
        Schema { package: None, definitions: Vec::new() }
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    /// Looks a definition up by name.
    pub fn definition(&self, name: &str) -> Option<&Definition> {
        self.definitions.iter().find(|def| def.name == name)
    }

    pub(crate) fn push(&mut self, definition: Definition) {
        self.definitions.push(definition);
    }
}

impl DefinitionKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            DefinitionKind::Enum    => "enum",
            DefinitionKind::Struct  => "struct",
            DefinitionKind::Message => "message",
        }
    }

    /// Checks a field against the shape this kind of definition requires.
    fn check_field(&self, field: &Field) -> Result<(), &'static str> {
        match self {
            DefinitionKind::Enum => {
                if field.field_type.is_some() || field.is_array {
                    return Err("enum values have no type");
                }
                if field.value.is_none() {
                    return Err("enum values need a value");
                }
            }
            DefinitionKind::Struct => {
                if field.field_type.is_none() {
                    return Err("struct fields need a type");
                }
                if field.value.is_some() {
                    return Err("struct fields have no id");
                }
            }
            DefinitionKind::Message => {
                if field.field_type.is_none() {
                    return Err("message fields need a type");
                }
                if field.value.is_none() {
                    return Err("message fields need an id");
                }
            }
        }
        if field.is_deprecated && *self != DefinitionKind::Message {
            return Err("only message fields can be deprecated");
        }
        Ok(())
    }
}

impl Field {
    /// `NAME = value;` inside an enum.
    pub fn enum_value(name: impl Into<String>, value: u32) -> Result<Field, KiwiError> {
        Field::build(name.into(), None, false, Some(value), false)
    }

    /// `type[] name;` inside a struct.
    pub fn struct_field(
        name: impl Into<String>,
        field_type: impl Into<String>,
        is_array: bool,
    ) -> Result<Field, KiwiError> {
        Field::build(name.into(), Some(field_type.into()), is_array, None, false)
    }

    /// `type[] name = id [deprecated];` inside a message.
    pub fn message_field(
        name: impl Into<String>,
        field_type: impl Into<String>,
        is_array: bool,
        value: u32,
        is_deprecated: bool,
    ) -> Result<Field, KiwiError> {
        Field::build(name.into(), Some(field_type.into()), is_array, Some(value), is_deprecated)
    }

    fn build(
        name: String,
        field_type: Option<String>,
        is_array: bool,
        value: Option<u32>,
        is_deprecated: bool,
    ) -> Result<Field, KiwiError> {
        check_name(&name)?;
        if let Some(ref ty) = field_type {
            check_name(ty)?;
        }
        Ok(Field {
            name,
            line: 0,
            column: 0,
            field_type,
            is_array,
            is_deprecated,
            value,
        })
    }

    /// Attach the source position of the field name.
    pub fn at(mut self, line: usize, column: usize) -> Field {
        self.line = line;
        self.column = column;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> Option<&str> {
        self.field_type.as_deref()
    }

    pub fn is_array(&self) -> bool {
        self.is_array
    }

    pub fn is_deprecated(&self) -> bool {
        self.is_deprecated
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl Definition {
    /// Builds a definition, rejecting any field whose shape does not match
    /// `kind`.
    pub fn new(
        name: impl Into<String>,
        kind: DefinitionKind,
        fields: Vec<Field>,
    ) -> Result<Definition, KiwiError> {
        let name = name.into();
        check_name(&name)?;
        for field in &fields {
            kind.check_field(field).map_err(|reason| KiwiError::InvalidField {
                definition: name.clone(),
                kind: kind.keyword().to_owned(),
                field: field.name.clone(),
                reason,
            })?;
        }
        Ok(Definition {
            name,
            line: 0,
            column: 0,
            kind,
            fields,
        })
    }

    /// Attach the source position of the definition name.
    pub fn at(mut self, line: usize, column: usize) -> Definition {
        self.line = line;
        self.column = column;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> DefinitionKind {
        self.kind
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref ty) = self.field_type {
            f.write_str(ty)?;
            if self.is_array {
                f.write_str("[]")?;
            }
            f.write_str(" ")?;
        }
        f.write_str(&self.name)?;
        if let Some(value) = self.value {
            write!(f, " = {}", value)?;
            if self.is_deprecated {
                f.write_str(" [deprecated]")?;
            }
        }
        f.write_str(";")
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} {{", self.kind, self.name)?;
        for field in &self.fields {
            writeln!(f, "\t{}", field)?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref package) = self.package {
            write!(f, "package {};\n\n", package)?;
        }
        for definition in &self.definitions {
            write!(f, "{}\n\n", definition)?;
        }
        Ok(())
    }
}
