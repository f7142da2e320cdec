use kiwi_wire_compiler::{compile_schema, DefinitionKind, KiwiError, Schema};

const EXAMPLE: &str = r#"
package example;

// Shapes
enum Type {
  FLAT = 0;
  ROUND = 1;
  POINTED = 2;
}

struct Color {
  byte red;
  byte green;
  byte blue;
  byte alpha;
}

message Example {
  uint clientID = 1;
  Type type = 2;
  Color[] colors = 3;
  string legacyName = 4 [deprecated];
}
"#;

#[test]
fn test_parse_schema() {
    let schema = compile_schema(EXAMPLE).expect("compile_schema failed");

    assert_eq!(schema.package(), Some("example"));
    assert_eq!(schema.definitions().len(), 3);

    let type_def = &schema.definitions()[0];
    assert_eq!(type_def.kind(), DefinitionKind::Enum);
    assert_eq!(type_def.name(), "Type");
    let values: Vec<(&str, Option<u32>)> =
        type_def.fields().iter().map(|f| (f.name(), f.value())).collect();
    assert_eq!(values, [("FLAT", Some(0)), ("ROUND", Some(1)), ("POINTED", Some(2))]);

    let color_def = &schema.definitions()[1];
    assert_eq!(color_def.kind(), DefinitionKind::Struct);
    assert_eq!(color_def.name(), "Color");
    assert_eq!(color_def.fields().len(), 4);
    for (field, name) in color_def.fields().iter().zip(["red", "green", "blue", "alpha"]) {
        assert_eq!(field.name(), name);
        assert_eq!(field.field_type(), Some("byte"));
        assert!(!field.is_array());
        assert_eq!(field.value(), None);
    }

    let message_def = &schema.definitions()[2];
    assert_eq!(message_def.kind(), DefinitionKind::Message);
    assert_eq!(message_def.name(), "Example");
    assert_eq!((message_def.line(), message_def.column()), (18, 9));
    assert_eq!(message_def.fields().len(), 4);

    let client_id = &message_def.fields()[0];
    assert_eq!(client_id.name(), "clientID");
    assert_eq!(client_id.field_type(), Some("uint"));
    assert_eq!(client_id.value(), Some(1));
    assert_eq!((client_id.line(), client_id.column()), (19, 8));

    let colors = message_def.field("colors").unwrap();
    assert_eq!(colors.field_type(), Some("Color"));
    assert!(colors.is_array());
    assert_eq!(colors.value(), Some(3));

    let legacy = message_def.field("legacyName").unwrap();
    assert!(legacy.is_deprecated());
    assert_eq!(legacy.value(), Some(4));
}

#[test]
fn test_printed_schema_reparses() {
    let schema = compile_schema(EXAMPLE).unwrap();
    let printed = schema.to_string();

    assert!(printed.starts_with("package example;\n\nenum Type {\n\tFLAT = 0;\n"));
    assert!(printed.contains("\tColor[] colors = 3;\n"));
    assert!(printed.contains("\tstring legacyName = 4 [deprecated];\n"));
    assert!(!printed.contains("Shapes"));

    let reparsed: Schema = compile_schema(&printed).unwrap();
    assert_eq!(reparsed.to_string(), printed);
    assert_eq!(reparsed.package(), schema.package());
    for (a, b) in reparsed.definitions().iter().zip(schema.definitions()) {
        assert_eq!(a.name(), b.name());
        assert_eq!(a.kind(), b.kind());
        assert_eq!(a.fields().len(), b.fields().len());
    }
}

#[test]
fn test_semantics_are_not_checked() {
    // Unknown types and repeated ids are left to later stages
    let schema = compile_schema("message M { Missing a = 1; Missing b = 1; }").unwrap();
    assert_eq!(schema.definitions()[0].fields().len(), 2);

    let schema = compile_schema("struct A {} struct A {}").unwrap();
    assert_eq!(schema.definitions().len(), 2);
}

#[test]
fn test_error_messages_embed_position() {
    let err: KiwiError = compile_schema("message M {\n  int id = 1\n}").unwrap_err().into();
    assert_eq!(err.to_string(), "Expected \";\" but found \"}\" at line 3, column 1");

    let err: KiwiError = compile_schema("struct S { int x [deprecated]; }").unwrap_err().into();
    assert_eq!(
        err.to_string(),
        "Cannot deprecate field \"x\" at line 1, column 16"
    );

    let err: KiwiError = compile_schema("enum E { A = 1; } #").unwrap_err().into();
    assert_eq!(err.to_string(), "Unexpected character \"#\" at line 1, column 19");
}
