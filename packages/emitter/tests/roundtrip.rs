use constel_emitter::emit_yaml;
use constel_parser::parse;

/// Emitted YAML, read back with a generic YAML reader, matches the parsed
/// values field for field: integers and text value-equal, array order exact.
#[test]
fn test_yaml_roundtrip_preserves_values() {
    let source = r#"
        PORT := 8080;
        HOST := 'db.internal';
        LADDER := <<100, 250, <<500, 1000>>, 'cap'>>;
    "#;

    let document = parse(source).expect("failed to parse");
    let yaml = emit_yaml(&document).expect("failed to emit");
    let read_back: serde_yaml::Value = serde_yaml::from_str(&yaml).expect("emitted YAML unreadable");

    assert_eq!(read_back["PORT"], serde_yaml::Value::from(8080));
    assert_eq!(read_back["HOST"], serde_yaml::Value::from("db.internal"));

    let ladder = read_back["LADDER"].as_sequence().expect("LADDER is a sequence");
    assert_eq!(ladder[0], serde_yaml::Value::from(100));
    assert_eq!(ladder[1], serde_yaml::Value::from(250));
    assert_eq!(
        ladder[2].as_sequence().expect("nested sequence")[1],
        serde_yaml::Value::from(1000)
    );
    assert_eq!(ladder[3], serde_yaml::Value::from("cap"));
}

/// References are substituted before emission, so the emitted document
/// holds plain values and reads back without any Constel-specific syntax.
#[test]
fn test_references_are_flattened_in_output() {
    let source = "BASE := <<1, 2>>; COPY := $(BASE);";

    let document = parse(source).expect("failed to parse");
    let yaml = emit_yaml(&document).expect("failed to emit");

    assert!(!yaml.contains("$("));
    let read_back: serde_yaml::Value = serde_yaml::from_str(&yaml).expect("emitted YAML unreadable");
    assert_eq!(read_back["COPY"], read_back["BASE"]);
}
