//! Snapshot tests for generated JavaScript classes.
//!
//! These tests verify that the generated class text matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use kiln_bean::{Bean, BeanFormat, ClassSchema};
use kiln_codegen::{
    Assembler, Craft, CraftOptions, Generator, Indent,
    craft::{CraftContext, Rule, rules::MultilineRule},
};

fn schema_from_json(name: &str, json: &str) -> ClassSchema {
    Bean::from_str(name, json, BeanFormat::Json)
        .expect("Failed to parse bean")
        .into_schema()
        .expect("Failed to build schema")
}

fn person() -> ClassSchema {
    schema_from_json(
        "person",
        r#"{ "person.name": "string", "person.age": "uint8" }"#,
    )
}

#[test]
fn test_person_class() {
    let text = Generator::new(&person()).preview().unwrap();
    insta::assert_snapshot!("person_class", text);
}

#[test]
fn test_employee_setter_checks_immutability_first() {
    let schema = schema_from_json(
        "employee",
        r#"{ "$first.name": "string", "last.name": "string" }"#,
    );
    let text = Generator::new(&schema).preview().unwrap();

    assert!(text.contains(
        "  setFirstName (value) {
    if (this.__firstname !== null) {
      throw new Error('Cannot set immutable property \"first.name\"');
    }
    let test = v => v !== undefined && v !== null && v.toString() === v;
    if (!test(value)) {"
    ));
    assert!(text.contains(
        "  setLastName (value) {
    let test = v => v !== undefined && v !== null && v.toString() === v;"
    ));
}

#[test]
fn test_multiline_is_idempotent_on_assembled_text() {
    let schema = person();
    let compact = Assembler::new().bind(&schema).assemble().unwrap().render();
    let lines: Vec<String> = compact.lines().map(str::to_string).collect();

    let mut ctx = CraftContext::default();
    let once = MultilineRule.apply(lines, &mut ctx).unwrap();
    let twice = MultilineRule.apply(once.clone(), &mut ctx).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_assembled_text_is_balanced() {
    let schema = schema_from_json(
        "software-developer",
        r#"{
            "$first.name": "string",
            "languages": "set",
            "salary": { "typeCheck": "uint32", "defaultValue": 5000 }
        }"#,
    );
    let compact = Assembler::new().bind(&schema).assemble().unwrap().render();

    let output = Craft::new(CraftOptions::default().strict(true))
        .run(&compact)
        .unwrap();
    assert_eq!(output.residual, 0);
}

#[test]
fn test_indent_option() {
    let schema = person();
    let text = Generator::new(&schema)
        .options(CraftOptions::default().indent(Indent::Spaces(4)))
        .preview()
        .unwrap();

    assert!(text.contains("\n    constructor () {\n        this.__personname = null;\n"));
}

#[test]
fn test_default_values_are_not_wired_in() {
    let schema = schema_from_json(
        "account",
        r#"{ "balance": { "typeCheck": "int32", "defaultValue": 100 } }"#,
    );
    let text = Generator::new(&schema).preview().unwrap();

    assert!(text.contains("this.__balance = null;"));
    assert!(!text.contains("100"));
}
