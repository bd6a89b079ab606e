#![cfg(feature = "serde")]

use kiirus_template::{compile, config::Options};
use serde_json::json;

#[test]
fn tree_serializes_as_plain_data() {
    let root = compile(r#"<p class="x" Tab={tab} title={"t"}>{$name}Hi</p>"#);
    let value = serde_json::to_value(&root).unwrap();
    similar_asserts::assert_eq!(
        value,
        json!({
            "type": "Root",
            "props": [],
            "dynamicProps": [],
            "children": [{
                "type": "Tab",
                "props": [{ "Tab": "instance.tab" }],
                "dynamicProps": [true],
                "children": [{
                    "type": "p",
                    "props": [
                        { "class": "x" },
                        { "title": "\"t\"" },
                    ],
                    "dynamicProps": [false, false],
                    "children": [
                        { "expression": "locals.name", "dynamic": true },
                        "Hi",
                    ],
                }],
            }],
        })
    );
}

#[test]
fn attribute_named_dynamic_keeps_its_value() {
    let root = compile("<p dynamic={a} flag></p>");
    let json = serde_json::to_string(&root).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    similar_asserts::assert_eq!(
        value["children"][0],
        json!({
            "type": "p",
            "props": [{ "dynamic": "instance.a" }, { "flag": "" }],
            "dynamicProps": [true, false],
            "children": [],
        })
    );
}

#[test]
fn options_from_toml_use_defaults_for_missing_keys() {
    let options: Options = toml::from_str(
        r#"
[compile]
development = true

[print]
indentWidth = 4
"#,
    )
    .unwrap();
    assert!(options.compile.development);
    assert!(options.compile.strip_block_comments);
    assert_eq!(options.print.indent_width, 4);
    assert!(!options.print.use_tabs);
}
