#![expect(missing_docs)]

mod common;

use core::fmt::Write;

use jsonview::{Parser, ParserOptions, PrettyPrinter, parse};

use crate::common::{DOCUMENT, LINES};

#[test]
fn snapshot_pretty_document() {
    let doc = parse(DOCUMENT).expect("document parses");
    assert_eq!(doc.consumed, DOCUMENT.len());

    insta::assert_snapshot!(doc.value.to_pretty_string(), @r#"
    {
      "request": {
        "filename": "example.rs",
        "options": {
          "opt_level": 2,
          "features": [
            "serde",
            "tokio"
          ]
        }
      },
      "scores": [
        1.5,
        -3,
        0.0025,
        1000
      ],
      "flags": {
        "enabled": true,
        "legacy": false,
        "owner": null
      },
      "empty": {
        "list": [],
        "map": {}
      },
      "path": "C:\temp",
      "tag": "first",
      "tag": "second"
    }
    "#);
}

#[test]
fn snapshot_compact_document() {
    let doc = parse(DOCUMENT).expect("document parses");
    insta::assert_snapshot!(doc.value, @r#"{"request":{"filename":"example.rs","options":{"opt_level":2,"features":["serde","tokio"]}},"scores":[1.5,-3,0.0025,1000],"flags":{"enabled":true,"legacy":false,"owner":null},"empty":{"list":[],"map":{}},"path":"C:\temp","tag":"first","tag":"second"}"#);
}

#[test]
fn snapshot_pretty_custom_indent() {
    let doc = parse(r#"[{"a":[1,{}]}]"#).expect("document parses");
    insta::assert_snapshot!(PrettyPrinter::with_indent(4).render(&doc.value), @r#"
    [
        {
            "a": [
                1,
                {}
            ]
        }
    ]
    "#);
}

#[test]
fn snapshot_debug_tree() {
    let doc = parse(r#"{"k":[1,true,"v"]}"#).expect("document parses");
    insta::assert_snapshot!(format!("{:?}", doc.value), @r#"Object([Member { key: "k", value: Array([Number(1.0), Bool(true), String("v")]) }])"#);
}

#[test]
fn snapshot_multiple_values() {
    let options = ParserOptions {
        allow_multiple_json_values: true,
        ..Default::default()
    };
    let mut out = String::new();
    for (index, value) in Parser::with_options(LINES.as_bytes(), options).enumerate() {
        let value = value.expect("values error");
        writeln!(out, "{index}: {value}").unwrap();
    }
    insta::assert_snapshot!(out, @r#"
    0: {"id":1}
    1: {"id":2,"ok":true}
    2: []
    3: "done"
    "#);
}

#[test]
fn snapshot_error_messages() {
    let render = |input: &str| parse(input).unwrap_err().to_string();
    insta::assert_snapshot!(render(""), @"unexpected end of input at 1:1");
    insta::assert_snapshot!(render("[1,\n  2,\n  ]"), @"unexpected character ']' at 3:3");
    insta::assert_snapshot!(render("nulx"), @"invalid literal at 1:4");
    insta::assert_snapshot!(render("[1.]"), @"invalid number at 1:4");
    insta::assert_snapshot!(render("{\"a\":1,}"), @"unexpected character '}' at 1:8");
    insta::assert_snapshot!(render("truefalse"), @"unexpected character 'f' at 1:5");
    insta::assert_snapshot!(render("\t\u{7}"), @"unexpected character 0x07 at 1:2");
}
