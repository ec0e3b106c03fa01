#![allow(missing_docs)]
#![allow(dead_code)]

/// A document exercising every value kind, nesting, and a duplicate key.
pub const DOCUMENT: &str = r#"
{
    "request": {
        "filename": "example.rs",
        "options": { "opt_level": 2, "features": ["serde", "tokio"] }
    },
    "scores": [1.5, -3, 2.5e-3, 1e3],
    "flags": { "enabled": true, "legacy": false, "owner": null },
    "empty": { "list": [], "map": {} },
    "path": "C:\temp",
    "tag": "first",
    "tag": "second"
}
"#;

/// Newline-delimited values for multi-value parsing.
pub const LINES: &str = "{\"id\":1}\n{\"id\":2,\"ok\":true}\n[]\n\"done\"\n";
