#![no_main]

use arbitrary::Arbitrary;
use jsonview::{Parser, ParserOptions, PrettyPrinter, parse, parse_with_options};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    max_depth: Option<u8>,
    multiple: bool,
    indent: u8,
    data: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let options = ParserOptions {
        max_depth: input.max_depth.map(usize::from),
        allow_multiple_json_values: input.multiple,
    };

    // Whatever the input, the parser returns instead of panicking, and
    // errors point inside the buffer.
    let doc = match parse_with_options(input.data, options) {
        Ok(doc) => doc,
        Err(err) => {
            assert!(err.offset <= input.data.len());
            return;
        }
    };
    assert_eq!(doc.consumed, input.data.len());

    // Valid UTF-8 round-trips through both renderings. Non-UTF-8 strings are
    // replaced on output and cannot compare equal.
    if std::str::from_utf8(input.data).is_ok() {
        let pretty = PrettyPrinter::with_indent(usize::from(input.indent % 8)).render(&doc.value);
        let reparsed = parse(&pretty).expect("pretty output parses");
        assert_eq!(reparsed.value, doc.value);

        let compact = doc.value.to_string();
        let reparsed = parse(&compact).expect("compact output parses");
        assert_eq!(reparsed.value, doc.value);
    }

    // A single valid document is also a one-element stream.
    let values: Vec<_> = Parser::with_options(input.data, options).collect();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].as_ref().ok(), Some(&doc.value));
});
