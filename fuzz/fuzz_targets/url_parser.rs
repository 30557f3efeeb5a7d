//! Fuzz target for URL dispatch and the built-in vendor parsers.
//!
//! Feeds arbitrary strings, and strings forced onto each built-in prefix, to
//! the dispatcher. `parse` must never panic, whatever the input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_url_parser
//! ```

#![no_main]

use arbitrary::Arbitrary;
use jdbcinfo_parser::UrlParser;
use libfuzzer_sys::fuzz_target;
use std::sync::LazyLock;

static PARSER: LazyLock<UrlParser> = LazyLock::new(UrlParser::new);

const PREFIXES: [&str; 5] = [
    "jdbc:mysql://",
    "jdbc:oracle:thin:@",
    "jdbc:h2:",
    "jdbc:postgresql:",
    "",
];

/// A URL tail attached to one of the built-in prefixes.
#[derive(Debug, Arbitrary)]
struct FuzzUrl {
    prefix: u8,
    tail: String,
}

fuzz_target!(|input: FuzzUrl| {
    let prefix = PREFIXES[input.prefix as usize % PREFIXES.len()];
    let url = format!("{prefix}{}", input.tail);

    let info = PARSER.parse(&url);
    let _ = info.peer_service();

    // The strict path must agree with the total one.
    match PARSER.try_parse(&url) {
        Ok(strict) => assert_eq!(strict, info),
        Err(_) => assert!(info.is_unknown()),
    }
});
