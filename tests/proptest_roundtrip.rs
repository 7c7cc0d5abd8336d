//! Property-based tests for line parsing.
//!
//! Uses proptest to generate random wire components and verify that:
//! 1. Parsing never panics on any input
//! 2. Serialized messages re-parse to the same value (roundtrip)
//! 3. Serialization is idempotent under reparsing

use ircv3_proto::{Message, Tags};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES - Generators for valid wire components
// =============================================================================

/// Command verb or three-digit numeric code.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z]{2,15}|[0-9]{3}").expect("valid regex")
}

/// One positional argument: no whitespace, never starts with `:`.
fn argument_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[#&a-zA-Z0-9][a-zA-Z0-9,._\\-]{0,20}").expect("valid regex")
}

/// Source identity: any run of non-space characters.
fn source_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,8}(![a-z0-9]{1,8}@[a-z0-9.]{1,15})?")
        .expect("valid regex")
}

/// Trailing comment: spaces allowed, line breaks are not.
fn comment_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 :,.!?'@#]{0,60}").expect("valid regex")
}

/// Tag label, already vendor-stripped (a leading `+` would not survive
/// a reparse by design).
fn tag_label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9\\-/.]{0,20}").expect("valid regex")
}

/// Tag value: no spaces or semicolons; `=` is fine since only the first
/// `=` splits a tag.
fn tag_value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9=._\\-]{0,20}").expect("valid regex")
}

fn tags_strategy() -> impl Strategy<Value = Option<Tags>> {
    prop::option::of(prop::collection::btree_map(
        tag_label_strategy(),
        tag_value_strategy(),
        1..5,
    ))
}

/// A message assembled from valid components.
fn message_strategy() -> impl Strategy<Value = Message> {
    (
        tags_strategy(),
        prop::option::of(source_strategy()),
        name_strategy(),
        prop::collection::vec(argument_strategy(), 0..4),
        prop::option::of(comment_strategy()),
    )
        .prop_map(|(tags, source, name, arguments, comment)| Message {
            tags,
            source,
            name,
            arguments,
            comment,
        })
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// The fundamental roundtrip property: serialize then parse is the
    /// identity on messages built from valid components.
    #[test]
    fn message_roundtrip(message in message_strategy()) {
        let serialized = message.to_string();
        let parsed = Message::parse(&serialized);
        prop_assert_eq!(&message, &parsed,
            "roundtrip failed for serialized: {}", serialized);
    }

    /// Serialization is idempotent under reparsing.
    #[test]
    fn serialization_idempotent(message in message_strategy()) {
        let once = message.to_string();
        let twice = Message::parse(&once).to_string();
        prop_assert_eq!(once, twice);
    }

    /// Parsing is total: no input line panics or fails.
    #[test]
    fn parse_never_panics(line in "\\PC{0,200}") {
        let _ = Message::parse(&line);
    }

    /// Parsing its own serialization of an arbitrary parsed line is
    /// stable from the first reserialization onward.
    #[test]
    fn reparse_stabilizes(line in "\\PC{0,200}") {
        let once = Message::parse(&line).to_string();
        let twice = Message::parse(&once).to_string();
        prop_assert_eq!(once, twice);
    }

    /// Arguments coming out of the parser never contain a space and
    /// never start with a colon.
    #[test]
    fn parsed_arguments_are_plain(line in "\\PC{0,200}") {
        let message = Message::parse(&line);
        for argument in &message.arguments {
            prop_assert!(!argument.contains(' '));
            prop_assert!(!argument.starts_with(':'));
        }
    }
}
