//! Error types for the typed command layer.
//!
//! Generic parsing is total and has no error type of its own: any line
//! yields some [`Message`](crate::Message). Errors only arise when
//! narrowing a generic command into a typed one, or when lazily
//! interpreting a tag value. Both are per-message and recoverable; input
//! comes off the network, so nothing here may take the process down.

use std::num::ParseIntError;

use thiserror::Error;

/// A generic command did not match a typed command's structural contract.
///
/// Casts fail closed: the first precondition that does not hold is
/// reported and no partial value is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CastError {
    /// The command name differs from the expected literal.
    #[error("expected command {expected}, got {got}")]
    Name {
        /// The name the typed command requires.
        expected: &'static str,
        /// The name actually carried by the generic command.
        got: String,
    },

    /// The argument count differs from the expected arity.
    #[error("expected {expected} arguments, got {got}")]
    Arity {
        /// The arity the typed command requires.
        expected: usize,
        /// The number of arguments actually present.
        got: usize,
    },

    /// A required trailing comment is absent.
    #[error("expected a trailing comment")]
    MissingComment,

    /// A trailing comment is present where the command forbids one.
    #[error("unexpected trailing comment")]
    UnexpectedComment,

    /// Required tags are absent.
    #[error("expected message tags")]
    MissingTags,

    /// Tags are present where the command forbids them.
    #[error("unexpected message tags")]
    UnexpectedTags,

    /// A required source is absent.
    #[error("expected a source")]
    MissingSource,

    /// A source is present where the command forbids one.
    #[error("unexpected source")]
    UnexpectedSource,
}

/// A tag value that should be numeric failed to parse.
///
/// Numeric tags are interpreted lazily, at the accessor that reads them,
/// so a malformed value surfaces here rather than at parse or cast time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("tag '{tag}' holds non-numeric value '{value}'")]
pub struct TagNumberError {
    /// The tag label that was read.
    pub tag: &'static str,
    /// The offending value, exactly as scanned.
    pub value: String,
    /// The underlying integer parse failure.
    #[source]
    pub cause: ParseIntError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_error_display() {
        let err = CastError::Name {
            expected: "PRIVMSG",
            got: "NOTICE".to_string(),
        };
        assert_eq!(format!("{}", err), "expected command PRIVMSG, got NOTICE");

        let err = CastError::Arity {
            expected: 1,
            got: 0,
        };
        assert_eq!(format!("{}", err), "expected 1 arguments, got 0");
    }

    #[test]
    fn test_tag_number_error_source_chaining() {
        let cause = "abc".parse::<i64>().unwrap_err();
        let err = TagNumberError {
            tag: "tmi-sent-ts",
            value: "abc".to_string(),
            cause: cause.clone(),
        };
        assert_eq!(
            format!("{}", err),
            "tag 'tmi-sent-ts' holds non-numeric value 'abc'"
        );
        let source = std::error::Error::source(&err);
        assert!(source.is_some());
        assert_eq!(source.unwrap().to_string(), cause.to_string());
    }
}
