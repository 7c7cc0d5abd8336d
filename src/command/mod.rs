//! Typed IRC commands.
//!
//! Each type here is a validated, narrowed view of a generic
//! [`Message`]: the `TryFrom<&Message>` cast checks name, arity, comment,
//! tags and source against the command's structural contract and copies
//! out only the fields that command carries. Fields a command never has
//! (a `JOIN` has no comment, a client command has no source) simply do
//! not exist on its type.
//!
//! Casts are routinely attempted against arbitrary incoming traffic to
//! discover what kind of message a line is, so every mismatch is a
//! recoverable [`CastError`].

pub mod common;
pub mod twitch;

use std::borrow::Cow;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::{CastError, TagNumberError};
use crate::message::{Message, Tags};

/// Which peer may legally send a command.
///
/// A fixed property of each command type, not of an instance: message
/// direction is encoded in the type itself (`Ping` is server-sent,
/// `Pong` is the client's answer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Sent by the client only.
    Client,
    /// Sent by the server only.
    Server,
    /// Either peer may send it.
    Common,
}

impl Side {
    /// True if a command classified as `self` may be sent by `sender`.
    ///
    /// Used to reject cross-direction misuse before a line ever hits the
    /// wire: a server must never be asked to emit a client-only command.
    pub fn sendable_from(self, sender: Side) -> bool {
        matches!(self, Side::Common) || self == sender
    }
}

/// A well-known command shape.
///
/// The five wire fields are exposed uniformly; `comment`, `tags` and
/// `source` default to `None` so a command that never carries one omits
/// the field from its type and inherits the default. Serialization is
/// implemented once over this interface by [`Command::to_message`].
pub trait Command {
    /// The command verb or numeric code this type answers to.
    const NAME: &'static str;
    /// The peer this command type may be sent by.
    const SIDE: Side;

    /// The positional arguments, in wire order.
    fn arguments(&self) -> Vec<Cow<'_, str>> {
        Vec::new()
    }

    /// The trailing comment, if this command carries one.
    fn comment(&self) -> Option<&str> {
        None
    }

    /// The tag map, if this command carries one.
    fn tags(&self) -> Option<&Tags> {
        None
    }

    /// The sender identity, if this command carries one.
    fn source(&self) -> Option<&str> {
        None
    }

    /// Build the generic wire record for this command.
    fn to_message(&self) -> Message
    where
        Self: Sized,
    {
        Message {
            tags: self.tags().cloned(),
            source: self.source().map(str::to_owned),
            name: Self::NAME.to_owned(),
            arguments: self
                .arguments()
                .into_iter()
                .map(Cow::into_owned)
                .collect(),
            comment: self.comment().map(str::to_owned),
        }
    }
}

/// Implement `Display` for command types via [`Command::to_message`].
macro_rules! impl_command_display {
    ($($command:ty),+ $(,)?) => {$(
        impl ::std::fmt::Display for $command {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let message = $crate::command::Command::to_message(self);
                ::std::fmt::Display::fmt(&message, f)
            }
        }
    )+};
}
pub(crate) use impl_command_display;

// Cast preconditions, checked in the order name, arity, comment, tags,
// source. Each returns the borrowed field where the caller needs it.

pub(crate) fn expect_name(message: &Message, expected: &'static str) -> Result<(), CastError> {
    if message.name == expected {
        Ok(())
    } else {
        Err(CastError::Name {
            expected,
            got: message.name.clone(),
        })
    }
}

pub(crate) fn expect_arity(message: &Message, expected: usize) -> Result<(), CastError> {
    if message.arguments.len() == expected {
        Ok(())
    } else {
        Err(CastError::Arity {
            expected,
            got: message.arguments.len(),
        })
    }
}

pub(crate) fn require_comment(message: &Message) -> Result<&str, CastError> {
    message.comment.as_deref().ok_or(CastError::MissingComment)
}

pub(crate) fn forbid_comment(message: &Message) -> Result<(), CastError> {
    match message.comment {
        None => Ok(()),
        Some(_) => Err(CastError::UnexpectedComment),
    }
}

pub(crate) fn require_tags(message: &Message) -> Result<&Tags, CastError> {
    message.tags.as_ref().ok_or(CastError::MissingTags)
}

pub(crate) fn forbid_tags(message: &Message) -> Result<(), CastError> {
    match message.tags {
        None => Ok(()),
        Some(_) => Err(CastError::UnexpectedTags),
    }
}

pub(crate) fn require_source(message: &Message) -> Result<&str, CastError> {
    message.source.as_deref().ok_or(CastError::MissingSource)
}

pub(crate) fn forbid_source(message: &Message) -> Result<(), CastError> {
    match message.source {
        None => Ok(()),
        Some(_) => Err(CastError::UnexpectedSource),
    }
}

/// Read a numeric tag lazily.
///
/// Absent tag means "no value", never zero; a present but malformed
/// value is a [`TagNumberError`] local to the accessor that reads it.
pub(crate) fn numeric_tag<T>(tags: &Tags, tag: &'static str) -> Result<Option<T>, TagNumberError>
where
    T: FromStr<Err = ParseIntError>,
{
    match tags.get(tag) {
        Some(value) => value.parse().map(Some).map_err(|cause| TagNumberError {
            tag,
            value: value.clone(),
            cause,
        }),
        None => Ok(None),
    }
}

/// Read a `0`/`1` flag tag.
///
/// Absence stays `None` ("unchanged" / "unknown"), distinct from
/// `Some(false)`.
pub(crate) fn flag_tag(tags: &Tags, tag: &str) -> Option<bool> {
    tags.get(tag).map(|value| value == "1")
}
