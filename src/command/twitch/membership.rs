//! Room membership: JOIN and PART in both directions.
//!
//! The client batches several rooms into one comma-joined argument; the
//! server echoes membership changes one room at a time, with a source.
//! Neither direction ever carries tags or a comment, so those fields do
//! not exist on these types.

use std::borrow::Cow;

use crate::command::{
    expect_arity, expect_name, forbid_comment, forbid_source, forbid_tags,
    impl_command_display, require_source, Command, Side,
};
use crate::error::CastError;
use crate::message::Message;

/// A client request to join one or more rooms.
///
/// # Examples
///
/// ```
/// use ircv3_proto::command::twitch::ClientJoin;
///
/// let join = ClientJoin::new(["#a", "#b"]);
/// assert_eq!(join.to_string(), "JOIN #a,#b");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientJoin {
    rooms: Vec<String>,
}

impl ClientJoin {
    /// Create a join for `rooms`.
    pub fn new<I, S>(rooms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rooms: rooms.into_iter().map(Into::into).collect(),
        }
    }

    /// The rooms to join.
    pub fn rooms(&self) -> &[String] {
        &self.rooms
    }
}

impl Command for ClientJoin {
    const NAME: &'static str = "JOIN";
    const SIDE: Side = Side::Client;

    fn arguments(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Owned(self.rooms.join(","))]
    }
}

impl TryFrom<&Message> for ClientJoin {
    type Error = CastError;

    fn try_from(message: &Message) -> Result<Self, Self::Error> {
        expect_name(message, Self::NAME)?;
        expect_arity(message, 1)?;
        forbid_comment(message)?;
        forbid_tags(message)?;
        forbid_source(message)?;
        Ok(Self::new(message.arguments[0].split(',')))
    }
}

/// The server's echo that some client joined a room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerJoin {
    room: String,
    source: String,
}

impl ServerJoin {
    /// The room that was joined.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// The joining client's source.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Command for ServerJoin {
    const NAME: &'static str = "JOIN";
    const SIDE: Side = Side::Server;

    fn arguments(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.room.as_str())]
    }

    fn source(&self) -> Option<&str> {
        Some(&self.source)
    }
}

impl TryFrom<&Message> for ServerJoin {
    type Error = CastError;

    fn try_from(message: &Message) -> Result<Self, Self::Error> {
        expect_name(message, Self::NAME)?;
        expect_arity(message, 1)?;
        forbid_comment(message)?;
        forbid_tags(message)?;
        let source = require_source(message)?;
        Ok(Self {
            room: message.arguments[0].clone(),
            source: source.to_owned(),
        })
    }
}

/// A client request to leave one or more rooms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientPart {
    rooms: Vec<String>,
}

impl ClientPart {
    /// Create a part for `rooms`.
    pub fn new<I, S>(rooms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rooms: rooms.into_iter().map(Into::into).collect(),
        }
    }

    /// The rooms to part from.
    pub fn rooms(&self) -> &[String] {
        &self.rooms
    }
}

impl Command for ClientPart {
    const NAME: &'static str = "PART";
    const SIDE: Side = Side::Client;

    fn arguments(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Owned(self.rooms.join(","))]
    }
}

impl TryFrom<&Message> for ClientPart {
    type Error = CastError;

    fn try_from(message: &Message) -> Result<Self, Self::Error> {
        expect_name(message, Self::NAME)?;
        expect_arity(message, 1)?;
        forbid_comment(message)?;
        forbid_tags(message)?;
        forbid_source(message)?;
        Ok(Self::new(message.arguments[0].split(',')))
    }
}

/// The server's echo that some client left a room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerPart {
    room: String,
    source: String,
}

impl ServerPart {
    /// The room that was parted.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// The parting client's source.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Command for ServerPart {
    const NAME: &'static str = "PART";
    const SIDE: Side = Side::Server;

    fn arguments(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.room.as_str())]
    }

    fn source(&self) -> Option<&str> {
        Some(&self.source)
    }
}

impl TryFrom<&Message> for ServerPart {
    type Error = CastError;

    fn try_from(message: &Message) -> Result<Self, Self::Error> {
        expect_name(message, Self::NAME)?;
        expect_arity(message, 1)?;
        forbid_comment(message)?;
        forbid_tags(message)?;
        let source = require_source(message)?;
        Ok(Self {
            room: message.arguments[0].clone(),
            source: source.to_owned(),
        })
    }
}

impl_command_display!(ClientJoin, ServerJoin, ClientPart, ServerPart);
