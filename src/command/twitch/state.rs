//! Server state updates: ROOMSTATE, USERSTATE and GLOBALUSERSTATE.
//!
//! These commands carry their payload entirely in tags. A ROOMSTATE tag
//! is only present when that room property changed in this update, so
//! the accessors are three-state: absent means "unchanged", never
//! "false" or "zero".

use std::borrow::Cow;

use crate::command::{
    expect_arity, expect_name, flag_tag, forbid_comment, impl_command_display,
    numeric_tag, require_source, require_tags, Command, Side,
};
use crate::error::{CastError, TagNumberError};
use crate::message::{Message, Tags};

/// A room settings update.
///
/// Sent on join with the full settings, and again with only the changed
/// tags whenever a setting flips.
///
/// # Examples
///
/// ```
/// use ircv3_proto::Message;
/// use ircv3_proto::command::twitch::RoomState;
///
/// let raw = "@slow=0;emote-only=1 :tmi.twitch.tv ROOMSTATE #room";
/// let state = RoomState::try_from(&Message::parse(raw)).unwrap();
/// assert_eq!(state.delay().unwrap(), Some(0)); // present and zero
/// assert_eq!(state.emote_only(), Some(true));
/// assert_eq!(state.subscribers_only(), None); // unchanged
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomState {
    room: String,
    tags: Tags,
    source: String,
}

impl RoomState {
    /// The room this state pertains to.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// The room's message cooldown in seconds, from the `slow` tag.
    ///
    /// `Ok(None)` when the cooldown did not change in this update.
    pub fn delay(&self) -> Result<Option<u32>, TagNumberError> {
        numeric_tag(&self.tags, "slow")
    }

    /// Whether the room is in emote-only mode; `None` when unchanged.
    pub fn emote_only(&self) -> Option<bool> {
        flag_tag(&self.tags, "emote-only")
    }

    /// Whether the room is in subscribers-only mode; `None` when
    /// unchanged.
    pub fn subscribers_only(&self) -> Option<bool> {
        flag_tag(&self.tags, "subs-only")
    }
}

impl Command for RoomState {
    const NAME: &'static str = "ROOMSTATE";
    const SIDE: Side = Side::Server;

    fn arguments(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.room.as_str())]
    }

    fn tags(&self) -> Option<&Tags> {
        Some(&self.tags)
    }

    fn source(&self) -> Option<&str> {
        Some(&self.source)
    }
}

impl TryFrom<&Message> for RoomState {
    type Error = CastError;

    fn try_from(message: &Message) -> Result<Self, Self::Error> {
        expect_name(message, Self::NAME)?;
        expect_arity(message, 1)?;
        forbid_comment(message)?;
        let tags = require_tags(message)?;
        let source = require_source(message)?;
        Ok(Self {
            room: message.arguments[0].clone(),
            tags: tags.clone(),
            source: source.to_owned(),
        })
    }
}

/// The client's own state within one room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserState {
    room: String,
    tags: Tags,
    source: String,
}

impl UserState {
    /// The room this state pertains to.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// The client's display name in this room.
    pub fn display_name(&self) -> Option<&str> {
        self.tags.get("display-name").map(String::as_str)
    }

    /// The client's name color.
    pub fn color(&self) -> Option<&str> {
        self.tags.get("color").map(String::as_str)
    }

    /// True if the client moderates this room.
    pub fn is_moderator(&self) -> bool {
        self.tags.get("mod").map(String::as_str) == Some("1")
    }

    /// True if the client is subscribed to this room.
    pub fn is_subscriber(&self) -> bool {
        self.tags.get("subscriber").map(String::as_str) == Some("1")
    }
}

impl Command for UserState {
    const NAME: &'static str = "USERSTATE";
    const SIDE: Side = Side::Server;

    fn arguments(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.room.as_str())]
    }

    fn tags(&self) -> Option<&Tags> {
        Some(&self.tags)
    }

    fn source(&self) -> Option<&str> {
        Some(&self.source)
    }
}

impl TryFrom<&Message> for UserState {
    type Error = CastError;

    fn try_from(message: &Message) -> Result<Self, Self::Error> {
        expect_name(message, Self::NAME)?;
        expect_arity(message, 1)?;
        let tags = require_tags(message)?;
        let source = require_source(message)?;
        Ok(Self {
            room: message.arguments[0].clone(),
            tags: tags.clone(),
            source: source.to_owned(),
        })
    }
}

/// The client's global state, sent once after authentication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlobalUserState {
    tags: Tags,
    source: String,
}

impl GlobalUserState {
    /// The client's identifier, from the `user-id` tag.
    pub fn user_id(&self) -> Option<&str> {
        self.tags.get("user-id").map(String::as_str)
    }

    /// The client's display name.
    pub fn display_name(&self) -> Option<&str> {
        self.tags.get("display-name").map(String::as_str)
    }

    /// The client's name color.
    pub fn color(&self) -> Option<&str> {
        self.tags.get("color").map(String::as_str)
    }
}

impl Command for GlobalUserState {
    const NAME: &'static str = "GLOBALUSERSTATE";
    const SIDE: Side = Side::Server;

    fn tags(&self) -> Option<&Tags> {
        Some(&self.tags)
    }

    fn source(&self) -> Option<&str> {
        Some(&self.source)
    }
}

impl TryFrom<&Message> for GlobalUserState {
    type Error = CastError;

    fn try_from(message: &Message) -> Result<Self, Self::Error> {
        expect_name(message, Self::NAME)?;
        expect_arity(message, 0)?;
        forbid_comment(message)?;
        let tags = require_tags(message)?;
        let source = require_source(message)?;
        Ok(Self {
            tags: tags.clone(),
            source: source.to_owned(),
        })
    }
}

impl_command_display!(RoomState, UserState, GlobalUserState);
