//! Commands shared by every IRC dialect: the PING/PONG keepalive pair
//! and the 001 welcome numeric.

use std::borrow::Cow;

use crate::error::CastError;
use crate::message::Message;

use super::{
    expect_arity, expect_name, forbid_source, forbid_tags, impl_command_display,
    require_comment, require_source, Command, Side,
};

/// A server keepalive probe.
///
/// Carries only a comment; tags and source are never present on this
/// dialect's pings.
///
/// # Examples
///
/// ```
/// use ircv3_proto::{Message, Ping};
///
/// let ping = Ping::try_from(&Message::parse("PING :tmi.twitch.tv")).unwrap();
/// assert_eq!(ping.reply().to_string(), "PONG :tmi.twitch.tv");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ping {
    comment: String,
}

impl Ping {
    /// Create a ping carrying `comment`.
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
        }
    }

    /// The token the answering pong must echo.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// The pong answering this ping.
    pub fn reply(&self) -> Pong {
        Pong::new(self.comment.clone())
    }
}

impl Command for Ping {
    const NAME: &'static str = "PING";
    const SIDE: Side = Side::Server;

    fn comment(&self) -> Option<&str> {
        Some(&self.comment)
    }
}

impl TryFrom<&Message> for Ping {
    type Error = CastError;

    fn try_from(message: &Message) -> Result<Self, Self::Error> {
        expect_name(message, Self::NAME)?;
        expect_arity(message, 0)?;
        let comment = require_comment(message)?;
        forbid_tags(message)?;
        forbid_source(message)?;
        Ok(Self::new(comment))
    }
}

/// The client's answer to a [`Ping`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pong {
    comment: String,
}

impl Pong {
    /// Create a pong echoing `comment`.
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
        }
    }

    /// The echoed token.
    pub fn comment(&self) -> &str {
        &self.comment
    }
}

impl Command for Pong {
    const NAME: &'static str = "PONG";
    const SIDE: Side = Side::Client;

    fn comment(&self) -> Option<&str> {
        Some(&self.comment)
    }
}

impl TryFrom<&Message> for Pong {
    type Error = CastError;

    fn try_from(message: &Message) -> Result<Self, Self::Error> {
        expect_name(message, Self::NAME)?;
        expect_arity(message, 0)?;
        let comment = require_comment(message)?;
        forbid_tags(message)?;
        forbid_source(message)?;
        Ok(Self::new(comment))
    }
}

/// The 001 welcome numeric, sent once after registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Welcome {
    user: String,
    comment: String,
    source: String,
}

impl Welcome {
    /// Create a welcome for `user` with greeting `comment`.
    pub fn new(
        user: impl Into<String>,
        comment: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            comment: comment.into(),
            source: source.into(),
        }
    }

    /// The user being welcomed.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The greeting text.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// The welcoming server.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Command for Welcome {
    const NAME: &'static str = "001";
    const SIDE: Side = Side::Server;

    fn arguments(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.user.as_str())]
    }

    fn comment(&self) -> Option<&str> {
        Some(&self.comment)
    }

    fn source(&self) -> Option<&str> {
        Some(&self.source)
    }
}

impl TryFrom<&Message> for Welcome {
    type Error = CastError;

    fn try_from(message: &Message) -> Result<Self, Self::Error> {
        expect_name(message, Self::NAME)?;
        expect_arity(message, 1)?;
        let comment = require_comment(message)?;
        forbid_tags(message)?;
        let source = require_source(message)?;
        Ok(Self::new(message.arguments[0].as_str(), comment, source))
    }
}

impl_command_display!(Ping, Pong, Welcome);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_cast_and_reply() {
        let message = Message::parse("PING :tmi.twitch.tv");
        let ping = Ping::try_from(&message).unwrap();
        assert_eq!(ping.comment(), "tmi.twitch.tv");

        let pong = ping.reply();
        assert_eq!(pong.comment(), "tmi.twitch.tv");
        assert_eq!(pong.to_string(), "PONG :tmi.twitch.tv");
    }

    #[test]
    fn test_ping_rejects_wrong_name() {
        let message = Message::parse("PONG :x");
        assert_eq!(
            Ping::try_from(&message),
            Err(CastError::Name {
                expected: "PING",
                got: "PONG".to_string(),
            })
        );
    }

    #[test]
    fn test_ping_rejects_missing_comment() {
        let message = Message::parse("PING");
        assert_eq!(Ping::try_from(&message), Err(CastError::MissingComment));
    }

    #[test]
    fn test_ping_rejects_arguments() {
        let message = Message::parse("PING arg :x");
        assert_eq!(
            Ping::try_from(&message),
            Err(CastError::Arity {
                expected: 0,
                got: 1,
            })
        );
    }

    #[test]
    fn test_ping_rejects_source() {
        let message = Message::parse(":srv PING :x");
        assert_eq!(Ping::try_from(&message), Err(CastError::UnexpectedSource));
    }

    #[test]
    fn test_pong_cast() {
        let pong = Pong::try_from(&Message::parse("PONG :token")).unwrap();
        assert_eq!(pong.comment(), "token");
    }

    #[test]
    fn test_welcome_cast() {
        let message = Message::parse(":tmi.twitch.tv 001 nick :Welcome, GLHF!");
        let welcome = Welcome::try_from(&message).unwrap();
        assert_eq!(welcome.user(), "nick");
        assert_eq!(welcome.comment(), "Welcome, GLHF!");
        assert_eq!(welcome.source(), "tmi.twitch.tv");
        assert_eq!(welcome.to_string(), ":tmi.twitch.tv 001 nick :Welcome, GLHF!");
    }

    #[test]
    fn test_welcome_rejects_missing_source() {
        let message = Message::parse("001 nick :Welcome");
        assert_eq!(Welcome::try_from(&message), Err(CastError::MissingSource));
    }

    #[test]
    fn test_sides_are_directional() {
        assert_eq!(Ping::SIDE, Side::Server);
        assert_eq!(Pong::SIDE, Side::Client);
        assert!(!Ping::SIDE.sendable_from(Side::Client));
        assert!(Pong::SIDE.sendable_from(Side::Client));
    }
}
