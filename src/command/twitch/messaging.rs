//! Room messaging: PRIVMSG in both directions, NOTICE, and the sender
//! identity derived from an incoming message.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::command::{
    expect_arity, expect_name, forbid_source, impl_command_display, numeric_tag,
    require_comment, require_source, require_tags, Command, Side,
};
use crate::error::{CastError, TagNumberError};
use crate::message::{Message, Tags};

use super::MIN_NAME_LEN;

/// A chat message sent by the client.
///
/// Tags are optional on the client side: a plain message carries none,
/// a threaded reply carries `reply-parent-msg-id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientPrivmsg {
    room: String,
    comment: String,
    tags: Option<Tags>,
}

impl ClientPrivmsg {
    /// Create a message saying `comment` in `room`.
    pub fn new(room: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            comment: comment.into(),
            tags: None,
        }
    }

    /// Attach one tag.
    pub fn with_tag(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags
            .get_or_insert_with(Tags::new)
            .insert(label.into(), value.into());
        self
    }

    /// The room this message is sent to.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// The message text.
    pub fn comment(&self) -> &str {
        &self.comment
    }
}

impl Command for ClientPrivmsg {
    const NAME: &'static str = "PRIVMSG";
    const SIDE: Side = Side::Client;

    fn arguments(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.room.as_str())]
    }

    fn comment(&self) -> Option<&str> {
        Some(&self.comment)
    }

    fn tags(&self) -> Option<&Tags> {
        self.tags.as_ref()
    }
}

impl TryFrom<&Message> for ClientPrivmsg {
    type Error = CastError;

    fn try_from(message: &Message) -> Result<Self, Self::Error> {
        expect_name(message, Self::NAME)?;
        expect_arity(message, 1)?;
        let comment = require_comment(message)?;
        forbid_source(message)?;
        Ok(Self {
            room: message.arguments[0].clone(),
            comment: comment.to_owned(),
            tags: message.tags.clone(),
        })
    }
}

/// A chat message arriving from the server.
///
/// Server messages always carry tags and a source; the interesting
/// metadata (message id, send time, sender identity) lives in the tags
/// and is interpreted lazily.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerPrivmsg {
    room: String,
    comment: String,
    tags: Tags,
    source: String,
}

impl ServerPrivmsg {
    /// The room this message was sent to.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// The message text.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// The message's identifier, from the `id` tag.
    pub fn id(&self) -> Option<&str> {
        self.tags.get("id").map(String::as_str)
    }

    /// Milliseconds since the Unix epoch at which the message was sent,
    /// from the `tmi-sent-ts` tag.
    pub fn sent(&self) -> Result<Option<i64>, TagNumberError> {
        numeric_tag(&self.tags, "tmi-sent-ts")
    }

    /// [`ServerPrivmsg::sent`] as a UTC timestamp.
    ///
    /// Also `None` when the millisecond value is outside chrono's
    /// representable range.
    pub fn sent_at(&self) -> Result<Option<DateTime<Utc>>, TagNumberError> {
        Ok(self.sent()?.and_then(DateTime::from_timestamp_millis))
    }

    /// The message's sender, viewed through the source and tags.
    pub fn sender(&self) -> Sender<'_> {
        Sender { message: self }
    }

    /// A client message in reply to this one.
    ///
    /// When the message carries an `id` tag the reply is threaded via
    /// `reply-parent-msg-id`; otherwise it falls back to a manual quote
    /// that opens with an at-mention of the author.
    pub fn reply(&self, comment: impl Into<String>) -> ClientPrivmsg {
        match self.id() {
            Some(id) => ClientPrivmsg::new(self.room.as_str(), comment)
                .with_tag("reply-parent-msg-id", id),
            None => ClientPrivmsg::new(
                self.room.as_str(),
                format!("{} {}", self.sender().handle(), comment.into()),
            ),
        }
    }
}

impl Command for ServerPrivmsg {
    const NAME: &'static str = "PRIVMSG";
    const SIDE: Side = Side::Server;

    fn arguments(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.room.as_str())]
    }

    fn comment(&self) -> Option<&str> {
        Some(&self.comment)
    }

    fn tags(&self) -> Option<&Tags> {
        Some(&self.tags)
    }

    fn source(&self) -> Option<&str> {
        Some(&self.source)
    }
}

impl TryFrom<&Message> for ServerPrivmsg {
    type Error = CastError;

    fn try_from(message: &Message) -> Result<Self, Self::Error> {
        expect_name(message, Self::NAME)?;
        expect_arity(message, 1)?;
        let comment = require_comment(message)?;
        let tags = require_tags(message)?;
        let source = require_source(message)?;
        Ok(Self {
            room: message.arguments[0].clone(),
            comment: comment.to_owned(),
            tags: tags.clone(),
            source: source.to_owned(),
        })
    }
}

/// The client that sent a [`ServerPrivmsg`].
///
/// A borrowed view; it copies nothing and lives no longer than the
/// message it reads from.
#[derive(Clone, Copy, Debug)]
pub struct Sender<'a> {
    message: &'a ServerPrivmsg,
}

impl Sender<'_> {
    /// The sender's login name, cut from the source before the first `!`
    /// (searching from the shortest possible name length onward). The
    /// whole source when no `!` is present.
    pub fn name(&self) -> &str {
        let source = self.message.source.as_str();
        match source.get(MIN_NAME_LEN..).and_then(|rest| rest.find('!')) {
            Some(offset) => &source[..MIN_NAME_LEN + offset],
            None => source,
        }
    }

    /// The sender's display name, falling back to [`Sender::name`] when
    /// the `display-name` tag is empty or absent.
    pub fn display_name(&self) -> &str {
        match self.message.tags.get("display-name") {
            Some(name) if !name.is_empty() => name,
            _ => self.name(),
        }
    }

    /// The sender's at-mention handle.
    pub fn handle(&self) -> String {
        format!("@{}", self.display_name())
    }

    /// The sender's own room.
    pub fn room(&self) -> String {
        format!("#{}", self.name())
    }

    /// The sender's identifier, from the `user-id` tag.
    pub fn user_id(&self) -> Option<&str> {
        self.message.tags.get("user-id").map(String::as_str)
    }

    /// The sender's name color; empty when the sender never set one.
    pub fn color(&self) -> Option<&str> {
        self.message.tags.get("color").map(String::as_str)
    }

    /// True if the sender is the broadcaster of the message's room.
    pub fn is_broadcaster(&self) -> bool {
        self.room() == self.message.room
    }

    /// True if the sender is a moderator.
    pub fn is_moderator(&self) -> bool {
        self.message.tags.get("mod").map(String::as_str) == Some("1")
    }

    /// True if the sender is a VIP. Presence of the tag is the signal.
    pub fn is_vip(&self) -> bool {
        self.message.tags.contains_key("vip")
    }

    /// True if the sender is a subscriber.
    pub fn is_subscriber(&self) -> bool {
        self.message.tags.get("subscriber").map(String::as_str) == Some("1")
    }
}

impl fmt::Display for Sender<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.handle())
    }
}

/// A server notice addressed to a room, or to `*` when global.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    room: String,
    comment: String,
    tags: Option<Tags>,
    source: String,
}

impl Notice {
    /// The room this notice pertains to; `*` for a global notice.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// The notice text.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// The machine-readable notice kind, from the `msg-id` tag.
    pub fn msg_id(&self) -> Option<&str> {
        self.tags.as_ref().and_then(|tags| tags.get("msg-id")).map(String::as_str)
    }
}

impl Command for Notice {
    const NAME: &'static str = "NOTICE";
    const SIDE: Side = Side::Server;

    fn arguments(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(self.room.as_str())]
    }

    fn comment(&self) -> Option<&str> {
        Some(&self.comment)
    }

    fn tags(&self) -> Option<&Tags> {
        self.tags.as_ref()
    }

    fn source(&self) -> Option<&str> {
        Some(&self.source)
    }
}

impl TryFrom<&Message> for Notice {
    type Error = CastError;

    fn try_from(message: &Message) -> Result<Self, Self::Error> {
        expect_name(message, Self::NAME)?;
        expect_arity(message, 1)?;
        let comment = require_comment(message)?;
        let source = require_source(message)?;
        Ok(Self {
            room: message.arguments[0].clone(),
            comment: comment.to_owned(),
            tags: message.tags.clone(),
            source: source.to_owned(),
        })
    }
}

impl_command_display!(ClientPrivmsg, ServerPrivmsg, Notice);

#[cfg(test)]
mod tests {
    use super::*;

    fn server_privmsg(raw: &str) -> ServerPrivmsg {
        ServerPrivmsg::try_from(&Message::parse(raw)).unwrap()
    }

    #[test]
    fn test_client_privmsg_cast() {
        let message = Message::parse("PRIVMSG #room :hello");
        let privmsg = ClientPrivmsg::try_from(&message).unwrap();
        assert_eq!(privmsg.room(), "#room");
        assert_eq!(privmsg.comment(), "hello");
        assert_eq!(privmsg.to_string(), "PRIVMSG #room :hello");
    }

    #[test]
    fn test_client_privmsg_tags_optional() {
        let tagged = Message::parse("@reply-parent-msg-id=1 PRIVMSG #room :hi");
        assert!(ClientPrivmsg::try_from(&tagged).is_ok());
    }

    #[test]
    fn test_client_privmsg_rejects_zero_arguments() {
        let message = Message::parse("PRIVMSG :hello");
        assert_eq!(
            ClientPrivmsg::try_from(&message),
            Err(CastError::Arity {
                expected: 1,
                got: 0,
            })
        );
    }

    #[test]
    fn test_client_privmsg_rejects_source() {
        let message = Message::parse(":nick!u@h PRIVMSG #room :hello");
        assert_eq!(
            ClientPrivmsg::try_from(&message),
            Err(CastError::UnexpectedSource)
        );
    }

    #[test]
    fn test_server_privmsg_cast() {
        let privmsg =
            server_privmsg("@id=123;user-id=55 :nick!u@h PRIVMSG #room :hello there");
        assert_eq!(privmsg.room(), "#room");
        assert_eq!(privmsg.comment(), "hello there");
        assert_eq!(privmsg.id(), Some("123"));
    }

    #[test]
    fn test_server_privmsg_requires_tags() {
        let message = Message::parse(":nick!u@h PRIVMSG #room :hello");
        assert_eq!(
            ServerPrivmsg::try_from(&message),
            Err(CastError::MissingTags)
        );
    }

    #[test]
    fn test_sent_parses_millis() {
        let privmsg =
            server_privmsg("@id=1;tmi-sent-ts=1507246572675 :n!u@h PRIVMSG #r :x");
        assert_eq!(privmsg.sent().unwrap(), Some(1507246572675));
        let at = privmsg.sent_at().unwrap().unwrap();
        assert_eq!(at.timestamp_millis(), 1507246572675);
    }

    #[test]
    fn test_sent_absent_is_none() {
        let privmsg = server_privmsg("@id=1 :n!u@h PRIVMSG #r :x");
        assert_eq!(privmsg.sent().unwrap(), None);
    }

    #[test]
    fn test_sent_malformed_is_error() {
        let privmsg = server_privmsg("@id=1;tmi-sent-ts=soon :n!u@h PRIVMSG #r :x");
        let err = privmsg.sent().unwrap_err();
        assert_eq!(err.tag, "tmi-sent-ts");
        assert_eq!(err.value, "soon");
    }

    #[test]
    fn test_sender_name_from_source() {
        let privmsg = server_privmsg("@id=1 :nick!u@h PRIVMSG #room :x");
        assert_eq!(privmsg.sender().name(), "nick");
    }

    #[test]
    fn test_sender_display_name_fallback() {
        let privmsg = server_privmsg("@display-name=;id=1 :nick!u@h PRIVMSG #room :x");
        assert_eq!(privmsg.sender().display_name(), "nick");

        let privmsg = server_privmsg("@display-name=Nick;id=1 :nick!u@h PRIVMSG #room :x");
        assert_eq!(privmsg.sender().display_name(), "Nick");
        assert_eq!(privmsg.sender().handle(), "@Nick");
    }

    #[test]
    fn test_sender_flags() {
        let privmsg = server_privmsg(
            "@mod=1;subscriber=0;vip=;user-id=55;color=#FF0000 :nick!u@h PRIVMSG #room :x",
        );
        let sender = privmsg.sender();
        assert!(sender.is_moderator());
        assert!(!sender.is_subscriber());
        assert!(sender.is_vip());
        assert_eq!(sender.user_id(), Some("55"));
        assert_eq!(sender.color(), Some("#FF0000"));
        assert!(!sender.is_broadcaster());
    }

    #[test]
    fn test_sender_broadcaster_in_own_room() {
        let privmsg = server_privmsg("@id=1 :nick!u@h PRIVMSG #nick :x");
        assert!(privmsg.sender().is_broadcaster());
        assert_eq!(privmsg.sender().room(), "#nick");
    }

    #[test]
    fn test_reply_threads_when_id_present() {
        let privmsg = server_privmsg("@id=123 :nick!u@h PRIVMSG #room :question?");
        let reply = privmsg.reply("answer!");
        assert_eq!(reply.room(), "#room");
        assert_eq!(reply.comment(), "answer!");
        assert_eq!(
            reply.to_string(),
            "@reply-parent-msg-id=123 PRIVMSG #room :answer!"
        );
    }

    #[test]
    fn test_reply_falls_back_to_mention() {
        let privmsg = server_privmsg("@display-name=Nick :nick!u@h PRIVMSG #room :question?");
        let reply = privmsg.reply("answer!");
        assert_eq!(reply.comment(), "@Nick answer!");
        assert_eq!(reply.to_string(), "PRIVMSG #room :@Nick answer!");
    }

    #[test]
    fn test_notice_cast() {
        let message =
            Message::parse("@msg-id=slow_on :tmi.twitch.tv NOTICE #room :This room is now in slow mode.");
        let notice = Notice::try_from(&message).unwrap();
        assert_eq!(notice.room(), "#room");
        assert_eq!(notice.msg_id(), Some("slow_on"));

        // Tags are optional on notices.
        let bare = Message::parse(":tmi.twitch.tv NOTICE * :Login unsuccessful");
        let notice = Notice::try_from(&bare).unwrap();
        assert_eq!(notice.room(), "*");
        assert_eq!(notice.msg_id(), None);
    }
}
