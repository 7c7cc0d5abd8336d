//! The Twitch chat dialect.
//!
//! Twitch layers its chat service on IRCv3: PRIVMSG/JOIN/PART carry the
//! base semantics, while ROOMSTATE, USERSTATE, GLOBALUSERSTATE and a set
//! of well-known tags (`id`, `user-id`, `tmi-sent-ts`, `display-name`,
//! moderation flags) carry the service's own state. This module is the
//! sole dialect this crate targets.

mod membership;
mod messaging;
mod state;

pub use self::membership::{ClientJoin, ClientPart, ServerJoin, ServerPart};
pub use self::messaging::{ClientPrivmsg, Notice, Sender, ServerPrivmsg};
pub use self::state::{GlobalUserState, RoomState, UserState};

/// Byte length of the shortest possible Twitch login name.
///
/// Lets the `!` search in a source skip the region where it cannot mark
/// the end of the name.
pub(crate) const MIN_NAME_LEN: usize = 3;
