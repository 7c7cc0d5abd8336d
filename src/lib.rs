//! # ircv3-proto
//!
//! A Rust library for parsing and serializing IRCv3 protocol lines, with
//! a typed command layer for the Twitch chat dialect.
//!
//! ## Features
//!
//! - Total parsing of one line into a generic [`Message`] (tags, source,
//!   name, arguments, trailing comment) — no input fails to parse
//! - Serialization that is the exact inverse for any parsed value
//! - A closed taxonomy of typed commands narrowed via `TryFrom`, each
//!   validating its shape with recoverable [`CastError`]s
//! - Compile-time [`Side`] classification of each command type
//! - Optional serde support for the stable JSON projection of a message
//!
//! ## Quick Start
//!
//! ### Parsing and narrowing
//!
//! ```rust
//! use ircv3_proto::{Message, Ping};
//!
//! let message = Message::parse("PING :tmi.twitch.tv");
//! assert_eq!(message.name, "PING");
//!
//! let ping = Ping::try_from(&message).expect("well-shaped PING");
//! assert_eq!(ping.reply().to_string(), "PONG :tmi.twitch.tv");
//! ```
//!
//! ### The Twitch dialect
//!
//! ```rust
//! use ircv3_proto::Message;
//! use ircv3_proto::command::twitch::ServerPrivmsg;
//!
//! let raw = "@id=123;user-id=55 :nick!u@h PRIVMSG #room :hello there";
//! let privmsg = ServerPrivmsg::try_from(&Message::parse(raw)).unwrap();
//! assert_eq!(privmsg.room(), "#room");
//! assert_eq!(privmsg.sender().name(), "nick");
//! assert_eq!(
//!     privmsg.reply("hi!").to_string(),
//!     "@reply-parent-msg-id=123 PRIVMSG #room :hi!",
//! );
//! ```
//!
//! Transport, reconnect logic and rate limiting are out of scope; this
//! crate is the pure parse/serialize layer such machinery consumes.

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod command;
pub mod error;
pub mod message;
pub mod scanner;

pub use self::command::common::{Ping, Pong, Welcome};
pub use self::command::{Command, Side};
pub use self::error::{CastError, TagNumberError};
pub use self::message::{Message, Tags};
pub use self::scanner::Scanner;
