//! The generic parsed form of one IRC line.
//!
//! A [`Message`] knows IRC framing (tags, source, name, arguments,
//! trailing comment) but nothing about what any particular command
//! means. Parsing is total: the grammar has no mandatory markers besides
//! the line itself, so every input produces *some* message, even a
//! semantically nonsensical one. Narrowing into a known command shape is
//! the job of the [`command`](crate::command) module.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scanner::Scanner;

/// Message tags: label to value, unique labels, last write wins.
///
/// Values may be empty; a tag written without `=` on the wire scans as an
/// empty value. Map order is not semantically meaningful, but the
/// ordered map keeps serialization deterministic.
pub type Tags = BTreeMap<String, String>;

/// One parsed IRC line.
///
/// ```text
/// ["@" tag *(";" tag) " "] [":" source " "] name *(" " argument) [" :" comment]
/// ```
///
/// Arguments never contain a space or start with `:`; text of that shape
/// would have been scanned as the comment marker or folded into the
/// comment. `name` is the only field present on every well-formed line.
///
/// # Examples
///
/// ```
/// use ircv3_proto::Message;
///
/// let message = Message::parse("@id=123 :nick!u@h PRIVMSG #room :hello there");
/// assert_eq!(message.name, "PRIVMSG");
/// assert_eq!(message.arguments, vec!["#room"]);
/// assert_eq!(message.comment.as_deref(), Some("hello there"));
/// assert_eq!(message.source.as_deref(), Some("nick!u@h"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Message {
    /// Tag map, absent entirely when no `@` segment was present.
    pub tags: Option<Tags>,
    /// Sender identity, present iff the line carried a `:` before the name.
    pub source: Option<String>,
    /// The command verb or three-digit numeric reply code.
    pub name: String,
    /// Whitespace-delimited positional parameters, excluding the comment.
    pub arguments: Vec<String>,
    /// The trailing parameter; the only one that may contain spaces.
    pub comment: Option<String>,
}

impl Message {
    /// Create a message with only a name, for builder-style construction.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            tags: None,
            source: None,
            name: name.into(),
            arguments: Vec::new(),
            comment: None,
        }
    }

    /// Append one positional argument.
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Set the trailing comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Insert one tag, creating the tag map if absent.
    pub fn with_tag(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags
            .get_or_insert_with(Tags::new)
            .insert(label.into(), value.into());
        self
    }

    /// Set the source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Parse one raw line into a message.
    ///
    /// Each grammar stage is conditional on a one-character lookahead:
    /// a `@` opens the tag segment, a `:` opens the source, the name runs
    /// to the next space, arguments run to the ` :` comment marker, and
    /// whatever remains past that marker is the comment.
    ///
    /// Tag values are kept exactly as scanned; the IRCv3 escaping
    /// convention (`\:`, `\s`, `\\`, `\r`, `\n`) is not applied.
    pub fn parse(line: &str) -> Self {
        let mut scanner = Scanner::new(line);

        let tags = if scanner.peek() == Some('@') {
            let segment = scanner.take_until(" ", true);
            scanner.advance();
            Some(parse_tag_segment(segment))
        } else {
            None
        };

        let source = if scanner.peek() == Some(':') {
            let source = scanner.take_until(" ", true).to_owned();
            scanner.advance();
            Some(source)
        } else {
            None
        };

        let name = scanner.take_until(" ", false).to_owned();

        let arguments = scanner
            .take_until(" :", false)
            .split(' ')
            .filter(|piece| !piece.is_empty())
            .map(str::to_owned)
            .collect();

        // If anything remains the cursor sits on the comment's colon marker.
        let comment = if scanner.ok() {
            Some(scanner.advance().take_all().to_owned())
        } else {
            None
        };

        Self {
            tags,
            source,
            name,
            arguments,
            comment,
        }
    }
}

/// Split a raw tag segment (without the leading `@`) into a tag map.
///
/// A missing `=` yields an empty value; a `+` vendor marker is stripped
/// from the label before insertion; duplicate labels keep the last value.
fn parse_tag_segment(segment: &str) -> Tags {
    let mut tags = Tags::new();
    for piece in segment.split(';') {
        let (label, value) = piece.split_once('=').unwrap_or((piece, ""));
        let label = label.strip_prefix('+').unwrap_or(label);
        tags.insert(label.to_owned(), value.to_owned());
    }
    tags
}

impl From<&str> for Message {
    fn from(line: &str) -> Self {
        Self::parse(line)
    }
}

impl FromStr for Message {
    type Err = Infallible;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(line))
    }
}

impl fmt::Display for Message {
    /// Serialize back to the wire form.
    ///
    /// The exact inverse of [`Message::parse`] for any value that was
    /// itself produced by parsing. No field is re-escaped and the name
    /// is never omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tags) = &self.tags {
            write!(f, "@")?;
            for (i, (label, value)) in tags.iter().enumerate() {
                if i > 0 {
                    write!(f, ";")?;
                }
                write!(f, "{label}={value}")?;
            }
            write!(f, " ")?;
        }
        if let Some(source) = &self.source {
            write!(f, ":{source} ")?;
        }
        f.write_str(&self.name)?;
        for argument in &self.arguments {
            write!(f, " {argument}")?;
        }
        if let Some(comment) = &self.comment {
            write!(f, " :{comment}")?;
        }
        Ok(())
    }
}
