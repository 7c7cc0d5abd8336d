//! A dumb cursor over one line of text.
//!
//! The scanner has no knowledge of IRC framing: all protocol decisions
//! (is this character `@`? is the rest a trailing comment?) are made by
//! the caller, which drives the cursor with [`Scanner::peek`],
//! [`Scanner::advance`] and the two extraction primitives.

/// A forward-only cursor over a single line.
///
/// Extraction returns slices borrowed from the input, so a `Scanner` is
/// zero-copy; callers that need owned data copy eagerly.
///
/// # Examples
///
/// ```
/// use ircv3_proto::Scanner;
///
/// let mut scanner = Scanner::new("PING :tmi.twitch.tv");
/// assert_eq!(scanner.take_until(" ", false), "PING");
/// assert_eq!(scanner.advance().take_all(), ":tmi.twitch.tv");
/// assert!(!scanner.ok());
/// ```
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, cursor: 0 }
    }

    /// The character at the cursor, or `None` when exhausted.
    ///
    /// Never advances.
    pub fn peek(&self) -> Option<char> {
        self.input[self.cursor..].chars().next()
    }

    /// Step past one character the caller has already identified.
    ///
    /// Chainable, so a delimiter skip can flow straight into an
    /// extraction: `scanner.advance().take_all()`. A no-op when
    /// exhausted.
    pub fn advance(&mut self) -> &mut Self {
        if let Some(c) = self.peek() {
            self.cursor += c.len_utf8();
        }
        self
    }

    /// Take text up to the next occurrence of `delimiter`.
    ///
    /// With `exclude_current` the character at the cursor is treated as
    /// an already-known marker: it is skipped before the search and not
    /// part of the result. After a hit the cursor rests on the last
    /// character of the delimiter, so one `advance()` steps past the
    /// whole sequence. If the delimiter does not occur, the remainder is
    /// returned and the scanner is exhausted.
    pub fn take_until(&mut self, delimiter: &str, exclude_current: bool) -> &'a str {
        let start = if exclude_current {
            match self.peek() {
                Some(c) => self.cursor + c.len_utf8(),
                None => return "",
            }
        } else {
            self.cursor
        };
        match self.input[start..].find(delimiter) {
            Some(offset) => {
                let hit = start + offset;
                let last = delimiter.chars().next_back().map_or(0, char::len_utf8);
                self.cursor = hit + delimiter.len() - last;
                &self.input[start..hit]
            }
            None => {
                self.cursor = self.input.len();
                &self.input[start..]
            }
        }
    }

    /// Take everything remaining and exhaust the scanner.
    pub fn take_all(&mut self) -> &'a str {
        let rest = &self.input[self.cursor..];
        self.cursor = self.input.len();
        rest
    }

    /// True while the cursor has not reached end of input.
    pub fn ok(&self) -> bool {
        self.cursor < self.input.len()
    }
}
