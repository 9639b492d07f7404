//! Log destination and sequencing cursor types

use std::fmt;

/// Compound external key identifying where log events are appended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub group: String,
    pub stream: String,
}

impl Destination {
    /// Create a new destination key
    pub fn new(group: String, stream: String) -> Self {
        Self { group, stream }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.stream)
    }
}

/// Expected next-write position for a destination
///
/// `Absent` means the destination is empty and the backend wants no token
/// at all; the append request must omit the field entirely in that case.
/// A successful append invalidates the cursor and returns a fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceCursor {
    /// Empty destination, no token wanted
    Absent,
    /// Opaque token the backend expects on the next append
    Token(String),
}

impl SequenceCursor {
    /// The token value, if one is required
    pub fn token(&self) -> Option<&str> {
        match self {
            SequenceCursor::Absent => None,
            SequenceCursor::Token(token) => Some(token),
        }
    }

    /// Whether the destination takes no token
    pub fn is_absent(&self) -> bool {
        matches!(self, SequenceCursor::Absent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_token_accessor() {
        assert_eq!(SequenceCursor::Absent.token(), None);
        assert_eq!(
            SequenceCursor::Token("49600".to_string()).token(),
            Some("49600")
        );
    }

    #[test]
    fn test_destination_display() {
        let dest = Destination::new("app-logs".to_string(), "host-1".to_string());
        assert_eq!(dest.to_string(), "app-logs/host-1");
    }
}
