//! The allowed key set.
//!
//! A browser can only ever ask the host to press one of five keys.  The set
//! is a closed enum rather than a list of strings so that anything past the
//! validation point (the key executor, the platform tables) cannot be handed
//! an arbitrary name: the type system carries the proof that the name was
//! checked.
//!
//! Wire names are the lowercase strings the control page sends.  Matching is
//! exact and case-sensitive: `"left"` is admitted, `"Left"` and `"LEFT"` are
//! not.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the five keys Slidex is willing to simulate on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllowedKey {
    Left,
    Right,
    Up,
    Down,
    /// Advances most slide viewers, same as `Right`.
    Space,
}

impl AllowedKey {
    /// Every allowed key, in control-page order.
    pub const ALL: [AllowedKey; 5] = [
        AllowedKey::Left,
        AllowedKey::Right,
        AllowedKey::Up,
        AllowedKey::Down,
        AllowedKey::Space,
    ];

    /// Returns the wire name of this key (`"left"`, `"space"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            AllowedKey::Left => "left",
            AllowedKey::Right => "right",
            AllowedKey::Up => "up",
            AllowedKey::Down => "down",
            AllowedKey::Space => "space",
        }
    }
}

impl fmt::Display for AllowedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an inbound key name was not admitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("empty key name")]
    Empty,
    #[error("key {0:?} is not in the allowed key set")]
    NotAllowed(String),
}

impl FromStr for AllowedKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(KeyParseError::Empty);
        }
        AllowedKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| KeyParseError::NotAllowed(s.to_string()))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_wire_name_parses_to_its_key() {
        for key in AllowedKey::ALL {
            assert_eq!(key.as_str().parse::<AllowedKey>(), Ok(key));
        }
    }

    #[test]
    fn test_allowed_set_has_exactly_five_distinct_names() {
        let mut names: Vec<_> = AllowedKey::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names, vec!["down", "left", "right", "space", "up"]);
    }

    #[test]
    fn test_empty_name_is_rejected_as_empty() {
        assert_eq!("".parse::<AllowedKey>(), Err(KeyParseError::Empty));
    }

    #[test]
    fn test_escape_is_not_allowed() {
        // Arrange / Act
        let result = "escape".parse::<AllowedKey>();

        // Assert
        assert_eq!(result, Err(KeyParseError::NotAllowed("escape".to_string())));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!("Left".parse::<AllowedKey>().is_err());
        assert!("SPACE".parse::<AllowedKey>().is_err());
    }

    #[test]
    fn test_surrounding_whitespace_is_not_trimmed() {
        assert!(" left".parse::<AllowedKey>().is_err());
        assert!("space\n".parse::<AllowedKey>().is_err());
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(AllowedKey::Space.to_string(), "space");
        assert_eq!(AllowedKey::Down.to_string(), "down");
    }
}
