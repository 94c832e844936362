#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::fmt;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use uuid::Uuid;

/// Stable per-profile identifier correlating every message from this user
/// with a single conversation on the remote agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: &str) -> SessionId {
        return SessionId(id.to_string());
    }

    pub fn generate() -> SessionId {
        return SessionId(Uuid::new_v4().hyphenated().to_string());
    }

    /// Checks for the lowercase hyphenated UUID v4 shape
    /// `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx` where `y` is one of 8, 9, a, b.
    pub fn is_valid(id: &str) -> bool {
        let groups = id.split('-').collect::<Vec<&str>>();
        if groups.len() != 5 {
            return false;
        }

        let lengths = [8, 4, 4, 4, 12];
        for (group, len) in groups.iter().zip(lengths) {
            if group.len() != len {
                return false;
            }
            if !group
                .chars()
                .all(|c| return c.is_ascii_digit() || ('a'..='f').contains(&c))
            {
                return false;
            }
        }

        if !groups[2].starts_with('4') {
            return false;
        }

        return matches!(groups[3].chars().next(), Some('8' | '9' | 'a' | 'b'));
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
