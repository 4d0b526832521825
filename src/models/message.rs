// file: src/models/message.rs
// description: conversation message model
// reference: internal data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single transcript entry. Transcript order is append order; the timestamp
/// is informational and carries no ordering guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_message_constructors() {
        let user = Message::user("hello");
        let bot = Message::bot("hi there");

        assert_eq!(user.sender, Sender::User);
        assert_eq!(bot.sender, Sender::Bot);
        assert_eq!(user.text, "hello");
    }

    #[test]
    fn test_sender_serialization() {
        let json = serde_json::to_string(&Sender::User).unwrap();
        assert_eq!(json, "\"user\"");
        let json = serde_json::to_string(&Sender::Bot).unwrap();
        assert_eq!(json, "\"bot\"");
    }
}
