use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AssistantError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out session-unique message ids. A plain monotonic counter: a user
/// message and the assistant reply created in the same instant can never
/// collide, which a timestamp-derived id would not guarantee.
#[derive(Debug, Default)]
pub struct MessageIdGen {
    next: u64,
}

impl MessageIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> MessageId {
        let id = MessageId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(id: MessageId, sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    /// Hour:minute display form of the timestamp. Display only; ordering and
    /// equality never look at timestamps.
    pub fn clock_time(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Append-only message sequence for one conversation session. No update or
/// delete exists, so a viewport only ever has to render appended tail entries.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message, rejecting a duplicate id without touching the
    /// existing sequence. Unreachable under `MessageIdGen`, kept as the
    /// invariant check for a programming defect upstream.
    pub fn append(&mut self, message: Message) -> Result<()> {
        if self.messages.iter().any(|m| m.id == message.id) {
            return Err(AssistantError::IdCollision(message.id));
        }
        self.messages.push(message);
        Ok(())
    }

    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
