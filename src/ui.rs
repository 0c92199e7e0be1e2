//! Terminal transcript viewport. Renders messages appended to the session
//! transcript; because the store is append-only, staying pinned to the newest
//! entry only ever means drawing the unseen tail.

use crate::transcript::{Message, Sender};

/// Suggested queries shown at session start.
pub const SAMPLE_QUERIES: &[&str] = &[
    "Show me temperature profiles from the Pacific Ocean",
    "Compare salinity data between 2020 and 2023",
    "Find anomalies in recent float data",
    "Generate a report on North Atlantic conditions",
];

#[derive(Debug, Default)]
pub struct TranscriptViewport {
    rendered: usize,
}

impl TranscriptViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints every message not yet shown, in append order.
    pub fn render_new(&mut self, messages: &[Message]) {
        for message in &messages[self.rendered..] {
            print_message(message);
        }
        self.rendered = messages.len();
    }

    pub fn composing(&self) {
        println!("assistant is composing...");
    }

    pub fn hints(&self) {
        println!("Try asking:");
        for query in SAMPLE_QUERIES {
            println!("  - {query}");
        }
        println!();
    }
}

fn print_message(message: &Message) {
    let label = match message.sender {
        Sender::User => "you",
        Sender::Assistant => "assistant",
    };
    let mut lines = message.content.lines();
    if let Some(first) = lines.next() {
        println!("[{}] {label}: {first}", message.clock_time());
    }
    // Continuation lines keep the original bullet formatting, indented under
    // the sender label.
    for line in lines {
        println!("    {line}");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::MessageId;

    #[test]
    fn viewport_tracks_the_rendered_tail() {
        let mut viewport = TranscriptViewport::new();
        let messages = vec![
            Message::new(MessageId(0), Sender::Assistant, "hello"),
            Message::new(MessageId(1), Sender::User, "hi"),
        ];
        viewport.render_new(&messages);
        assert_eq!(viewport.rendered, 2);
        viewport.render_new(&messages);
        assert_eq!(viewport.rendered, 2);
    }
}
