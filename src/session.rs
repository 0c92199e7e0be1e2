use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::interfaces::voice::SpeechCapability;
use crate::scheduler::{PendingReply, ResponseScheduler};
use crate::templates;
use crate::transcript::{Message, MessageIdGen, Sender, Transcript};
use crate::voice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(Rejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Blank or whitespace-only input. Nothing is appended.
    Empty,
    /// A simulated reply is already pending. At most one reply is outstanding
    /// at a time; concurrent submissions are not queued.
    Busy,
}

/// One conversation session: the transcript, the busy gate, the listening
/// toggle, and the wiring between them. Construct one per active conversation;
/// there is no shared global state.
///
/// Two states: idle (no pending reply) and awaiting-reply. `submit` moves
/// idle → awaiting-reply and `await_reply` moves back. The busy gate plus the
/// append-only transcript give the ordering guarantee that each accepted
/// submission lands as a user message immediately followed by its assistant
/// reply, with nothing in between.
pub struct Conversation {
    transcript: Transcript,
    ids: MessageIdGen,
    rng: StdRng,
    scheduler: ResponseScheduler,
    capability: Arc<dyn SpeechCapability>,
    pending: Option<PendingReply>,
    listening: bool,
}

impl Conversation {
    /// Seeds the transcript with the configured assistant greeting, so a
    /// fresh session always renders one assistant message.
    pub fn new(config: &Config, capability: Arc<dyn SpeechCapability>, rng: StdRng) -> Result<Self> {
        let mut ids = MessageIdGen::new();
        let mut transcript = Transcript::new();
        transcript.append(Message::new(
            ids.next(),
            Sender::Assistant,
            config.greeting.clone(),
        ))?;
        Ok(Self {
            transcript,
            ids,
            rng,
            scheduler: ResponseScheduler::new(config.reply_delay_min_ms..config.reply_delay_max_ms),
            capability,
            pending: None,
            listening: false,
        })
    }

    /// Accepts free-text input from the text field or a voice collaborator.
    /// On acceptance the user message is appended synchronously and the
    /// templated reply is scheduled on a randomized delay; the session is busy
    /// until that reply is collected with [`await_reply`](Self::await_reply).
    pub fn submit(&mut self, text: &str) -> Result<SubmitOutcome> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("submission rejected: empty input");
            return Ok(SubmitOutcome::Rejected(Rejection::Empty));
        }
        if self.pending.is_some() {
            debug!("submission rejected: a reply is already pending");
            return Ok(SubmitOutcome::Rejected(Rejection::Busy));
        }

        self.transcript
            .append(Message::new(self.ids.next(), Sender::User, trimmed))?;

        let delay = self.scheduler.draw_delay(&mut self.rng);
        let mut reply_rng = StdRng::seed_from_u64(self.rng.random());
        let query = trimmed.to_string();
        info!(delay_ms = delay.as_millis() as u64, "reply scheduled");
        self.pending = Some(
            self.scheduler
                .schedule(delay, move || templates::generate(&query, &mut reply_rng)),
        );
        Ok(SubmitOutcome::Accepted)
    }

    /// Waits for the pending reply, appends it as an assistant message, and
    /// clears the busy state. `Ok(None)` when no reply is pending.
    pub async fn await_reply(&mut self) -> Result<Option<&Message>> {
        let Some(pending) = self.pending.take() else {
            return Ok(None);
        };
        let Some(content) = pending.recv().await else {
            debug!("pending reply discarded before delivery");
            return Ok(None);
        };
        self.transcript
            .append(Message::new(self.ids.next(), Sender::Assistant, content))?;
        Ok(self.transcript.last())
    }

    /// Flips the listening state if the host exposes speech recognition;
    /// otherwise leaves it unchanged. Independent of the busy gate.
    pub fn toggle_voice(&mut self) -> bool {
        self.listening = voice::toggle_listening(self.listening, self.capability.available());
        self.listening
    }

    pub fn messages(&self) -> &[Message] {
        self.transcript.all()
    }

    pub fn busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn listening(&self) -> bool {
        self.listening
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voice::{SpeechAvailable, SpeechUnavailable};

    fn conversation(capability: Arc<dyn SpeechCapability>) -> Conversation {
        Conversation::new(&Config::default(), capability, StdRng::seed_from_u64(1)).unwrap()
    }

    #[tokio::test]
    async fn fresh_session_has_one_assistant_greeting() {
        let convo = conversation(Arc::new(SpeechUnavailable));
        assert_eq!(convo.messages().len(), 1);
        assert_eq!(convo.messages()[0].sender, Sender::Assistant);
        assert!(!convo.busy());
        assert!(!convo.listening());
    }

    #[tokio::test]
    async fn whitespace_submissions_leave_the_session_untouched() {
        let mut convo = conversation(Arc::new(SpeechUnavailable));
        for input in ["", "   ", "\t\n"] {
            let outcome = convo.submit(input).unwrap();
            assert_eq!(outcome, SubmitOutcome::Rejected(Rejection::Empty));
        }
        assert_eq!(convo.messages().len(), 1);
        assert!(!convo.busy());
    }

    #[tokio::test]
    async fn submitted_text_is_trimmed_before_append() {
        let mut convo = conversation(Arc::new(SpeechUnavailable));
        convo.submit("  show salinity  \n").unwrap();
        assert_eq!(convo.messages()[1].content, "show salinity");
    }

    #[tokio::test]
    async fn voice_toggle_respects_the_capability_probe() {
        let mut convo = conversation(Arc::new(SpeechUnavailable));
        assert!(!convo.toggle_voice());
        assert!(!convo.listening());

        let mut convo = conversation(Arc::new(SpeechAvailable));
        assert!(convo.toggle_voice());
        assert!(!convo.toggle_voice());
    }

    #[tokio::test]
    async fn voice_toggle_stays_responsive_while_busy() {
        let mut convo = conversation(Arc::new(SpeechAvailable));
        convo.submit("map float coverage").unwrap();
        assert!(convo.busy());
        assert!(convo.toggle_voice());
        assert!(convo.busy());
    }
}
