pub mod config;
pub mod error;
pub mod interfaces;
pub mod logging;
pub mod scheduler;
pub mod session;
pub mod templates;
pub mod transcript;
pub mod ui;
pub mod voice;

pub use error::AssistantError;
pub use session::{Conversation, Rejection, SubmitOutcome};
pub use transcript::{Message, MessageId, Sender, Transcript};

pub type Result<T> = std::result::Result<T, error::AssistantError>;
