use thiserror::Error;

use crate::transcript::MessageId;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("transcript invariant violated: duplicate message id {0}")]
    IdCollision(MessageId),
    #[error("runtime error: {0}")]
    Runtime(String),
}

pub use crate::Result;
