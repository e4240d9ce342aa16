//! Error types for game and routing operations.

use alloc::string::String;
use thiserror::Error;

/// Reasons a bet message is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The message does not start with a number.
    #[error("bet is not a number")]
    NotANumber,
    /// The amount is zero or negative.
    #[error("bet must be positive")]
    NotPositive,
    /// The amount is larger than the balance.
    #[error("bet exceeds balance of {balance}")]
    ExceedsBalance {
        /// Balance at the time of the bet.
        balance: usize,
    },
}

/// A raw step number that does not name a conversation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown conversation step {0}")]
pub struct StepError(pub u8);

/// Errors reported by a reply sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// The conversation can no longer be written to.
    #[error("conversation is closed")]
    Closed,
    /// The transport failed to deliver the reply.
    #[error("delivery failed: {0}")]
    Delivery(String),
}
