//! Conversation step and per-sender game state.

use crate::error::StepError;
use crate::hand::Hand;

/// Where a sender is in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Step {
    /// Fresh session; the next message gets the welcome and bet prompt.
    #[default]
    Welcome = 0,
    /// Waiting for a bet amount or `quit`.
    AwaitingBet = 1,
    /// Waiting for `h` or `s`.
    AwaitingDecision = 2,
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step as Self
    }
}

impl TryFrom<u8> for Step {
    type Error = StepError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Welcome),
            1 => Ok(Self::AwaitingBet),
            2 => Ok(Self::AwaitingDecision),
            other => Err(StepError(other)),
        }
    }
}

/// Hands, stake and chips for one sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The player's cards.
    pub player_hand: Hand,
    /// The dealer's cards. Only the first is shown before the player stands.
    pub dealer_hand: Hand,
    /// Stake for the current round; 0 until a bet is placed.
    pub bet: usize,
    /// Chips carried across rounds.
    pub balance: usize,
}
