//! Outcomes of a round and of a single message.

use alloc::string::String;

use crate::game::{GameState, Step};

/// How a stood hand compares with the dealer's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Dealer busts or the player's total is higher. Pays the bet.
    Win,
    /// The dealer's total is higher. Costs the bet.
    Lose,
    /// Equal totals. No money changes hands.
    Tie,
}

impl RoundOutcome {
    /// Applies the outcome of a round with stake `bet` to `balance`.
    ///
    /// The result never goes below zero.
    #[must_use]
    pub const fn settle(self, balance: usize, bet: usize) -> usize {
        match self {
            Self::Win => balance.saturating_add(bet),
            Self::Lose => balance.saturating_sub(bet),
            Self::Tie => balance,
        }
    }
}

/// The result of feeding one message to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Step the conversation moves to.
    pub step: Step,
    /// Game state to keep for the sender, or `None` when the session ends.
    pub state: Option<GameState>,
    /// Text to send back to the sender.
    pub reply: String,
}

impl Transition {
    /// Moves to `step`, keeping `state`.
    #[must_use]
    pub const fn keep(step: Step, state: GameState, reply: String) -> Self {
        Self {
            step,
            state: Some(state),
            reply,
        }
    }

    /// Ends the session. The sender starts over at [`Step::Welcome`].
    #[must_use]
    pub const fn end(reply: String) -> Self {
        Self {
            step: Step::Welcome,
            state: None,
            reply,
        }
    }
}
