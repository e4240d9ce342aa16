use alloc::format;

use crate::card::CardSource;
use crate::result::Transition;

use super::{Game, GameState, NEXT_BET_PROMPT, Step};

/// A message received while waiting for hit or stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// `h`: draw another card.
    Hit,
    /// `s`: stop drawing and let the dealer play.
    Stand,
    /// Anything else.
    Unknown,
}

impl Decision {
    /// Classifies `text`, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.eq_ignore_ascii_case("h") {
            Self::Hit
        } else if text.eq_ignore_ascii_case("s") {
            Self::Stand
        } else {
            Self::Unknown
        }
    }
}

impl<C: CardSource> Game<C> {
    /// Handles a message at [`Step::AwaitingDecision`].
    pub(super) fn decide(&self, state: GameState, text: &str) -> Transition {
        match Decision::parse(text) {
            Decision::Hit => self.hit(state),
            Decision::Stand => self.stand(state),
            Decision::Unknown => Transition::keep(
                Step::AwaitingDecision,
                state,
                "Invalid option. Press 'h' to hit or 's' to stand".into(),
            ),
        }
    }

    /// Draws one card for the player and charges the bet on a bust.
    fn hit(&self, mut state: GameState) -> Transition {
        state.player_hand.add_card(self.draw_card());
        let player_value = state.player_hand.value();
        let hand_line = format!("Your hand: {} (Total: {player_value})", state.player_hand);

        if !state.player_hand.is_bust() {
            let reply = format!("{hand_line}\nDo you want to (h)it or (s)tand?");
            return Transition::keep(Step::AwaitingDecision, state, reply);
        }

        state.balance = state.balance.saturating_sub(state.bet);
        log::debug!(
            "player bust at {player_value}, lost {}, balance {}",
            state.bet,
            state.balance
        );

        if state.balance == 0 {
            // The busted state stays with the sender until they restart.
            let reply = format!(
                "{hand_line}\nBust! You lose ${}.\n\nThe gods were not in your favor. You've lost all your money. Type 'restart' to play again with a fresh balance of ${}.",
                state.bet, self.options.starting_balance,
            );
            return Transition::keep(Step::Welcome, state, reply);
        }

        let reply = format!(
            "{hand_line}\nBust! You lose ${}.\nYour new balance is ${}.\n\n{NEXT_BET_PROMPT}",
            state.bet, state.balance,
        );
        Transition::keep(
            Step::AwaitingBet,
            self.start_new_game(state.balance),
            reply,
        )
    }
}
