use alloc::format;
use alloc::string::String;

use crate::card::CardSource;
use crate::hand::BUST_LIMIT;
use crate::result::{RoundOutcome, Transition};

use super::{Game, GameState, NEXT_BET_PROMPT, Step};

/// The dealer draws until reaching at least this total.
pub const DEALER_STANDS_ON: u32 = 17;

/// Compares final totals. A dealer bust wins for the player regardless of
/// the player's own total.
#[must_use]
pub const fn compare_totals(player_value: u32, dealer_value: u32) -> RoundOutcome {
    if dealer_value > BUST_LIMIT || player_value > dealer_value {
        RoundOutcome::Win
    } else if player_value < dealer_value {
        RoundOutcome::Lose
    } else {
        RoundOutcome::Tie
    }
}

impl<C: CardSource> Game<C> {
    /// Dealer plays out their hand, drawing while the total is below
    /// [`DEALER_STANDS_ON`].
    ///
    /// Returns the number of cards drawn.
    pub(super) fn dealer_play(&self, state: &mut GameState) -> usize {
        let mut drawn = 0;
        while state.dealer_hand.value() < DEALER_STANDS_ON {
            state.dealer_hand.add_card(self.draw_card());
            drawn += 1;
        }
        drawn
    }

    /// Player stands: the dealer finishes and the round is settled.
    pub(super) fn stand(&self, mut state: GameState) -> Transition {
        let drawn = self.dealer_play(&mut state);
        let player_value = state.player_hand.value();
        let dealer_value = state.dealer_hand.value();
        let outcome = compare_totals(player_value, dealer_value);
        state.balance = outcome.settle(state.balance, state.bet);
        log::debug!(
            "dealer drew {drawn} card(s): player {player_value} vs dealer {dealer_value}, {outcome:?}, balance {}",
            state.balance
        );

        if state.balance == 0 {
            log::info!("player is out of chips, session ends");
            return Transition::end(
                "The gods were not in your favor. Thanks for playing, till next time. Type 'restart' to restart the game.".into(),
            );
        }

        let outcome_line: String = match outcome {
            RoundOutcome::Win => format!("You win ${}!", state.bet),
            RoundOutcome::Lose => format!("You lose ${}", state.bet),
            RoundOutcome::Tie => "It's a tie.".into(),
        };
        let reply = format!(
            "Your hand: {} (Total: {player_value}) \nDealer's hand: {} (Total: {dealer_value})\n{outcome_line}\nYour new balance is ${}.\n\n{NEXT_BET_PROMPT}",
            state.player_hand, state.dealer_hand, state.balance,
        );
        Transition::keep(
            Step::AwaitingBet,
            self.start_new_game(state.balance),
            reply,
        )
    }
}
