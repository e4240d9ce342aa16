use alloc::format;

use crate::card::CardSource;
use crate::error::BetError;
use crate::result::Transition;

use super::{Game, GameState, Step};

const QUIT: &str = "quit";

/// A message received while waiting for a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetInput {
    /// The sender wants to leave.
    Quit,
    /// A stake within the balance.
    Bet(usize),
    /// Anything else.
    Invalid(BetError),
}

impl BetInput {
    /// Classifies `text` against the current `balance`. Never fails.
    ///
    /// Amounts are read the way a chat user types them: leading whitespace
    /// and an optional sign are accepted, and anything after the digits is
    /// ignored, so `"50 chips"` bets 50.
    #[must_use]
    pub fn parse(text: &str, balance: usize) -> Self {
        if text.trim().eq_ignore_ascii_case(QUIT) {
            return Self::Quit;
        }

        match leading_amount(text) {
            Err(err) => Self::Invalid(err),
            Ok(amount) if amount > balance => Self::Invalid(BetError::ExceedsBalance { balance }),
            Ok(amount) => Self::Bet(amount),
        }
    }
}

/// Reads the integer at the start of `text`.
fn leading_amount(text: &str) -> Result<usize, BetError> {
    let text = text.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return Err(BetError::NotANumber);
    }

    let is_zero = digits.bytes().all(|b| b == b'0');
    if negative || is_zero {
        return Err(BetError::NotPositive);
    }

    // Only overflow can fail here; such an amount exceeds any balance.
    Ok(digits.parse().unwrap_or(usize::MAX))
}

impl<C: CardSource> Game<C> {
    /// Handles a message at [`Step::AwaitingBet`].
    pub(super) fn take_bet(&self, mut state: GameState, text: &str) -> Transition {
        match BetInput::parse(text, state.balance) {
            BetInput::Quit => {
                log::info!("player quit with balance {}", state.balance);
                Transition::end("Thanks for playing, till next time.".into())
            }
            BetInput::Invalid(err) => {
                log::debug!("rejected bet {text:?}: {err}");
                let reply = format!(
                    "Invalid bet. Please enter number between 1 and {}:",
                    state.balance
                );
                Transition::keep(Step::AwaitingBet, state, reply)
            }
            BetInput::Bet(amount) => {
                state.bet = amount;
                let reply = format!(
                    "Your bet: ${amount}\n Your hand: {} (Total: {})\nDealer's up card: {}\n\nDo you want to (h)it or (s)tand?",
                    state.player_hand,
                    state.player_hand.value(),
                    state.dealer_hand.up_card().unwrap_or_default(),
                );
                Transition::keep(Step::AwaitingDecision, state, reply)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_is_case_insensitive() {
        assert_eq!(BetInput::parse("quit", 100), BetInput::Quit);
        assert_eq!(BetInput::parse("QuIt", 100), BetInput::Quit);
        assert_eq!(BetInput::parse(" quit\n", 100), BetInput::Quit);
    }

    #[test]
    fn amounts_within_balance_are_bets() {
        assert_eq!(BetInput::parse("1", 100), BetInput::Bet(1));
        assert_eq!(BetInput::parse("100", 100), BetInput::Bet(100));
        assert_eq!(BetInput::parse("  +25", 100), BetInput::Bet(25));
        assert_eq!(BetInput::parse("50 chips", 100), BetInput::Bet(50));
        assert_eq!(BetInput::parse("007", 100), BetInput::Bet(7));
    }

    #[test]
    fn garbage_is_not_a_number() {
        for text in ["", "abc", "-", "$50", "h"] {
            assert_eq!(
                BetInput::parse(text, 100),
                BetInput::Invalid(BetError::NotANumber),
                "{text:?}"
            );
        }
    }

    #[test]
    fn zero_and_negative_are_rejected() {
        for text in ["0", "000", "-5", "-0"] {
            assert_eq!(
                BetInput::parse(text, 100),
                BetInput::Invalid(BetError::NotPositive),
                "{text:?}"
            );
        }
    }

    #[test]
    fn amounts_above_balance_are_rejected() {
        assert_eq!(
            BetInput::parse("101", 100),
            BetInput::Invalid(BetError::ExceedsBalance { balance: 100 })
        );
        assert!(matches!(
            BetInput::parse("99999999999999999999999999", 100),
            BetInput::Invalid(BetError::ExceedsBalance { .. })
        ));
        assert_eq!(
            BetInput::parse("1", 0),
            BetInput::Invalid(BetError::ExceedsBalance { balance: 0 })
        );
    }
}
