//! Game engine: dealing, betting and round resolution for one sender at a time.

use alloc::format;

use crate::card::{CardSource, RandomCards};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::Transition;
use crate::sync::Mutex;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use actions::Decision;
pub use bet::BetInput;
pub use dealer::{DEALER_STANDS_ON, compare_totals};
pub use state::{GameState, Step};

/// Typing this at any step starts over with the starting balance.
pub const RESTART: &str = "restart";

const NEXT_BET_PROMPT: &str = "Place your next bet (or type 'quit' to quit):";

/// A blackjack engine that turns one message into one [`Transition`].
///
/// The engine holds no per-sender data. Callers pass in the sender's step and
/// state and store whatever comes back. Cards come from a [`CardSource`],
/// which defaults to a seeded [`RandomCards`].
pub struct Game<C = RandomCards> {
    /// Game options.
    pub options: GameOptions,
    /// Source of card values.
    cards: Mutex<C>,
}

impl Game {
    /// Creates a new game drawing random cards from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjchat::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// let state = game.start_new_game(1000);
    /// assert_eq!(state.player_hand.len(), 2);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_cards(options, RandomCards::new(seed))
    }
}

impl<C: CardSource> Game<C> {
    /// Creates a new game drawing from `cards`.
    #[must_use]
    pub const fn with_cards(options: GameOptions, cards: C) -> Self {
        Self {
            options,
            cards: Mutex::new(cards),
        }
    }

    /// Replaces the card source.
    pub fn set_cards(&mut self, cards: C) {
        *self.cards.get_mut() = cards;
    }

    /// Draws a card value in `MIN_CARD..=MAX_CARD`.
    pub fn draw_card(&self) -> u8 {
        self.cards.lock().draw_card()
    }

    /// Deals a fresh round: two player cards, one dealer card, no bet.
    pub fn start_new_game(&self, balance: usize) -> GameState {
        let mut player_hand = Hand::new();
        player_hand.add_card(self.draw_card());
        player_hand.add_card(self.draw_card());

        let mut dealer_hand = Hand::new();
        dealer_hand.add_card(self.draw_card());

        GameState {
            player_hand,
            dealer_hand,
            bet: 0,
            balance,
        }
    }

    /// Applies one message from a sender.
    ///
    /// `restart` (any case) is checked first and resets the sender to a fresh
    /// deal with the starting balance at [`Step::Welcome`]. Every input at
    /// every step produces a reply.
    pub fn apply_input(&self, step: Step, state: GameState, text: &str) -> Transition {
        let text = text.trim();
        let (step, state) = if text.eq_ignore_ascii_case(RESTART) {
            log::debug!("restart requested at {step:?}");
            (
                Step::Welcome,
                self.start_new_game(self.options.starting_balance),
            )
        } else {
            (step, state)
        };

        match step {
            Step::Welcome => self.welcome(state),
            Step::AwaitingBet => self.take_bet(state, text),
            Step::AwaitingDecision => self.decide(state, text),
        }
    }

    /// Handles any message at [`Step::Welcome`].
    fn welcome(&self, state: GameState) -> Transition {
        let reply = format!(
            "Welcome to blackjack! Your balance is ${}.\n Place your bet (or type 'quit' to quit):",
            state.balance
        );
        Transition::keep(Step::AwaitingBet, state, reply)
    }
}
