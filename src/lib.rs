//! A conversational blackjack engine for one-to-one messaging bots, with
//! optional `no_std` support.
//!
//! A [`Router`] receives inbound text messages from a sender address, keeps a
//! per-sender [`Session`] (conversation [`Step`] plus [`GameState`]) in a
//! [`SessionStore`], hands the message to the [`Game`] engine and sends the
//! reply back through a [`ReplySink`].
//!
//! # Example
//!
//! ```
//! use bjchat::{Game, GameOptions, Step};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let state = game.start_new_game(1000);
//! let transition = game.apply_input(Step::Welcome, state, "hi");
//! assert_eq!(transition.step, Step::AwaitingBet);
//! assert!(transition.reply.starts_with("Welcome to blackjack!"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod config;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod router;
pub mod session;
mod sync;

// Re-export main types
pub use card::{CardSource, MAX_CARD, MIN_CARD, RandomCards};
pub use error::{BetError, SendError, StepError};
pub use game::{Game, GameState, Step};
pub use hand::{BUST_LIMIT, Hand, hand_value};
pub use options::GameOptions;
pub use result::{RoundOutcome, Transition};
pub use router::{
    BackgroundTask, ContentType, InboundEvent, ReplySink, Router, TEXT_CONTENT_TYPE,
};
pub use session::{MemorySessions, Session, SessionStore};
