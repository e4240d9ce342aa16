//! Routes inbound messages to the engine and replies to the sender.

use alloc::string::String;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::card::{CardSource, RandomCards};
use crate::error::SendError;
use crate::game::{Game, Step};
use crate::session::{MemorySessions, Session, SessionStore};
use crate::sync::Mutex;

/// Content-type tag of plain text messages.
pub const TEXT_CONTENT_TYPE: &str = "text";

/// Kind of content carried by an inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentType {
    /// Plain text. The only kind the router acts on.
    Text,
    /// Anything else, by its transport tag.
    Other(String),
}

impl ContentType {
    /// Maps a transport content-type tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag == TEXT_CONTENT_TYPE {
            Self::Text
        } else {
            Self::Other(tag.into())
        }
    }
}

/// A message delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    /// Address of the sender; the session key.
    pub sender: String,
    /// Message body.
    pub text: String,
    /// Kind of content.
    pub content_type: ContentType,
}

impl InboundEvent {
    /// Creates an event with an explicit content-type tag.
    pub fn new(sender: impl Into<String>, text: impl Into<String>, tag: &str) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
            content_type: ContentType::from_tag(tag),
        }
    }

    /// Creates a plain text event.
    pub fn text(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(sender, text, TEXT_CONTENT_TYPE)
    }
}

/// Delivers replies back to senders.
///
/// Delivery guarantees and retries belong to the implementation. The router
/// logs a failed send and moves on.
pub trait ReplySink {
    /// Sends `text` to `address`.
    ///
    /// # Errors
    ///
    /// Returns an error if the reply could not be handed to the transport.
    fn send(&self, address: &str, text: &str) -> Result<(), SendError>;
}

/// A periodic job started once per process.
pub trait BackgroundTask {
    /// Key-value store handle the task works against.
    type Store: ?Sized;
    /// Messaging handle the task may send through.
    type Messaging: ?Sized;

    /// Starts the task. Must not block.
    fn start(&self, store: &Self::Store, messaging: &Self::Messaging);
}

/// Keeps one session per sender and feeds their messages to a [`Game`].
///
/// Events are handled one at a time, so two messages from the same sender
/// never read the same stale session.
pub struct Router<S = MemorySessions, C = RandomCards> {
    game: Game<C>,
    sessions: S,
    started: AtomicBool,
    dispatch: Mutex<()>,
}

impl<S: SessionStore, C: CardSource> Router<S, C> {
    /// Creates a router over `game` storing sessions in `sessions`.
    #[must_use]
    pub const fn new(game: Game<C>, sessions: S) -> Self {
        Self {
            game,
            sessions,
            started: AtomicBool::new(false),
            dispatch: Mutex::new(()),
        }
    }

    /// Returns the engine.
    pub const fn game(&self) -> &Game<C> {
        &self.game
    }

    /// Returns the session store.
    pub const fn sessions(&self) -> &S {
        &self.sessions
    }

    /// Starts `task` unless a task was already started by this router.
    ///
    /// Returns `true` if this call started it.
    pub fn ensure_started<T: BackgroundTask>(
        &self,
        task: &T,
        store: &T::Store,
        messaging: &T::Messaging,
    ) -> bool {
        if self.started.swap(true, Ordering::SeqCst) {
            return false;
        }
        log::info!("starting background task");
        task.start(store, messaging);
        true
    }

    /// Returns whether the background task has been started.
    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Applies `event` to the sender's session and returns the reply.
    ///
    /// Returns `None`, without touching any session, for non-text content.
    pub fn process(&self, event: &InboundEvent) -> Option<String> {
        if event.content_type != ContentType::Text {
            log::debug!(
                "dropping {:?} message from {}",
                event.content_type,
                event.sender
            );
            return None;
        }

        let _turn = self.dispatch.lock();
        let address = event.sender.as_str();
        let session = self.sessions.get(address).unwrap_or_else(|| {
            log::debug!("new session for {address}");
            Session {
                step: Step::Welcome,
                state: self
                    .game
                    .start_new_game(self.game.options.starting_balance),
            }
        });

        let transition = self
            .game
            .apply_input(session.step, session.state, &event.text);
        log::debug!("{address}: {:?} -> {:?}", session.step, transition.step);

        match transition.state {
            Some(state) => self.sessions.set(
                address,
                Session {
                    step: transition.step,
                    state,
                },
            ),
            None => {
                log::info!("session for {address} ended");
                self.sessions.delete(address);
            }
        }

        Some(transition.reply)
    }

    /// Processes `event` and sends the reply, if any, through `sink`.
    ///
    /// Returns the reply that was sent.
    pub fn handle<R: ReplySink + ?Sized>(&self, event: &InboundEvent, sink: &R) -> Option<String> {
        let reply = self.process(event)?;
        if let Err(err) = sink.send(&event.sender, &reply) {
            log::warn!("failed to reply to {}: {err}", event.sender);
        }
        Some(reply)
    }
}
