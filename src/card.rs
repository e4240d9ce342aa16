//! Card values and the random source they are drawn from.
//!
//! Cards are plain integers in `MIN_CARD..=MAX_CARD`. There is no deck: every
//! draw is independent and uniformly distributed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Lowest card value.
pub const MIN_CARD: u8 = 1;

/// Highest card value.
pub const MAX_CARD: u8 = 10;

/// A source of card values.
///
/// [`RandomCards`] is the production source. Any `FnMut() -> u8` closure is
/// also a source, which lets callers script exact draws:
///
/// ```
/// use bjchat::CardSource;
///
/// let mut draws = [10, 7].into_iter();
/// let mut source = move || draws.next().unwrap_or(2);
/// assert_eq!(source.draw_card(), 10);
/// assert_eq!(source.draw_card(), 7);
/// assert_eq!(source.draw_card(), 2);
/// ```
pub trait CardSource {
    /// Draws the next card value.
    fn draw_card(&mut self) -> u8;
}

impl<F> CardSource for F
where
    F: FnMut() -> u8,
{
    fn draw_card(&mut self) -> u8 {
        self()
    }
}

/// Uniform card values in `MIN_CARD..=MAX_CARD` from a seeded `ChaCha8` stream.
#[derive(Debug, Clone)]
pub struct RandomCards {
    rng: ChaCha8Rng,
}

impl RandomCards {
    /// Creates a source seeded with `seed`. Equal seeds yield equal draws.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl CardSource for RandomCards {
    fn draw_card(&mut self) -> u8 {
        self.rng.random_range(MIN_CARD..=MAX_CARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_cards_stay_in_range() {
        let mut cards = RandomCards::new(7);
        for _ in 0..1_000 {
            let card = cards.draw_card();
            assert!((MIN_CARD..=MAX_CARD).contains(&card));
        }
    }

    #[test]
    fn equal_seeds_draw_equal_sequences() {
        let mut a = RandomCards::new(99);
        let mut b = RandomCards::new(99);
        for _ in 0..32 {
            assert_eq!(a.draw_card(), b.draw_card());
        }
    }

    #[test]
    fn every_value_eventually_appears() {
        let mut cards = RandomCards::new(3);
        let mut seen = [false; MAX_CARD as usize + 1];
        for _ in 0..2_000 {
            seen[cards.draw_card() as usize] = true;
        }
        assert!(seen[MIN_CARD as usize..].iter().all(|&s| s));
    }
}
