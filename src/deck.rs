//! A single 52-card deck that reshoes itself when exhausted.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A deck of cards with a cursor marking the next card to deal.
///
/// The deck owns its random generator, so two decks built from the same seed
/// deal the same sequence. When every card has been dealt, the next
/// [`deal`](Deck::deal) silently rebuilds and reshuffles a fresh 52 cards.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in deal order.
    cards: Vec<Card>,
    /// Index of the next undealt card.
    next: usize,
    /// Number of implicit reshoes performed by `deal`.
    reshoes: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled deck with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            next: 0,
            reshoes: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.reset();
        deck
    }

    /// Creates a deck that deals `cards` in order before reshoeing.
    ///
    /// Meant for tests and replaying recorded rounds: the prescribed cards are
    /// dealt as given, duplicates and short sequences included, so the
    /// 52-unique-cards guarantee only holds from the first reshoe on. After
    /// that the deck behaves like [`Deck::new`].
    #[must_use]
    pub fn stacked(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            next: 0,
            reshoes: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Rebuilds the full 52-card sequence, shuffles it, and rewinds the cursor.
    pub fn reset(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(suit, rank));
            }
        }
        self.shuffle();
        self.next = 0;
    }

    /// Reorders the current card sequence uniformly at random.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Deals the next card, reshoeing first if the deck is exhausted.
    pub fn deal(&mut self) -> Card {
        if self.next >= self.cards.len() {
            self.reset();
            self.reshoes += 1;
            log::debug!("deck exhausted, reshoed ({} so far)", self.reshoes);
        }
        let card = self.cards[self.next];
        self.next += 1;
        card
    }

    /// Returns the number of cards left before the next reshoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }

    /// Returns how many times `deal` had to rebuild the deck.
    #[must_use]
    pub const fn reshoe_count(&self) -> usize {
        self.reshoes
    }

    /// Returns the full card sequence, dealt and undealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn new_deck_has_52_unique_cards() {
        let deck = Deck::new(7);
        assert_eq!(deck.cards().len(), DECK_SIZE);
        assert_eq!(deck.remaining(), DECK_SIZE);
        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn same_seed_deals_same_sequence() {
        let mut a = Deck::new(42);
        let mut b = Deck::new(42);
        for _ in 0..DECK_SIZE * 2 {
            assert_eq!(a.deal(), b.deal());
        }
    }

    #[test]
    fn different_seeds_shuffle_differently() {
        let a = Deck::new(1);
        let b = Deck::new(2);
        assert_ne!(a.cards(), b.cards());
    }

    #[test]
    fn fifty_third_deal_reshoes() {
        let mut deck = Deck::new(3);
        let dealt: HashSet<Card> = (0..DECK_SIZE).map(|_| deck.deal()).collect();
        assert_eq!(dealt.len(), DECK_SIZE);
        assert_eq!(deck.remaining(), 0);
        assert_eq!(deck.reshoe_count(), 0);

        let _ = deck.deal();
        assert_eq!(deck.reshoe_count(), 1);
        assert_eq!(deck.remaining(), DECK_SIZE - 1);
    }

    #[test]
    fn stacked_deck_deals_in_order_then_reshoes() {
        let first = Card::new(Suit::Hearts, Rank::Ace);
        let second = Card::new(Suit::Clubs, Rank::Two);
        let mut deck = Deck::stacked(vec![first, second], 9);

        assert_eq!(deck.deal(), first);
        assert_eq!(deck.deal(), second);
        let _ = deck.deal();
        assert_eq!(deck.reshoe_count(), 1);
        assert_eq!(deck.cards().len(), DECK_SIZE);
    }

    #[test]
    fn empty_stacked_deck_still_deals() {
        let mut deck = Deck::stacked(Vec::new(), 5);
        let _ = deck.deal();
        assert_eq!(deck.remaining(), DECK_SIZE - 1);
    }
}
