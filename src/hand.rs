//! Hand representation and blackjack valuation.

use crate::card::Card;

/// Placeholder shown in place of a face-down card.
pub const HIDDEN_CARD: &str = "??";

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.rank.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// An ordered sequence of cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in deal order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Empties the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces count 11 until the total would exceed 21, at which point they are
    /// re-counted as 1 one at a time. The result may still exceed 21.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural: exactly two cards worth 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Renders the hand as space-separated cards.
    ///
    /// With `hide_first`, the first card is shown as [`HIDDEN_CARD`].
    #[must_use]
    pub fn render(&self, hide_first: bool) -> String {
        self.render_with(hide_first, ToString::to_string)
    }

    /// Renders the hand like [`render`](Hand::render), formatting each visible
    /// card with `format_card`.
    #[must_use]
    pub fn render_with<F>(&self, hide_first: bool, format_card: F) -> String
    where
        F: Fn(&Card) -> String,
    {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if index == 0 && hide_first {
                    HIDDEN_CARD.to_string()
                } else {
                    format_card(card)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add(Card::new(Suit::Spades, rank));
        }
        hand
    }

    #[test]
    fn aceless_hands_sum_face_values() {
        for &a in &Rank::ALL[..12] {
            for &b in &Rank::ALL[..12] {
                for &c in &Rank::ALL[..12] {
                    let expected = a.value() + b.value() + c.value();
                    assert_eq!(hand(&[a, b, c]).value(), expected);
                }
            }
        }
    }

    #[test]
    fn aces_reduce_one_at_a_time() {
        assert_eq!(hand(&[Rank::Ace, Rank::Ace, Rank::Nine]).value(), 21);
        assert_eq!(hand(&[Rank::Ace, Rank::Ace]).value(), 12);
        assert_eq!(hand(&[Rank::Ace, Rank::Six]).value(), 17);
        assert_eq!(hand(&[Rank::Ace, Rank::Six, Rank::Ten]).value(), 17);
        assert_eq!(
            hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]).value(),
            14
        );
    }

    #[test]
    fn ace_hands_never_bust_when_reduction_suffices() {
        for &other in &Rank::ALL {
            for aces in 1..=4 {
                let mut ranks = vec![Rank::Ace; aces];
                ranks.push(other);
                ranks.push(other);
                let hand = hand(&ranks);
                let all_low = aces as u8 + 2 * other.value() - if other == Rank::Ace { 20 } else { 0 };
                if all_low <= 21 {
                    assert!(hand.value() <= 21, "{ranks:?} valued {}", hand.value());
                }
            }
        }
    }

    #[test]
    fn soft_detection() {
        assert!(hand(&[Rank::Ace, Rank::Six]).is_soft());
        assert!(!hand(&[Rank::Ace, Rank::Six, Rank::Ten]).is_soft());
        assert!(!hand(&[Rank::Ten, Rank::Seven]).is_soft());
    }

    #[test]
    fn blackjack_requires_two_cards() {
        assert!(hand(&[Rank::Ace, Rank::King]).is_blackjack());
        assert!(hand(&[Rank::Ten, Rank::Ace]).is_blackjack());
        assert!(!hand(&[Rank::Seven, Rank::Seven, Rank::Seven]).is_blackjack());
        assert_eq!(hand(&[Rank::Seven, Rank::Seven, Rank::Seven]).value(), 21);
    }

    #[test]
    fn bust_over_21() {
        assert!(hand(&[Rank::Ten, Rank::Queen, Rank::Two]).is_bust());
        assert!(!hand(&[Rank::Ten, Rank::Queen, Rank::Ace]).is_bust());
    }

    #[test]
    fn render_masks_first_card() {
        let mut hand = Hand::new();
        hand.add(Card::new(Suit::Hearts, Rank::King));
        hand.add(Card::new(Suit::Clubs, Rank::Seven));
        assert_eq!(hand.render(false), "K♥ 7♣");
        assert_eq!(hand.render(true), "?? 7♣");
        assert_eq!(Hand::new().render(true), "");
    }

    #[test]
    fn clear_empties_the_hand() {
        let mut hand = hand(&[Rank::Two, Rank::Three]);
        assert_eq!(hand.len(), 2);
        hand.clear();
        assert!(hand.is_empty());
        assert_eq!(hand.value(), 0);
    }
}
