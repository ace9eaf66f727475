// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A deck of 52 cards.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A cards Deck.
///
/// The top of the deck is the last card, dealing pops cards from the top.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals the top card, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        // Indices of the current combination in lexicographic order.
        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&hand);

            // Find the rightmost index that can still move right.
            let Some(pos) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
                break;
            };

            idx[pos] += 1;
            hand[pos] = self.cards[idx[pos]];
            for i in pos + 1..k {
                idx[i] = idx[i - 1] + 1;
                hand[i] = self.cards[idx[i]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_uniqueness() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(cards.len(), Deck::SIZE);
        assert_eq!(deck.deal(), None);
    }

    #[test]
    fn deck_deals_from_top() {
        let mut deck = Deck::default();
        assert_eq!(deck.deal(), Some(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(deck.deal(), Some(Card::new(Rank::King, Suit::Spades)));
        assert_eq!(deck.count(), Deck::SIZE - 2);
    }

    #[test]
    fn deck_seeded_shuffle() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        let c1 = d1.into_iter().collect::<Vec<_>>();
        let c2 = d2.into_iter().collect::<Vec<_>>();
        assert_eq!(c1, c2);
        assert_ne!(c1, Deck::default().into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }

    #[test]
    fn deck_for_each_small() {
        let mut deck = Deck::default();
        while deck.count() > 3 {
            deck.deal();
        }

        let mut count = 0;
        deck.for_each(5, |_| count += 1);
        assert_eq!(count, 0);

        deck.for_each(3, |_| count += 1);
        assert_eq!(count, 1);
    }
}
