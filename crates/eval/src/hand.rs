// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player hand types.
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use showdown_cards::Card;

use crate::{HandValue, error::Result};

/// The cards held by a player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHand {
    cards: Vec<Card>,
}

impl PlayerHand {
    /// Creates an empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives a card to this hand.
    pub fn give_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the card at the given index, returns `None` if the index is out
    /// of range.
    pub fn remove_card(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// The cards in this hand in the order they were given.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in this hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if this hand has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards sorted by rank, highest first.
    pub fn sorted(&self) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.sort_by_key(|c| Reverse(c.rank()));
        cards
    }

    /// Evaluates the best hand using this hand cards and the table cards.
    pub fn best_hand(&self, table: &[Card]) -> Result<HandValue> {
        let mut cards = Vec::with_capacity(self.cards.len() + table.len());
        cards.extend_from_slice(&self.cards);
        cards.extend_from_slice(table);
        HandValue::eval(&cards)
    }
}

impl From<Vec<Card>> for PlayerHand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
