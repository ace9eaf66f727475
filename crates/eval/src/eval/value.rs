// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand values and categories.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Card, Rank};

use crate::error::Result;

/// A poker hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// Returns all categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of the best five cards in a hand.
///
/// A value is a hand category with the tie-break ranks for that category,
/// highest first:
///
/// | Category        | Tie-break ranks                |
/// |-----------------|--------------------------------|
/// | Straight flush  | high card (5 for A-2-3-4-5)    |
/// | Four of a kind  | quads, kicker                  |
/// | Full house      | trips, pair                    |
/// | Flush           | five flush cards               |
/// | Straight        | high card (5 for A-2-3-4-5)    |
/// | Three of a kind | trips, two kickers             |
/// | Two pair        | high pair, low pair, kicker    |
/// | One pair        | pair, three kickers            |
/// | High card       | five cards                     |
///
/// Values compare by category and then by tie-break ranks, equal values
/// split the pot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    // Field order defines the derived ordering.
    rank: HandRank,
    ranks: Vec<Rank>,
}

impl HandValue {
    /// Evaluates a 5 or more cards hand.
    pub fn eval(cards: &[Card]) -> Result<Self> {
        super::evaluate(cards)
    }

    pub(crate) fn new(rank: HandRank, ranks: Vec<Rank>) -> Self {
        Self { rank, ranks }
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie-break ranks, highest first.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.rank)?;
        for (idx, rank) in self.ranks.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{rank}")?;
        }
        write!(f, "]")
    }
}
