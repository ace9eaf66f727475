// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator first aggregates the cards into rank and suit frequency
//! tables and then classifies the hand checking categories in priority order,
//! from straight flush down to high card.
//!
//! Each category check picks the ranks that give the strongest five cards
//! hand, so for 6 and 7 cards hands the result is the same as evaluating all
//! the five cards sub-hands and taking the best one.
//!
//! [HandValue] implements [Ord] to compare hands: values compare by
//! [HandRank] first and then by tie-break ranks.
use showdown_cards::Card;

use crate::error::Result;

mod classify;
mod frequency;
pub mod value;

pub use value::{HandRank, HandValue};

/// Evaluates a 5 or more cards hand.
///
/// Fails with [InsufficientCards](crate::EvalError::InsufficientCards) if
/// there are less than five cards.
pub fn evaluate(cards: &[Card]) -> Result<HandValue> {
    let freq = frequency::Frequencies::new(cards)?;
    Ok(classify::classify(&freq))
}
