// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator counts ranks
//! and suits once and then checks hand categories from the strongest to the
//! weakest, the first match wins and carries the tie-break ranks of the best
//! five cards in the hand.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use showdown_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]).unwrap();
//! let v2 = HandValue::eval(&cards[5..]).unwrap();
//! assert_eq!(v1.rank(), HandRank::StraightFlush);
//! assert!(v2 > v1);
//! ```
//!
//! Hands with less than five cards cannot be evaluated:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = Deck::default().into_iter().take(4).collect::<Vec<_>>();
//! assert_eq!(
//!     evaluate(&cards),
//!     Err(EvalError::InsufficientCards { count: 4 })
//! );
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub mod eval;
pub mod hand;
pub mod showdown;

#[cfg(test)]
mod testing;

pub use error::{EvalError, Result};
pub use eval::{HandRank, HandValue, evaluate};
pub use hand::PlayerHand;

// Reexport cards types.
pub use showdown_cards::{Card, CardError, Deck, Rank, Suit};
