// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

/// Minimum number of cards needed to make a poker hand.
pub const MIN_CARDS: usize = 5;

/// Errors returned by the hand evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Less than five cards were given to the evaluator.
    #[error("insufficient cards: got {count}, need at least 5")]
    InsufficientCards {
        /// The number of cards given.
        count: usize,
    },
}

/// Evaluator result type.
pub type Result<T> = std::result::Result<T, EvalError>;
