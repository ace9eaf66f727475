// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Test helpers.
use crate::{Card, Rank, Suit};

/// Builds cards from a string like "AS KD TC 5H".
pub fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace()
        .map(|c| {
            let mut chars = c.chars();
            let rank = match chars.next() {
                Some('2') => Rank::Deuce,
                Some('3') => Rank::Trey,
                Some('4') => Rank::Four,
                Some('5') => Rank::Five,
                Some('6') => Rank::Six,
                Some('7') => Rank::Seven,
                Some('8') => Rank::Eight,
                Some('9') => Rank::Nine,
                Some('T') => Rank::Ten,
                Some('J') => Rank::Jack,
                Some('Q') => Rank::Queen,
                Some('K') => Rank::King,
                Some('A') => Rank::Ace,
                r => panic!("Invalid rank {r:?} in {c}"),
            };
            let suit = match chars.next() {
                Some('C') => Suit::Clubs,
                Some('D') => Suit::Diamonds,
                Some('H') => Suit::Hearts,
                Some('S') => Suit::Spades,
                s => panic!("Invalid suit {s:?} in {c}"),
            };
            Card::new(rank, suit)
        })
        .collect()
}

/// Builds a ranks list from a string like "A K 5".
pub fn ranks(s: &str) -> Vec<Rank> {
    s.split_whitespace()
        .map(|r| cards(&format!("{r}C"))[0].rank())
        .collect()
}
