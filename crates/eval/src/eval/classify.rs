// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand category classifier.
use super::{
    frequency::{Frequencies, straight_high, top_ranks},
    value::{HandRank, HandValue},
};

/// Classifies a hand checking categories from the strongest to the weakest.
pub fn classify(freq: &Frequencies) -> HandValue {
    straight_flush(freq)
        .or_else(|| four_of_a_kind(freq))
        .or_else(|| full_house(freq))
        .or_else(|| flush(freq))
        .or_else(|| straight(freq))
        .or_else(|| three_of_a_kind(freq))
        .or_else(|| two_pair(freq))
        .or_else(|| one_pair(freq))
        .unwrap_or_else(|| high_card(freq))
}

fn straight_flush(freq: &Frequencies) -> Option<HandValue> {
    freq.flush_masks()
        .filter_map(straight_high)
        .max()
        .map(|high| HandValue::new(HandRank::StraightFlush, vec![high]))
}

fn four_of_a_kind(freq: &Frequencies) -> Option<HandValue> {
    let quads = freq.ranks_with(4).next()?;

    let mut ranks = vec![quads];
    ranks.extend(freq.kickers(&[quads], 1));
    Some(HandValue::new(HandRank::FourOfAKind, ranks))
}

fn full_house(freq: &Frequencies) -> Option<HandValue> {
    // With two trips the lower one makes the pair.
    let trips = freq.ranks_with(3).next()?;
    let pair = freq.ranks_with(2).find(|&r| r != trips)?;
    Some(HandValue::new(HandRank::FullHouse, vec![trips, pair]))
}

fn flush(freq: &Frequencies) -> Option<HandValue> {
    freq.flush_masks()
        .map(|mask| top_ranks(mask, 5).collect::<Vec<_>>())
        .max()
        .map(|ranks| HandValue::new(HandRank::Flush, ranks))
}

fn straight(freq: &Frequencies) -> Option<HandValue> {
    straight_high(freq.rank_mask()).map(|high| HandValue::new(HandRank::Straight, vec![high]))
}

fn three_of_a_kind(freq: &Frequencies) -> Option<HandValue> {
    let trips = freq.ranks_with(3).next()?;

    let mut ranks = vec![trips];
    ranks.extend(freq.kickers(&[trips], 2));
    Some(HandValue::new(HandRank::ThreeOfAKind, ranks))
}

fn two_pair(freq: &Frequencies) -> Option<HandValue> {
    // A third pair can only play as the kicker.
    let mut pairs = freq.ranks_with(2);
    let high = pairs.next()?;
    let low = pairs.next()?;

    let mut ranks = vec![high, low];
    ranks.extend(freq.kickers(&[high, low], 1));
    Some(HandValue::new(HandRank::TwoPair, ranks))
}

fn one_pair(freq: &Frequencies) -> Option<HandValue> {
    let pair = freq.ranks_with(2).next()?;

    let mut ranks = vec![pair];
    ranks.extend(freq.kickers(&[pair], 3));
    Some(HandValue::new(HandRank::OnePair, ranks))
}

fn high_card(freq: &Frequencies) -> HandValue {
    HandValue::new(HandRank::HighCard, freq.kickers(&[], 5).collect())
}
