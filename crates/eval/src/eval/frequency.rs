// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit frequency tables.
use showdown_cards::{Card, Rank};

use crate::error::{EvalError, MIN_CARDS, Result};

/// Bit used to mirror the ace as a low card for the A-2-3-4-5 straight.
const ACE_LOW_BIT: u16 = 1 << 1;

/// Number of cards with the same suit needed for a flush.
const FLUSH_LEN: u8 = 5;

/// Rank and suit counts for a set of cards.
///
/// Rank masks have bit `r` set for each rank value `r` in the cards, aces
/// also set bit 1.
#[derive(Debug, Default)]
pub struct Frequencies {
    rank_counts: [u8; 15],
    rank_mask: u16,
    suit_counts: [u8; 4],
    suit_masks: [u16; 4],
}

impl Frequencies {
    /// Counts the cards ranks and suits.
    pub fn new(cards: &[Card]) -> Result<Self> {
        if cards.len() < MIN_CARDS {
            return Err(EvalError::InsufficientCards { count: cards.len() });
        }

        let mut freq = Self::default();
        for card in cards {
            let rank = card.rank();
            let suit = card.suit().index();
            let bit = rank_bit(rank);

            let count = &mut freq.rank_counts[rank.value() as usize];
            *count = count.saturating_add(1);
            freq.rank_mask |= bit;

            freq.suit_counts[suit] = freq.suit_counts[suit].saturating_add(1);
            freq.suit_masks[suit] |= bit;
        }

        Ok(freq)
    }

    /// How many cards have the given rank.
    #[inline]
    pub fn count(&self, rank: Rank) -> u8 {
        self.rank_counts[rank.value() as usize]
    }

    /// The ranks in the hand.
    #[inline]
    pub fn rank_mask(&self) -> u16 {
        self.rank_mask
    }

    /// The rank masks of the suits with at least five cards.
    pub fn flush_masks(&self) -> impl Iterator<Item = u16> + '_ {
        self.suit_counts
            .iter()
            .zip(self.suit_masks.iter())
            .filter(|(count, _)| **count >= FLUSH_LEN)
            .map(|(_, mask)| *mask)
    }

    /// Ranks with at least `n` cards, highest first.
    pub fn ranks_with(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks().rev().filter(move |&r| self.count(r) >= n)
    }

    /// The highest `n` ranks in the hand that are not in `exclude`.
    pub fn kickers<'a>(
        &'a self,
        exclude: &'a [Rank],
        n: usize,
    ) -> impl Iterator<Item = Rank> + 'a {
        self.ranks_with(1)
            .filter(move |r| !exclude.contains(r))
            .take(n)
    }
}

/// The mask bit for a rank.
#[inline]
pub fn rank_bit(rank: Rank) -> u16 {
    let bit = 1u16 << rank.value();
    if rank == Rank::Ace { bit | ACE_LOW_BIT } else { bit }
}

/// The highest `n` ranks in a rank mask.
pub fn top_ranks(mask: u16, n: usize) -> impl Iterator<Item = Rank> {
    Rank::ranks()
        .rev()
        .filter(move |&r| mask & (1u16 << r.value()) != 0)
        .take(n)
}

/// The high card of the best straight in a rank mask.
///
/// The A-2-3-4-5 straight uses the low ace bit and is a five high straight.
pub fn straight_high(mask: u16) -> Option<Rank> {
    const RUN: u16 = 0b11111;

    Rank::ranks()
        .rev()
        .take_while(|&r| r >= Rank::Five)
        .find(|&r| {
            let run = RUN << (r.value() - 4);
            mask & run == run
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::cards;

    #[test]
    fn insufficient_cards() {
        let err = Frequencies::new(&cards("AS KS QS JS")).unwrap_err();
        assert_eq!(err, EvalError::InsufficientCards { count: 4 });

        let err = Frequencies::new(&[]).unwrap_err();
        assert_eq!(err, EvalError::InsufficientCards { count: 0 });
    }

    #[test]
    fn counts() {
        let freq = Frequencies::new(&cards("AS AD TC TS 9H 5C")).unwrap();
        assert_eq!(freq.count(Rank::Ace), 2);
        assert_eq!(freq.count(Rank::Ten), 2);
        assert_eq!(freq.count(Rank::Nine), 1);
        assert_eq!(freq.count(Rank::King), 0);

        let pairs = freq.ranks_with(2).collect::<Vec<_>>();
        assert_eq!(pairs, vec![Rank::Ace, Rank::Ten]);

        let kickers = freq.kickers(&[Rank::Ace], 3).collect::<Vec<_>>();
        assert_eq!(kickers, vec![Rank::Ten, Rank::Nine, Rank::Five]);

        assert_eq!(freq.flush_masks().count(), 0);
    }

    #[test]
    fn ace_mirrored_low() {
        let freq = Frequencies::new(&cards("AS 2D 3C 4S 5H")).unwrap();
        assert_eq!(freq.rank_mask() & ACE_LOW_BIT, ACE_LOW_BIT);
        assert_eq!(freq.rank_mask() & (1 << 14), 1 << 14);
        assert_eq!(freq.count(Rank::Ace), 1);
    }

    #[test]
    fn flush_suit() {
        let freq = Frequencies::new(&cards("2H 5H 9H JH KH AS")).unwrap();
        let masks = freq.flush_masks().collect::<Vec<_>>();
        assert_eq!(masks.len(), 1);

        let ranks = top_ranks(masks[0], 5).collect::<Vec<_>>();
        assert_eq!(
            ranks,
            vec![Rank::King, Rank::Jack, Rank::Nine, Rank::Five, Rank::Deuce]
        );

        // Low ace bit is not a rank on its own.
        let mask = rank_bit(Rank::Ace) | rank_bit(Rank::Deuce);
        assert_eq!(
            top_ranks(mask, 5).collect::<Vec<_>>(),
            vec![Rank::Ace, Rank::Deuce]
        );
    }

    #[test]
    fn straights() {
        let mask = |s: &str| {
            cards(s).iter().fold(0, |m, c| m | rank_bit(c.rank()))
        };

        assert_eq!(straight_high(mask("AS KD QC JS TH")), Some(Rank::Ace));
        assert_eq!(straight_high(mask("AS 2D 3C 4S 5H")), Some(Rank::Five));
        assert_eq!(straight_high(mask("AS 2D 3C 4S 5H 6C")), Some(Rank::Six));
        assert_eq!(straight_high(mask("9S TD JC QS KH AC")), Some(Rank::Ace));
        assert_eq!(straight_high(mask("QS KD AC 2S 3H")), None);
        assert_eq!(straight_high(mask("2S 3D 4C 5S 7H")), None);
    }
}
