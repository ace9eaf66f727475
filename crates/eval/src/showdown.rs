// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown winners selection.
use log::debug;

use crate::HandValue;

/// Returns the indices of the hands with the best value.
///
/// More than one index means the best hands tie and split the pot, an empty
/// slice has no winners.
pub fn winners(values: &[HandValue]) -> Vec<usize> {
    let Some(best) = values.iter().max() else {
        return Vec::new();
    };

    let winners = values
        .iter()
        .enumerate()
        .filter(|(_, v)| *v == best)
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();

    debug!("Best hand {best} for {} of {} hands", winners.len(), values.len());
    winners
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::cards;

    fn eval(s: &str) -> HandValue {
        HandValue::eval(&cards(s)).unwrap()
    }

    #[test]
    fn single_winner() {
        let values = [
            eval("AS AD 5C KC JD JC JH"),
            eval("KH KD 5C KC JD JC JH"),
            eval("2S 7D 5C KC JD JC JH"),
        ];
        assert_eq!(winners(&values), vec![1]);
    }

    #[test]
    fn split_pot() {
        let values = [
            eval("2S 3D AS KD QC JS TH"),
            eval("4S 4D AS KD QC JS TH"),
            eval("9C 9H AS KD QC JS 2H"),
        ];
        assert_eq!(winners(&values), vec![0, 1]);
    }

    #[test]
    fn no_hands() {
        assert!(winners(&[]).is_empty());
    }
}
