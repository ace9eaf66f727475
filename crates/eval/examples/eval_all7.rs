// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ...
// Total hands      133784560
//
// High Card:       23294460
// One Pair:        58627800
// Two Pair:        31433400
// Three of a Kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full House:      3473184
// Four of a Kind:  224848
// Straight Flush:  41584
// ```

use std::time::Instant;

use showdown_eval::*;

#[rustfmt::skip]
fn main() -> Result<()> {
    // Evaluate all 133M hands.
    let now = Instant::now();
    let mut counts = [0usize; 9];
    let mut result = Ok(());

    Deck::default().for_each(7, |hand| match HandValue::eval(hand) {
        Ok(value) => counts[value.rank() as usize] += 1,
        Err(e) => result = Err(e),
    });
    result?;

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        println!("{:<17}{}", format!("{rank}:"), counts[rank as usize]);
    }

    Ok(())
}
