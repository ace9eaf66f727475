// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, deals random hands and shows the winners.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;

mod dealer;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players.
    #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=9))]
    players: u8,
    /// Number of rounds to deal.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,
    /// Seed for a reproducible deal.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = dealer::Config {
        players: cli.players as usize,
        rounds: cli.rounds as usize,
        seed: cli.seed,
    };

    for (idx, round) in dealer::run(&config)?.iter().enumerate() {
        info!("Round {} board {}", idx + 1, dealer::format_cards(&round.board));

        for (player, (hand, value)) in round.hands.iter().zip(&round.values).enumerate() {
            info!(
                "Player {} {} {value}",
                player + 1,
                dealer::format_cards(hand.cards())
            );
        }

        let winners = round
            .winners
            .iter()
            .map(|p| (p + 1).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        info!("Round {} won by player {winners}", idx + 1);
    }

    Ok(())
}
