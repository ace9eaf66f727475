// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deals rounds of hold'em hands from a shuffled deck.
use anyhow::{Context, Result, bail};
use log::debug;
use rand::prelude::*;

use showdown_eval::{Card, Deck, HandValue, PlayerHand, showdown};

/// Number of hole cards for each player.
const HOLE_CARDS: usize = 2;

/// Number of community cards.
const BOARD_CARDS: usize = 5;

/// The dealer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of players at the table.
    pub players: usize,
    /// Number of rounds to deal.
    pub rounds: usize,
    /// Seed for a reproducible deal, uses OS randomness if `None`.
    pub seed: Option<u64>,
}

/// A dealt and evaluated round.
#[derive(Debug)]
pub struct Round {
    /// The players hole cards.
    pub hands: Vec<PlayerHand>,
    /// The community cards.
    pub board: Vec<Card>,
    /// The players best hand values.
    pub values: Vec<HandValue>,
    /// The indices of the winning players.
    pub winners: Vec<usize>,
}

/// Deals and evaluates the configured number of rounds.
pub fn run(config: &Config) -> Result<Vec<Round>> {
    if config.players < 2 || config.players * HOLE_CARDS + BOARD_CARDS > Deck::SIZE {
        bail!("Invalid number of players {}", config.players);
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    (0..config.rounds)
        .map(|_| deal_round(&mut Deck::new_and_shuffled(&mut rng), config.players))
        .collect()
}

/// Deals hole cards and board from the deck and evaluates each player hand.
pub fn deal_round(deck: &mut Deck, players: usize) -> Result<Round> {
    let mut hands = vec![PlayerHand::new(); players];
    for _ in 0..HOLE_CARDS {
        for hand in hands.iter_mut() {
            hand.give_card(deck.deal().context("Deck empty dealing hole cards")?);
        }
    }

    let board = (0..BOARD_CARDS)
        .map(|_| deck.deal().context("Deck empty dealing the board"))
        .collect::<Result<Vec<_>>>()?;

    let values = hands
        .iter()
        .map(|hand| hand.best_hand(&board))
        .collect::<Result<Vec<_>, _>>()?;

    let winners = showdown::winners(&values);
    debug!("Dealt {players} hands, winners {winners:?}");

    Ok(Round {
        hands,
        board,
        values,
        winners,
    })
}

/// Formats cards as a space separated list.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
