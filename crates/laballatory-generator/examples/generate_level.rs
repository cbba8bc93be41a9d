//! Example demonstrating level generation.
//!
//! This example shows how to:
//! - Create a `LevelGenerator` for a difficulty tier
//! - Generate a level from a random or fixed seed
//! - Sample many levels in parallel and keep the most scrambled one
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_level -- --difficulty hard
//! ```
//!
//! Replay a level from its seed:
//!
//! ```sh
//! cargo run --example generate_level -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Sample 10000 levels and print the one with the most color breaks:
//!
//! ```sh
//! cargo run --example generate_level -- --samples 10000
//! ```

use std::process;

use clap::Parser;
use laballatory_core::{Board, Difficulty};
use laballatory_generator::{GeneratedLevel, LevelGenerator, LevelSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty tier to generate for.
    #[arg(short, long, value_name = "TIER", default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Seed to generate from (64 hex digits). Ignored when sampling.
    #[arg(long, value_name = "HEX")]
    seed: Option<LevelSeed>,

    /// Number of levels to sample; the most scrambled one is printed.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    samples: usize,
}

fn main() {
    let args = Args::parse();
    let generator = LevelGenerator::new(args.difficulty.config());

    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    if let Some(seed) = args.seed {
        print_level(&generator.generate_with_seed(seed), None);
        return;
    }

    if args.samples == 1 {
        print_level(&generator.generate(), None);
        return;
    }

    let best = (0..args.samples)
        .into_par_iter()
        .map(|_| {
            let level = generator.generate();
            let score = color_breaks(&level.board);
            (level, score)
        })
        .max_by_key(|(_, score)| *score);

    if let Some((level, score)) = best {
        print_level(&level, Some((args.samples, score)));
    }
}

/// Counts adjacent balls of different colors within each tube.
fn color_breaks(board: &Board) -> usize {
    board
        .tubes()
        .iter()
        .map(|tube| {
            tube.balls()
                .windows(2)
                .filter(|pair| pair[0] != pair[1])
                .count()
        })
        .sum()
}

fn print_level(level: &GeneratedLevel, sampling: Option<(usize, usize)>) {
    let config = level.config;
    println!(
        "Tubes: {}, colors: {}, capacity: {}",
        config.tube_count(),
        config.color_count(),
        config.capacity()
    );
    println!("Seed: {}", level.seed);
    if let Some((samples, score)) = sampling {
        println!("Sampled: {samples}, color breaks: {score}");
    }
    println!();
    for (i, tube) in level.board.tubes().iter().enumerate() {
        let balls = tube
            .balls()
            .iter()
            .map(|color| color.name())
            .collect::<Vec<_>>();
        println!("{:>3}: {}", i + 1, balls.join(" "));
    }
}
