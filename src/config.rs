use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::entities::Preset;

/// Command-line options for the `power_up` binary.
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about = "Collect coins, grab power-ups and dodge enemies.", long_about = None)]
pub struct Args {
    /// Seed for power-up selection; omit for a different game every run
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Skip the menu and play as this character (1 Mario, 2 Luigi, 3 Toad, 4 Peach)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub character: Option<u8>,

    /// Line-oriented console instead of the full-screen terminal UI
    #[arg(long)]
    pub plain: bool,

    /// Write logs here (the terminal UI owns stdout)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn preset(&self) -> Option<Preset> {
        self.character.and_then(|key| Preset::try_from(key).ok())
    }
}
