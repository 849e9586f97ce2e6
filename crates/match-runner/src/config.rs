//! Command line configuration for the match runner.

use clap::Parser;
use othello_core::bot::{Bot, BotKind, RandomBot, create_bot};

/// Configuration for a series of games between two registered bots.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Plays a series of games between two built-in Othello bots"
)]
pub struct Config {
    /// Id of the first bot (random, greedy, strategic, minimax)
    #[arg(short = '1', long)]
    pub bot1: BotKind,

    /// Id of the second bot
    #[arg(short = '2', long)]
    pub bot2: BotKind,

    /// Number of games; colors alternate with bot1 as Black in even games
    #[arg(short = 'n', long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub games: u32,

    /// Seed for random bots, making the whole series reproducible
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Config {
    /// Builds the first bot.
    pub fn create_bot1(&self) -> Box<dyn Bot> {
        self.create(self.bot1, 0)
    }

    /// Builds the second bot. A seeded random bot gets a different stream
    /// from the first one.
    pub fn create_bot2(&self) -> Box<dyn Bot> {
        self.create(self.bot2, 1)
    }

    fn create(&self, kind: BotKind, stream: u64) -> Box<dyn Bot> {
        match (kind, self.seed) {
            (BotKind::Random, Some(seed)) => {
                Box::new(RandomBot::with_seed(seed.wrapping_add(stream)))
            }
            _ => create_bot(kind),
        }
    }
}
