mod config;
mod display;
mod error;
mod match_runner;
mod statistics;

use clap::Parser;

use config::Config;
use match_runner::MatchRunner;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    let mut match_runner = MatchRunner::new();

    if let Err(e) = match_runner.run_match(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
