mod config;
mod error;
mod game;
mod ui;

use clap::Parser;
use colored::Colorize;
use othello_core::bot::descriptors;

use crate::config::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    if config.no_color {
        colored::control::set_override(false);
    }

    if config.list_bots {
        for bot in descriptors() {
            println!("{:<10} {}", bot.id.bold(), bot.display_name);
            println!("{:<10} {}", "", bot.description);
        }
        return;
    }

    ui::ui_loop(&config).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        std::process::exit(1);
    });
}
