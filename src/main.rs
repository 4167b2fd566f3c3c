mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod generate;
mod output;
mod paths;
mod pricing;
mod state;
mod tokenizer;

use clap::Parser;

use app::CommandContext;
use cli::Cli;
use config::Config;
use pricing::PriceTable;

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);
    let prices = PriceTable::load();

    let ctx = CommandContext {
        cli: &cli,
        config: &config,
        prices: &prices,
    };
    if let Err(e) = app::run(&ctx) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
