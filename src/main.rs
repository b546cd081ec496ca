mod app;
mod cli;
mod config;
mod consts;
mod download;
mod error;
mod puzzle;
mod session;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use download::UreqFetcher;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();
    set_debug(cli.debug);

    let cli = cli.with_config(Config::load());
    set_debug(cli.debug);

    if let Err(e) = app::run(&cli, &UreqFetcher::new()) {
        println!("Error: {e}");
        std::process::exit(1);
    }
}
