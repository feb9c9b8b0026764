mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod plan;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();
    let config = if cli.json {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    // Entry-level failures are part of the report; only setup errors land here
    let failed = match app::run(&cli) {
        Ok(()) => false,
        Err(e) => {
            eprintln!("Error: {e}");
            true
        }
    };

    if cli.pause {
        app::wait_for_enter();
    }
    if failed {
        std::process::exit(1);
    }
}
