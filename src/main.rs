//! skland-config CLI entry point.

use clap::Parser;

use skland_config::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli::run(&cli) {
        cli::handle_error(&err, cli.json);
    }
}
