// src/bin/cli.rs
use troopers_roster::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
