// src/bin/cli.rs
use gacha_roster::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
