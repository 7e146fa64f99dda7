// src/bin/cli.rs
use shot_harvest::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
