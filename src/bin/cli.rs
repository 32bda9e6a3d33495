// src/bin/cli.rs
use spurt_scan::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();
    cli::run().map_err(|e| color_eyre::eyre::eyre!(e))
}
