use anyhow::Context;
use clap::Parser;
use winter_aqi::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli).context("winter air quality run failed")
}
