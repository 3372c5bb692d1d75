// src/bin/cli.rs
use clap::Parser;
use hvsa_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();
    hvsa_scrape::log::init(args.verbose);
    cli::run(args)?;
    Ok(())
}
