use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use fontremap_cli::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
    cli.run()
}
