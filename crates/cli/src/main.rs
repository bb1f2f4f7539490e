use anyhow::Result;
use clap::Parser;
use fontface_cli::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new().filter_level(cli.log_level()).init();
    cli.run()
}
