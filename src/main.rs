use allele_freq::{
    cli::{init_verbose, Cli, Command},
    commands::{depth, occurrence},
    util::{handle_error_and_exit, Result},
};
use clap::Parser;

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    log::info!("Running {} mode", cli.command.name());
    match cli.command {
        Command::Occurrence(args) => occurrence(args)?,
        Command::Depth(args) => depth(args)?,
    }
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
