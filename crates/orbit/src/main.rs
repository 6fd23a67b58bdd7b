use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing();

    match cli.command {
        Command::Check(args) => args.run(),
        Command::Run(args) => args.run(),
    }
}

#[derive(Parser)]
#[command(name = "orbit", about = "Drive an object around an ellipse with the Orbit plugin")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a configuration and compile its plugin without running it.
    Check(cli::check::CheckArgs),
    /// Initialize the engine and print the position after each tick.
    Run(cli::run::RunArgs),
}
