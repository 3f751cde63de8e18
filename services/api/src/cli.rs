use crate::commands::{run_batch, run_split, BatchArgs, SplitArgs};
use crate::interactive::run_interactive;
use crate::server;
use clap::{Args, Parser, Subcommand};
use rent_split::error::AppError;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "Calculadora do aluguel",
    about = "Split rent and utility bills between the people sharing a place",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Split a single set of bills given on the command line
    Split(SplitArgs),
    /// Split every row of a CSV spreadsheet of bills
    Batch(BatchArgs),
    /// Fill in the form field by field on the terminal
    Interactive,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<ExitCode, AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await.map(|()| ExitCode::SUCCESS),
        Command::Split(args) => run_split(args),
        Command::Batch(args) => run_batch(args),
        Command::Interactive => run_interactive(),
    }
}
