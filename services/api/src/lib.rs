mod cli;
mod commands;
mod infra;
mod interactive;
mod routes;
mod server;

use std::process::ExitCode;

use rent_split::error::AppError;

pub async fn run() -> Result<ExitCode, AppError> {
    cli::run().await
}
