use clap::Parser;
use dotenv::dotenv;
use fileproc::cli::Args;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from `.env` file into std::env (optional)
    dotenv().ok();

    let args = Args::parse();

    // Load config, init logging and run
    if fileproc::run(args).await? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
