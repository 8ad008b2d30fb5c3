use std::process::ExitCode;

use betbot::adapter::inbound::cli::{run, Cli};
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run::execute(&cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("betbot: {e}");
            ExitCode::FAILURE
        }
    }
}
