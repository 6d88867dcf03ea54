use fyw::app;
use fyw::cli::Cli;

use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use tokio::io::{BufReader, stdin};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match app::run(cli, BufReader::new(stdin()), &mut stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
