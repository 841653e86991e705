use std::process::ExitCode;

use clap::Parser;

use bookcat::cli::{self, Cli};

fn main() -> ExitCode {
    let args = Cli::parse();
    cli::init_tracing(&args.log_level);

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
