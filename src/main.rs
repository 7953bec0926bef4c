use clap::Parser;
use file_manifest::cli::Args;
use file_manifest::{app, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logging(args.verbose, args.quiet);

    match app::run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
