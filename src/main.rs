use clap::{CommandFactory, Parser};

use header_guard::cli::Cli;
use header_guard::commands::run_check;
use header_guard::{EXIT_FAILURE, EXIT_SUCCESS, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.patterns.is_empty() {
        let exit_code = match Cli::command().print_help() {
            Ok(()) => EXIT_SUCCESS,
            Err(_) => EXIT_FAILURE,
        };
        std::process::exit(exit_code);
    }

    std::process::exit(run_check(&cli));
}
