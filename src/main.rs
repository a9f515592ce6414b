use clap::Parser;
use trivia_pass::cli::commands::{error_message, execute_command, exit_status};
use trivia_pass::cli::Cli;
use trivia_pass::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = execute_command(cli.command);
    if let Err(e) = &result {
        tracing::debug!(error = %e, "command failed");
        eprintln!("{}", error_message(e));
    }

    std::process::exit(exit_status(&result));
}
