use clap::Parser;
use colored::Colorize;
use std::process;

use hashsum::cli::Cli;
use hashsum::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level.as_deref(), cli.verbose) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }

    match cli.execute() {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}
