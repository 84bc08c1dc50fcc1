use clap::{CommandFactory, Parser};
use ocean_data_index::cli::{
    args::Args,
    commands::{self, CommandOutcome},
};
use std::process;

/// Exit status when the requested date has no observations
const EXIT_NO_DATA: i32 = 1;

/// Exit status for failures that carry no typed signal
const EXIT_FAILURE: i32 = 70;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and exit
    if args.command.is_none() {
        let _ = Args::command().print_help();
        println!();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(EXIT_FAILURE);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(CommandOutcome::Found) => process::exit(0),
        Ok(CommandOutcome::NoData) => process::exit(EXIT_NO_DATA),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            let code = error
                .downcast_ref::<ocean_data_index::Error>()
                .map_or(EXIT_FAILURE, ocean_data_index::Error::exit_code);
            process::exit(code);
        }
    }
}
