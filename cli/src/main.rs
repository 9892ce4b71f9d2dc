use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use cli::handlers::{OutputFormat, handle_capabilities, handle_plan, handle_validate};

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the data types, layouts and features the kernel supports
    Capabilities,
    /// Check whether the kernel can service a request
    Validate {
        /// JSON file with the request
        request_path: String,
    },
    /// Plan the dispatch and specialization constants for a request
    Plan {
        /// JSON file with the request
        request_path: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Some(Commands::Capabilities) => handle_capabilities(),
        Some(Commands::Validate {
            request_path,
        }) => match handle_validate(request_path) {
            Ok(true) => Ok(()),
            Ok(false) => return ExitCode::FAILURE,
            Err(error) => Err(error),
        },
        Some(Commands::Plan {
            request_path,
            format,
        }) => handle_plan(request_path, format),
        None => {
            let mut cmd = Cli::command();
            cmd.print_help().map_err(Into::into)
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        },
    }
}
