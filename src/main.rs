use std::process::ExitCode;
use xssh::cli::{CliArgs, CliCommand, args};
use xssh::{Result, commands, log, log_debug};

const CANCELLED_EXIT_CODE: u8 = 130;

fn main() -> ExitCode {
    let args = args::main_args();

    if args.debug {
        let logger = log::Logger::new();
        logger.enable_debug();
        log_debug!("Debug mode enabled");
    }

    match run(args) {
        Ok(code) => code,
        Err(err) if err.is_cancelled() => {
            eprintln!("\nOperation cancelled");
            ExitCode::from(CANCELLED_EXIT_CODE)
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<ExitCode> {
    match args.command {
        CliCommand::Connect { target } => commands::connect::run(&target, args.config),
        CliCommand::Add { target } => {
            commands::add::run(&target, args.config)?;
            Ok(ExitCode::SUCCESS)
        }
        CliCommand::Delete { target } => {
            commands::delete::run(&target, args.config)?;
            Ok(ExitCode::SUCCESS)
        }
        CliCommand::Show { host } => {
            commands::show::run(host.as_deref(), args.config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
