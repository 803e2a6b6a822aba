//! Command-line surface.
//!
//! A bare `xssh <target>` connects; `connect`, `add`, `delete` and `show`
//! are explicit subcommands. `-i/--config` and `-d/--debug` are global.

use clap::{Arg, ArgMatches, Command, value_parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Connect { target: String },
    Add { target: String },
    Delete { target: String },
    Show { host: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub debug: bool,
    pub config: Option<PathBuf>,
    pub command: CliCommand,
}

pub fn build_cli_command() -> Command {
    Command::new("xssh")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Quick SSH logins backed by a CSV hosts file.")
        .arg_required_else_help(true)
        .subcommand_negates_reqs(true)
        .propagate_version(true)
        .after_help(
            "Examples:\n  \
xssh root@192.168.1.1                # connect\n  \
xssh root@192.168.1.1:2222           # connect on a specific port\n  \
xssh 192.168.1.1                     # pick the user interactively\n  \
xssh add root@192.168.1.1:2222       # store a host (prompts for password)\n  \
xssh delete root@192.168.1.1         # remove a stored host\n  \
xssh show                            # list all stored hosts\n  \
xssh -i /path/to/hosts.csv root@host # use another hosts file",
        )
        .arg(
            Arg::new("config")
                .short('i')
                .long("config")
                .value_name("FILE")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Hosts file path (default: ~/.ssh/hosts.csv)"),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .arg(
            Arg::new("target")
                .help("Target host, format: [user@]host[:port]")
                .required(true),
        )
        .subcommand(
            Command::new("connect")
                .about("Connect to a stored host")
                .arg(Arg::new("target").help("Target host, format: [user@]host[:port]").required(true)),
        )
        .subcommand(
            Command::new("add")
                .about("Store a host credential (interactive password prompt)")
                .arg(Arg::new("target").help("Target host, format: user@host[:port]").required(true)),
        )
        .subcommand(
            Command::new("delete")
                .about("Remove a stored host credential")
                .arg(Arg::new("target").help("Target host, format: user@host").required(true)),
        )
        .subcommand(
            Command::new("show")
                .about("List stored hosts")
                .arg(Arg::new("host").help("Host name (omit to list everything)")),
        )
}

pub fn parse_args_from<I, T>(command: &Command, args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    from_matches(&command.clone().get_matches_from(args))
}

/// Parses the real process arguments.
pub fn main_args() -> CliArgs {
    from_matches(&build_cli_command().get_matches())
}

fn from_matches(matches: &ArgMatches) -> CliArgs {
    let command = match matches.subcommand() {
        Some(("connect", sub_matches)) => CliCommand::Connect {
            target: required_target(sub_matches),
        },
        Some(("add", sub_matches)) => CliCommand::Add {
            target: required_target(sub_matches),
        },
        Some(("delete", sub_matches)) => CliCommand::Delete {
            target: required_target(sub_matches),
        },
        Some(("show", sub_matches)) => CliCommand::Show {
            host: sub_matches.get_one::<String>("host").cloned(),
        },
        // No subcommand: the bare positional is a connect target.
        _ => CliCommand::Connect {
            target: required_target(matches),
        },
    };

    CliArgs {
        debug: matches.get_flag("debug"),
        config: matches.get_one::<PathBuf>("config").cloned(),
        command,
    }
}

fn required_target(matches: &ArgMatches) -> String {
    matches.get_one::<String>("target").expect("target is required").clone()
}

#[cfg(test)]
#[path = "../test/args.rs"]
mod tests;
