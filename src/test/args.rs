use super::{CliCommand, build_cli_command, parse_args_from};
use std::path::PathBuf;

#[test]
fn bare_target_is_a_connect() {
    let cmd = build_cli_command();
    let parsed = parse_args_from(&cmd, ["xssh", "root@box1"]);
    assert_eq!(
        parsed.command,
        CliCommand::Connect {
            target: "root@box1".to_string()
        }
    );
    assert!(!parsed.debug);
    assert_eq!(parsed.config, None);
}

#[test]
fn connect_subcommand_matches_bare_form() {
    let cmd = build_cli_command();
    let bare = parse_args_from(&cmd, ["xssh", "root@box1:2222"]);
    let explicit = parse_args_from(&cmd, ["xssh", "connect", "root@box1:2222"]);
    assert_eq!(bare.command, explicit.command);
}

#[test]
fn parses_add_and_delete_targets() {
    let cmd = build_cli_command();
    assert_eq!(
        parse_args_from(&cmd, ["xssh", "add", "root@box1:2222"]).command,
        CliCommand::Add {
            target: "root@box1:2222".to_string()
        }
    );
    assert_eq!(
        parse_args_from(&cmd, ["xssh", "delete", "root@box1"]).command,
        CliCommand::Delete {
            target: "root@box1".to_string()
        }
    );
}

#[test]
fn show_takes_an_optional_host() {
    let cmd = build_cli_command();
    assert_eq!(parse_args_from(&cmd, ["xssh", "show"]).command, CliCommand::Show { host: None });
    assert_eq!(
        parse_args_from(&cmd, ["xssh", "show", "box1"]).command,
        CliCommand::Show {
            host: Some("box1".to_string())
        }
    );
}

#[test]
fn config_flag_is_global() {
    let cmd = build_cli_command();
    let before = parse_args_from(&cmd, ["xssh", "-i", "/tmp/hosts.csv", "root@box1"]);
    let after = parse_args_from(&cmd, ["xssh", "show", "-i", "/tmp/hosts.csv"]);
    assert_eq!(before.config, Some(PathBuf::from("/tmp/hosts.csv")));
    assert_eq!(after.config, Some(PathBuf::from("/tmp/hosts.csv")));
}

#[test]
fn debug_flag_is_parsed_anywhere() {
    let cmd = build_cli_command();
    assert!(parse_args_from(&cmd, ["xssh", "-d", "root@box1"]).debug);
    assert!(parse_args_from(&cmd, ["xssh", "add", "-d", "root@box1"]).debug);
}
