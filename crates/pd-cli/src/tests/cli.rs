use crate::{Cli, Commands};

use clap::Parser;
use googletest::prelude::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("pd").chain(args.iter().copied())).unwrap()
}

#[test]
fn given_list_with_query_when_parsed_then_query_is_kept_verbatim() {
    let cli = parse(&["list", "--query", " git "]);

    assert_eq!(
        cli.command,
        Commands::List {
            query: Some(String::from(" git "))
        }
    );
    assert!(!cli.pretty);
}

#[test]
fn given_global_pretty_after_subcommand_when_parsed_then_pretty_is_set() {
    let cli = parse(&["status", "--pretty"]);

    assert_eq!(cli.command, Commands::Status);
    assert!(cli.pretty);
}

#[test]
fn given_add_without_color_when_parsed_then_color_is_none() {
    let cli = parse(&["add", "--name", "Blog", "--url", "https://ada.dev"]);

    assert_eq!(
        cli.command,
        Commands::Add {
            name: String::from("Blog"),
            url: String::from("https://ada.dev"),
            color: None,
        }
    );
}

#[test]
fn given_login_without_password_when_parsed_then_error() {
    let result = Cli::try_parse_from(["pd", "login", "--email", "ada@example.com"]);

    assert_that!(result.is_err(), eq(true));
}

#[test]
fn given_unknown_subcommand_when_parsed_then_error() {
    assert!(Cli::try_parse_from(["pd", "delete"]).is_err());
}

#[test]
fn given_cli_definition_then_it_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
