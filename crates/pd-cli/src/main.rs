//! pd - Profile Deck CLI
//!
//! Signs in against the identity service and manages the profile directory
//! from the command line. Output is JSON on stdout.
//!
//! # Examples
//!
//! ```bash
//! # Sign in (the session is kept in .pd/session.json)
//! pd login --email ada@example.com --password hunter22
//!
//! # Search profiles
//! pd list --query git --pretty
//!
//! # Add a profile
//! pd add --name LinkedIn --url https://linkedin.com/in/ada --color blue
//! ```

use pd_cli::{Cli, CliErrorResult, execute, logger};
use pd_config::Config;
use pd_dashboard::{Routes, SessionContext};
use pd_gateway::{HttpAuthGateway, HttpProfileBackend, RestClient, SessionStorage};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli.command).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: pd_cli::Commands) -> CliErrorResult<Value> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(&config)?;
    config.log_summary();

    let storage = Arc::new(SessionStorage::persistent(config.session_path()?));
    let rest = RestClient::from_config(&config.gateway)?;
    let auth = HttpAuthGateway::new(rest.clone(), Arc::clone(&storage));
    let profiles = HttpProfileBackend::new(rest, &config.gateway.profiles_table, storage);

    let context = SessionContext::new(Arc::new(auth), Arc::new(profiles));
    let routes = Routes::from_config(&config.routes);

    execute(command, context, routes).await
}
