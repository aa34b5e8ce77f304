//! reader - account signup CLI
//!
//! # Examples
//!
//! ```bash
//! # Create an owner, a group and an invite
//! reader signup --email owner@example.com --username owner --name "Owner"
//! reader group create --name "Book Club" --creator-email owner@example.com
//!
//! # Join through the invite, pending email confirmation
//! reader signup --email ada@example.com --username ada_reads --name "Ada" \
//!     --invite-code <code> --pending
//! reader user confirm <user-id>
//! ```

use reader_cli::{
    Cli, CliError, Commands, GroupCommands, Result as CliErrorResult, UserCommands, admin,
    logger,
};
use reader_config::Config;
use reader_signup::SignupService;

use std::process::ExitCode;

use chrono::{Duration, Utc};
use clap::Parser;
use log::info;
use serde::Serialize;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<()> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    info!("Starting reader v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Opening database: {}", database_path.display());
    let pool = reader_db::create_pool(&database_path, config.database.max_connections).await?;

    match cli.command {
        Commands::Signup(args) => {
            let service = SignupService::from_config(pool, &config);
            let (user, profile) = service.create_user(args.into_input()?).await?;
            print_json(&SignupOutput { user, profile }, cli.pretty)
        }

        Commands::Group { action } => match action {
            GroupCommands::Create {
                name,
                creator_email,
                max_members,
                expires_in_days,
            } => {
                let expires_in = Duration::try_days(expires_in_days).ok_or_else(|| {
                    CliError::invalid_input(format!("{} days is out of range", expires_in_days))
                })?;
                let created = admin::create_group(
                    &pool,
                    &name,
                    &creator_email,
                    max_members,
                    expires_in,
                    Utc::now(),
                )
                .await?;
                print_json(&created, cli.pretty)
            }
        },

        Commands::User { action } => match action {
            UserCommands::Confirm { id } => {
                let service = SignupService::from_config(pool, &config);
                let user = service
                    .confirm_user(id)
                    .await?
                    .ok_or_else(|| CliError::not_found(format!("User {}", id)))?;
                print_json(&user, cli.pretty)
            }
            UserCommands::Show { email } => {
                let details = admin::show_user(&pool, &email).await?;
                print_json(&details, cli.pretty)
            }
        },
    }
}

#[derive(Serialize)]
struct SignupOutput {
    user: reader_core::User,
    profile: reader_core::Profile,
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> CliErrorResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
