//! GigCoach CLI - financial coaching backend for gig workers
//!
//! Usage:
//!   gigcoach init                     Initialize database
//!   gigcoach serve --port 3000        Start API server + chat webhook
//!   gigcoach earnings add ...         Record an earnings entry
//!   gigcoach score <phone>            Compute a user's GigScore
//!   gigcoach chat <phone> <message>   Run one chat turn locally

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Status => commands::cmd_status(&cli.db),
        Commands::Serve { host, port } => commands::cmd_serve(&cli.db, &host, port).await,
        Commands::Users { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(UsersAction::List) => commands::cmd_users_list(&db),
                Some(UsersAction::Add { phone_number }) => {
                    commands::cmd_users_add(&db, &phone_number)
                }
            }
        }
        Commands::Earnings { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                EarningsAction::Add {
                    phone_number,
                    date,
                    amount,
                } => commands::cmd_earnings_add(&db, &phone_number, &date, amount),
                EarningsAction::List { phone_number } => {
                    commands::cmd_earnings_list(&db, &phone_number)
                }
            }
        }
        Commands::Expenses { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                ExpensesAction::Add {
                    phone_number,
                    category,
                    amount,
                    date,
                    description,
                } => commands::cmd_expenses_add(
                    &db,
                    &phone_number,
                    &category,
                    amount,
                    &date,
                    description.as_deref(),
                ),
                ExpensesAction::List { phone_number } => {
                    commands::cmd_expenses_list(&db, &phone_number)
                }
            }
        }
        Commands::Goals { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                GoalsAction::Add {
                    phone_number,
                    name,
                    target,
                    target_date,
                } => commands::cmd_goals_add(
                    &db,
                    &phone_number,
                    &name,
                    target,
                    target_date.as_deref(),
                ),
                GoalsAction::List { phone_number } => commands::cmd_goals_list(&db, &phone_number),
                GoalsAction::Save { id, amount } => commands::cmd_goals_save(&db, id, amount),
                GoalsAction::Delete { id } => commands::cmd_goals_delete(&db, id),
            }
        }
        Commands::Forecast { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                ForecastAction::Record {
                    phone_number,
                    amount,
                } => commands::cmd_forecast_record(&db, &phone_number, amount),
                ForecastAction::Show { phone_number } => {
                    commands::cmd_forecast_show(&db, &phone_number)
                }
            }
        }
        Commands::Score { phone_number } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_score(&db, &phone_number)
        }
        Commands::Tax { phone_number } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_tax(&db, &phone_number)
        }
        Commands::Insights { phone_number } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_insights(&db, &phone_number)
        }
        Commands::Chat {
            phone_number,
            message,
        } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_chat(&db, &phone_number, &message)
        }
    }
}
