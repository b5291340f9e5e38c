//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// GigCoach - Financial coaching backend for gig workers
#[derive(Parser)]
#[command(name = "gigcoach")]
#[command(about = "Financial coaching backend for gig-economy workers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "gigcoach.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Show database status (row counts per table)
    Status,

    /// Start the API server and chat webhook
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },

    /// Manage users
    Users {
        #[command(subcommand)]
        action: Option<UsersAction>,
    },

    /// Manage earnings entries
    Earnings {
        #[command(subcommand)]
        action: EarningsAction,
    },

    /// Manage expenses
    Expenses {
        #[command(subcommand)]
        action: ExpensesAction,
    },

    /// Manage savings goals
    Goals {
        #[command(subcommand)]
        action: GoalsAction,
    },

    /// Record or show earnings forecasts
    Forecast {
        #[command(subcommand)]
        action: ForecastAction,
    },

    /// Compute a user's GigScore
    Score {
        /// User's phone number
        phone_number: String,
    },

    /// Estimate a user's tax for the fiscal window
    Tax {
        /// User's phone number
        phone_number: String,
    },

    /// Generate earnings insights for a user
    Insights {
        /// User's phone number
        phone_number: String,
    },

    /// Run one chat turn locally (what the webhook would reply)
    Chat {
        /// Sender's phone number
        phone_number: String,

        /// Inbound message text
        message: String,
    },
}

#[derive(Subcommand)]
pub enum UsersAction {
    /// List all users
    List,

    /// Register a user
    Add {
        /// Phone number, e.g. +911234567890
        phone_number: String,
    },
}

#[derive(Subcommand)]
pub enum EarningsAction {
    /// Record an earnings entry
    Add {
        /// User's phone number
        phone_number: String,

        /// Entry date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Amount earned
        #[arg(short, long)]
        amount: f64,
    },

    /// List a user's earnings history
    List {
        /// User's phone number
        phone_number: String,
    },
}

#[derive(Subcommand)]
pub enum ExpensesAction {
    /// Log an expense
    Add {
        /// User's phone number
        phone_number: String,

        /// Expense category, e.g. fuel
        #[arg(short, long)]
        category: String,

        /// Amount spent
        #[arg(short, long)]
        amount: f64,

        /// Expense date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },

    /// List a user's expenses
    List {
        /// User's phone number
        phone_number: String,
    },
}

#[derive(Subcommand)]
pub enum GoalsAction {
    /// Create a savings goal
    Add {
        /// User's phone number
        phone_number: String,

        /// Goal name
        #[arg(short, long)]
        name: String,

        /// Target amount
        #[arg(short, long)]
        target: f64,

        /// Optional target date (YYYY-MM-DD)
        #[arg(long)]
        target_date: Option<String>,
    },

    /// List a user's goals
    List {
        /// User's phone number
        phone_number: String,
    },

    /// Add savings to a goal
    Save {
        /// Goal id
        id: i64,

        /// Amount to add
        #[arg(short, long)]
        amount: f64,
    },

    /// Delete a goal permanently
    Delete {
        /// Goal id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ForecastAction {
    /// Record a forecast (stands in for the external prediction job)
    Record {
        /// User's phone number
        phone_number: String,

        /// Predicted amount
        #[arg(short, long)]
        amount: f64,
    },

    /// Show the latest forecast and savings suggestion
    Show {
        /// User's phone number
        phone_number: String,
    },
}
