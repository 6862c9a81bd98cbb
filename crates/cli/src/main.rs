//! Shoplite administration CLI.
//!
//! Applies database migrations and manages user accounts.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shoplite", about = "Shoplite administration tool", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations.
    Migrate,
    /// Create a user account.
    CreateUser {
        /// Email address for the new account.
        #[arg(long)]
        email: String,
        /// First name.
        #[arg(long)]
        first_name: String,
        /// Last name.
        #[arg(long)]
        last_name: String,
        /// Password (minimum 8 characters).
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Migrate => commands::migrate::run().await.map_err(Into::into),
        Commands::CreateUser {
            email,
            first_name,
            last_name,
            password,
        } => commands::users::run(&email, &first_name, &last_name, &password)
            .await
            .map_err(Into::into),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        std::process::exit(1);
    }
}
