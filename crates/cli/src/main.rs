//! Carrito CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! carrito-cli migrate
//!
//! # Create a user
//! carrito-cli user create -n ana01 -p pw123 --name "Ana Gomez" \
//!     -e ana@x.com -a "Calle 1" -t 555-1234
//!
//! # Show a user (with its orders)
//! carrito-cli user show -n ana01
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `user create` - Create a user
//! - `user show` - Print a user and its order ids

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "carrito-cli")]
#[command(author, version, about = "Carrito CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Nick (unique account identifier)
        #[arg(short, long)]
        nick: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Delivery address
        #[arg(short, long)]
        address: String,

        /// Phone number
        #[arg(short = 't', long)]
        phone: String,
    },
    /// Print a user and its order ids
    Show {
        /// Nick of the user to show
        #[arg(short, long)]
        nick: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::User { action } => match action {
            UserAction::Create {
                nick,
                password,
                name,
                email,
                address,
                phone,
            } => {
                commands::user::create(&nick, &password, &name, &email, &address, &phone).await?;
            }
            UserAction::Show { nick } => commands::user::show(&nick).await?,
        },
    }
    Ok(())
}
