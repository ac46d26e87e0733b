//! Folio CLI - Sitemap generation and store management tools.
//!
//! # Usage
//!
//! ```bash
//! # Generate sitemap.xml and robots.txt
//! folio-cli sitemap --base-url https://vc.example --out-dir dist
//!
//! # Seed the admin content store with demo collections
//! folio-cli seed
//!
//! # Clear every store key
//! folio-cli reset
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "folio-cli")]
#[command(author, version, about = "Folio CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate sitemap.xml and robots.txt for the public routes
    Sitemap {
        /// Public base URL of the site
        #[arg(long, default_value = "http://localhost:3000")]
        base_url: String,

        /// Directory to write the artifacts into
        #[arg(long, default_value = "dist")]
        out_dir: String,
    },
    /// Seed the admin content store with the demo collections
    Seed {
        /// Store data directory
        #[arg(long, default_value = "data/admin")]
        data_dir: String,

        /// Overwrite collections that already exist
        #[arg(long)]
        force: bool,
    },
    /// Clear every store key (collections, settings, session, preferences)
    Reset {
        /// Store data directory
        #[arg(long, default_value = "data/admin")]
        data_dir: String,
    },
}

fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_cli=info,folio_admin=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sitemap { base_url, out_dir } => commands::sitemap::run(&base_url, &out_dir),
        Commands::Seed { data_dir, force } => commands::seed::run(&data_dir, force),
        Commands::Reset { data_dir } => commands::reset::run(&data_dir),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Command failed");
        std::process::exit(1);
    }
}
