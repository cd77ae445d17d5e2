//! # UNIDISC - Course Relation Engine
//!
//! The main binary for the UNIDISC engine.
//!
//! This application provides:
//! - Interactive numbered menu over stdin/stdout
//! - One-shot CLI commands over a scenario file
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │               apps/unidisc (THE BINARY)             │
//! │                                                     │
//! │   ┌─────────────┐  ┌─────────────┐  ┌───────────┐   │
//! │   │    CLI      │  │    Menu     │  │ Scenario  │   │
//! │   │   (clap)    │  │ (stdin/out) │  │  (toml)   │   │
//! │   └──────┬──────┘  └──────┬──────┘  └─────┬─────┘   │
//! │          └────────────────┼───────────────┘         │
//! │                           ▼                         │
//! │                   ┌───────────────┐                 │
//! │                   │ unidisc-core  │                 │
//! │                   │  (THE LOGIC)  │                 │
//! │                   └───────────────┘                 │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Interactive menu
//! unidisc
//!
//! # One-shot commands over a scenario
//! unidisc --scenario term.toml report
//! unidisc --scenario term.toml orders --limit 20
//! unidisc --scenario term.toml check --course 3 --completed 0,1
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use unidisc::cli;
use unidisc::display::banner;

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Logs go to stderr so menu and command output stay clean on stdout.
    // UNIDISC_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("UNIDISC_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let default_filter = if cli.verbose {
        "unidisc=debug"
    } else {
        "unidisc=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the UNIDISC startup banner.
fn print_banner() {
    println!("{}", banner(env!("CARGO_PKG_VERSION")));
}
