//! # UNIDISC CLI Module
//!
//! This module implements the CLI interface for UNIDISC.
//!
//! ## Available Commands
//!
//! - `menu` - Interactive numbered menu (default)
//! - `report` - Consistency report for the loaded scenario
//! - `orders` - List valid course orders
//! - `check` - Induction checks for one course
//! - `propagate` - Apply implications to a set of facts
//! - `recommend` - Suggest next courses for a student
//! - `proof` - Generate (and optionally save) a prerequisite proof

mod commands;

use crate::config::AppConfig;
use crate::scenario::load_session;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unidisc_core::UnidiscError;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// UNIDISC - course relation reasoning engine
///
/// Models courses linked by prerequisite and implication relations and
/// answers ordering, satisfaction and inference questions over them.
#[derive(Parser, Debug)]
#[command(name = "unidisc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to a TOML scenario file loaded at startup
    #[arg(short, long, global = true)]
    pub scenario: Option<PathBuf>,

    /// Override the maximum number of listed orders
    #[arg(long, global = true)]
    pub order_limit: Option<usize>,

    /// Override the maximum number of recommendations
    #[arg(long, global = true)]
    pub suggestion_limit: Option<usize>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive numbered menu over stdin/stdout
    Menu,

    /// Show the consistency report
    Report,

    /// List valid course orders
    Orders {
        /// Maximum number of orders to list
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Run the recursive and strong induction checks for a course
    Check {
        /// Course id
        #[arg(short = 'C', long)]
        course: usize,

        /// Completed course ids (comma-separated)
        #[arg(long, default_value = "")]
        completed: String,
    },

    /// Apply implications to a set of facts
    Propagate {
        /// Course ids taken as facts (comma-separated)
        #[arg(short, long, default_value = "")]
        facts: String,
    },

    /// Recommend next courses for a student
    Recommend {
        /// Student id
        #[arg(short = 'S', long)]
        student: usize,
    },

    /// Generate a prerequisite proof for a course
    Proof {
        /// Course id
        #[arg(short = 'C', long)]
        course: usize,

        /// Completed course ids (comma-separated)
        #[arg(long, default_value = "")]
        completed: String,

        /// Write the proof to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Resolve the effective configuration: file and environment, then flags.
pub fn resolve_config(cli: &Cli) -> Result<AppConfig, UnidiscError> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(limit) = cli.order_limit {
        config.order_limit = limit;
    }
    if let Some(limit) = cli.suggestion_limit {
        config.suggestion_limit = limit;
    }
    tracing::debug!(?config, "Configuration resolved");
    Ok(config)
}

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), UnidiscError> {
    let config = resolve_config(&cli)?;
    let session = load_session(cli.scenario.as_deref())?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Report) => cmd_report(&session, &config, json_mode),
        Some(Commands::Orders { limit }) => {
            cmd_orders(&session, limit.unwrap_or(config.order_limit), json_mode)
        }
        Some(Commands::Check { course, completed }) => {
            cmd_check(&session, course, &completed, json_mode)
        }
        Some(Commands::Propagate { facts }) => cmd_propagate(&session, &facts, json_mode),
        Some(Commands::Recommend { student }) => {
            cmd_recommend(&session, &config, student, json_mode)
        }
        Some(Commands::Proof {
            course,
            completed,
            output,
        }) => cmd_proof(&session, course, &completed, output.as_deref(), json_mode),
        Some(Commands::Menu) | None => cmd_menu(session, config),
    }
}
