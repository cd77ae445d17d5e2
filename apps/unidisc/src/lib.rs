//! # unidisc
//!
//! The UNIDISC application layer: the interactive menu, one-shot CLI
//! commands, configuration layering and scenario loading on top of
//! `unidisc-core`.

pub mod cli;
pub mod config;
pub mod display;
pub mod menu;
pub mod scenario;

pub use config::AppConfig;
pub use menu::Menu;
pub use scenario::Scenario;
