//! Terminal frontends for the scorekeeper.
//!
//! This crate provides the interactive terminal UI and the headless script
//! frontend. Both own a [`scorekeeper_core::ScoringEngine`] and dispatch
//! commands to it; neither contains scoring rules of its own.

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod script;
mod state;

pub use app::CliApp;
pub use config::{CliConfig, LoggingConfig, UiConfig};
pub use script::{ScriptApp, ScriptSummary, run_script};

// Re-export for convenience (used in main.rs)
pub use scorekeeper_frontend_core::FrontendConfig;
