//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;

/// A frontend owns its scoring engine and drives it until the user quits.
///
/// # Implementations
///
/// - `CliApp`: Terminal-based UI (ratatui + crossterm)
/// - `ScriptApp`: Line-oriented commands on stdin, JSON snapshots on stdout
#[async_trait]
pub trait FrontendApp: Send {
    async fn run(self) -> Result<()>
    where
        Self: Sized;
}
