//! CLI-specific configuration for the terminal UI and logging.
use std::env;
use std::path::PathBuf;

/// CLI configuration.
///
/// This contains settings specific to the terminal frontends,
/// separate from cross-frontend configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SCOREKEEPER_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8)
    /// - `SCOREKEEPER_LOG_DIR` - Directory for session logs (default: platform cache dir)
    /// - `SCOREKEEPER_SESSION_ID` - Session log sub-directory (default: `session_<unix time>`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("SCOREKEEPER_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }
        if let Some(dir) = read_env::<PathBuf>("SCOREKEEPER_LOG_DIR") {
            config.logging.log_dir = Some(dir);
        }
        if let Some(session) = read_env::<String>("SCOREKEEPER_SESSION_ID") {
            config.logging.session_id = Some(session);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct LoggingConfig {
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
    pub session_id: Option<String>,
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
