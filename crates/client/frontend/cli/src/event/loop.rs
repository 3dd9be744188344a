//! Event loop orchestrating user input, engine commands, and rendering.
//!
//! The loop owns the [`ScoringEngine`]; every key that maps to a command is
//! executed synchronously and the view model is rebuilt from the new state.

use anyhow::Result;
use scorekeeper_core::ScoringEngine;
use scorekeeper_frontend_core::{EventConsumer, view_model::ViewModel};
use tokio::time::{self, Duration};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui, state::AppState};

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop managing the engine, view model, and UI state.
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) engine: ScoringEngine,
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    pub(crate) app_state: AppState,
    /// Rebuilt from the engine after every applied command.
    pub(crate) view_model: ViewModel,
    pub(crate) cli_config: CliConfig,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(engine: ScoringEngine, consumer: C, cli_config: CliConfig) -> Self {
        let view_model = ViewModel::from_engine(&engine);

        Self {
            engine,
            input: InputHandler::new(),
            consumer,
            app_state: AppState::new(),
            view_model,
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        self.render(terminal)?;

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Interrupt received");
                    break;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(self.consumer)
    }
}
