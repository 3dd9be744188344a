//! Glue code tying the scoring engine and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use scorekeeper_core::ScoringEngine;
use scorekeeper_frontend_core::{
    EventConsumer, FrontendConfig, frontend::FrontendApp, message::MessageLog,
};

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;

pub struct CliApp {
    config: FrontendConfig,
    cli_config: CliConfig,
    engine: ScoringEngine,
}

impl CliApp {
    pub fn new(config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self::with_engine(config, cli_config, ScoringEngine::new())
    }

    pub fn with_engine(config: FrontendConfig, cli_config: CliConfig, engine: ScoringEngine) -> Self {
        Self {
            config,
            cli_config,
            engine,
        }
    }

    pub async fn execute(self) -> Result<()> {
        tracing::info!("Terminal UI starting...");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let CliApp {
            config,
            cli_config,
            engine,
        } = self;

        let mut messages = MessageLog::new(config.messages.capacity);
        messages.push_text("Ready. Pick a clue amount, or press ? for keys.");

        let consumer = CliEventConsumer::new(messages, config.messages.clone());
        let event_loop = EventLoop::new(engine, consumer, cli_config);

        let consumer = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!(
            messages = consumer.message_log().len(),
            "Terminal UI exiting"
        );

        Ok(())
    }
}

#[async_trait]
impl FrontendApp for CliApp {
    async fn run(self) -> Result<()> {
        self.execute().await
    }
}
