//! Event handling for the terminal UI.
//!
//! This module contains the event loop orchestrator and event consumer
//! that coordinate user input, engine commands, and UI updates.

mod consumer;
mod handlers;
mod r#loop;

pub use consumer::CliEventConsumer;
pub use r#loop::EventLoop;
