//! Cross-frontend primitives for presenting a scorekeeping session.
//!
//! Houses message logging, outcome handling, formatting and view-model types
//! that both the terminal UI and the script frontend reuse.
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod message;
pub mod presentation;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact};
pub use presentation::PresentationMapper;
pub use view_model::ViewModel;
