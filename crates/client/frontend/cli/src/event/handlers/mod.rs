//! Event handler implementations for EventLoop.
//!
//! - `input`: Keyboard polling and key dispatch
//! - `command`: Engine execution and view model refresh
//! - `rendering`: Terminal rendering

mod command;
mod input;
mod rendering;
