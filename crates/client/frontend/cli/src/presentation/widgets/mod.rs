//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the ViewModel and renders to a
//! terminal frame. Colors come from the PresentationMapper theme.

pub mod board;
pub mod footer;
pub mod header;
pub mod help;
pub mod messages;
pub mod scoreboard;
pub mod wager;
