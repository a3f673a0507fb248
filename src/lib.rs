//! Playground - terminal mini-games library.
//!
//! The game engines and the playground controller are UI-agnostic and
//! exposed for testing; `ui` and `input` hold the terminal front end.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod content;
pub mod games;
pub mod input;
pub mod playground;
pub mod ui;
