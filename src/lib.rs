//! # Connect Four
//!
//! A two-player Connect Four game with a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] : Core game logic: board, player, state machine
//! - [`ui`] : Terminal UI: game view, player colors, computer-player stub
//! - [`config`] : TOML configuration loading and validation
//! - [`logging`] : Tracing subscriber setup
//! - [`error`] : Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
