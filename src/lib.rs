//! # Connect Four
//!
//! A two-player Connect Four game for the terminal, built with Ratatui.
//! The rules engine lives in [`game`] and knows nothing about rendering;
//! the [`ui`] module feeds column selections into it and draws the result.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, state machine
//! - [`ui`] — Terminal UI: game view and keyboard input
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
