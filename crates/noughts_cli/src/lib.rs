//! Terminal front end for the noughts engine.
//!
//! Handles everything the engine leaves to its caller: reading moves,
//! printing boards, the start menu, configuration and logging setup.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod console;
pub mod render;

pub use config::{ConfigError, GameConfig};
