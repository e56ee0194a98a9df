//! CLI infrastructure for the noughts console game
//!
//! This module provides the interactive front-end: prompting for setup,
//! driving sessions through the console adapters, and position analysis.

pub mod commands;
pub mod config;
pub mod console;
pub mod output;
