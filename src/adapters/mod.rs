//! Adapters implementing the contestant port.
//!
//! The console contestant lives in [`crate::cli`] next to the rest of the
//! terminal handling.

pub mod computer;
pub mod scripted;

pub use computer::ComputerContestant;
pub use scripted::ScriptedContestant;
