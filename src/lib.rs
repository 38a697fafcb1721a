// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod render;
pub mod roster;
pub mod runner;
pub mod specs;
pub mod store;

pub use error::{Result, RosterError};
