//! Bonzi Browser — a minimal tabbed browser shell.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod telemetry;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
