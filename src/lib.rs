//! Folio serves a read-only portfolio as a full-screen terminal UI, one
//! session per connection.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the content registry, configuration, and the per-session
//!   navigation state machine.
//! - [`ui`] renders frames, formats records, and runs the session loop that
//!   turns terminal input and timers into state machine events.
//! - [`utils`] holds text wrapping and logging setup.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which loads configuration and content and
//! hands off to [`ui::session::run`].

pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
