//! Terminal UI for the taskdeck application.
//!
//! This crate provides a Ratatui-based terminal interface for managing a
//! task board with four status columns. Tasks can be created, edited, and
//! deleted through a dialog, and moved between columns either by grabbing
//! them with the keyboard or by dragging them with the mouse.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`manager`]: Board state coordination over the API client
//! - [`column_state`]: Per-column drag-and-drop and menu state machines
//! - [`form`]: Add/edit dialog state
//! - [`notify`]: Toast notification service and tray
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event polling and key mappings
//! - [`widgets`]: Rendering functions for every visual component
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use taskdeck_api::TaskApi;
//! use taskdeck_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let api = TaskApi::new("http://localhost:3000");
//!     let mut app = App::new(api, Duration::from_secs(3));
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod column_state;
pub mod event;
pub mod form;
pub mod manager;
pub mod notify;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use manager::{BoardState, TaskManager};
pub use notify::Notifier;
