//! Configuration management for the taskdeck application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from multiple sources (files, environment variables, defaults).
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following
//! priority (highest to lowest):
//!
//! 1. Environment variable (`TASKDECK_API_URL`)
//! 2. Local config (`./taskdeck.json5` or `./taskdeck.json`)
//! 3. User config (`<config dir>/taskdeck/config.json5` or `config.json`)
//! 4. Built-in defaults
//!
//! # File Format
//!
//! Config files are JSON5, so comments and trailing commas are fine:
//!
//! ```json5
//! {
//!   // Where the task service lives
//!   api: { base_url: "http://localhost:3000" },
//!   toast: { duration_ms: 3000 },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use taskdeck_config::Config;
//!
//! # fn example() -> taskdeck_config::Result<()> {
//! let config = Config::load()?;
//! println!("talking to {}", config.api.base_url);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{ApiConfig, Config, ToastConfig};
pub use error::{ConfigError, Result};
