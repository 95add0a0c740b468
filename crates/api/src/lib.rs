//! REST client for the taskdeck task service.
//!
//! This crate wraps the task collection endpoint with typed calls:
//!
//! - [`TaskApi::list`]: `GET /tasks`
//! - [`TaskApi::create`]: `POST /tasks`
//! - [`TaskApi::update`]: `PUT /tasks/{id}`
//! - [`TaskApi::delete`]: `DELETE /tasks/{id}`
//!
//! The service's status codes and error bodies are not part of the
//! contract; any rejected call surfaces as an [`Error`] and the caller
//! treats it uniformly as failure.
//!
//! # Examples
//!
//! ```no_run
//! use taskdeck_api::TaskApi;
//! use taskdeck_protocol::TaskDraft;
//!
//! # async fn example() -> taskdeck_api::Result<()> {
//! let api = TaskApi::new("http://localhost:3000");
//!
//! let draft = TaskDraft {
//!     name: "Design homepage mockup".to_string(),
//!     due_date: chrono::NaiveDate::from_ymd_opt(2026, 1, 15),
//!     ..TaskDraft::default()
//! };
//! let created = api.create(&draft).await?;
//! println!("server assigned id {}", created.id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;

pub use client::TaskApi;
pub use error::{Error, Result};
