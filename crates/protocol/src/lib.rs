//! Shared types and contracts for taskdeck.
//!
//! This crate defines the data model the rest of the application is built
//! on: task records as exchanged with the REST endpoint, the four display
//! buckets and the board assembled from them, payload validation, and the
//! transfer payload attached to drag gestures.
//!
//! # Overview
//!
//! - [`Task`], [`TaskDraft`], [`TaskStatus`]: the task record, its editable
//!   subset, and its status (with an explicit [`TaskStatus::Unknown`]
//!   variant for unrecognized server values)
//! - [`Bucket`], [`Column`], [`Board`]: the four status columns and the
//!   classification step ([`Board::from_tasks`]) that partitions and sorts
//!   a flat task list
//! - [`validate`] and [`ValidationError`]: fail-fast field validation run
//!   before any network call
//! - [`DragPayload`]: the serialized drag transfer payload, with tolerant
//!   parsing
//! - [`Message`]: user intents emitted by the TUI input layer
//!
//! # Classification
//!
//! Bucket membership is a pure function of a task's status: it is
//! recomputed on every load and never stored separately, so the board
//! cannot drift from the underlying records. Columns sort ascending by due
//! date, with missing or unparseable dates pinned to the end.
//!
//! ```
//! use taskdeck_protocol::{Board, Bucket, Task};
//!
//! let tasks: Vec<Task> = serde_json::from_str(
//!     r#"[
//!         {"id":"1","taskName":"Write docs","status":"completed"},
//!         {"id":"2","taskName":"Fix bug","status":"in progress"}
//!     ]"#,
//! ).unwrap();
//!
//! let board = Board::from_tasks(tasks);
//! assert_eq!(board.column(Bucket::Completed).len(), 1);
//! assert_eq!(board.column(Bucket::InProgress).len(), 1);
//! ```

pub mod board;
pub mod drag;
pub mod message;
pub mod task;
pub mod validate;

pub use board::{Board, Bucket, Column};
pub use drag::DragPayload;
pub use message::Message;
pub use task::{Task, TaskDraft, TaskId, TaskStatus};
pub use validate::{DESCRIPTION_LIMIT, NAME_LIMIT, ValidationError, validate};
