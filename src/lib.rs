//! # Pigeonhole - An In-Memory Post Office
//!
//! Pigeonhole is a small messaging facility: a set of named post office boxes,
//! one per registered username, each holding an ordered sequence of messages.
//! It supports priority delivery (urgent messages jump to the front of the
//! box), bulk or partial inbox retrieval with read-state tracking, and
//! case-sensitive substring search over message titles and bodies.
//!
//! The whole model is single-process and in-memory: boxes live for the
//! lifetime of the [`office::PostOffice`] that owns them, and there is no
//! persistence, authentication, or network surface.
//!
//! ## Quick Start
//!
//! ```rust
//! use pigeonhole::office::{Message, OfficeError, PostOffice};
//!
//! fn main() -> Result<(), OfficeError> {
//!     let mut office = PostOffice::new(["Newman", "Jerry"]);
//!
//!     let id = office.deliver(Message::urgent(
//!         "Jerry", "Newman", "Postman", "Hello Newman",
//!     ))?;
//!     assert_eq!(id, 1);
//!
//!     // First read returns the message and marks it read; a second
//!     // read of the same window comes back empty.
//!     let unread = office.read_inbox("Newman", None)?;
//!     assert_eq!(unread.len(), 1);
//!     assert!(office.read_inbox("Newman", None)?.is_empty());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`office`] - The post office store, message type, and error taxonomy
//! - [`config`] - TOML configuration for the CLI (usernames, logging)
//! - [`logutil`] - Log sanitization helpers for user-supplied strings

pub mod config;
pub mod logutil;
pub mod office;
