//! Client module for the gestiones reporting service.
//!
//! Covers the wire contract of the read-only items endpoint: the record
//! model, the query descriptor, and the HTTP client that executes it.

pub mod client;
pub mod models;
pub mod query;

pub use client::ItemsClient;
pub use models::{Item, LIST1_MARKER, LIST2_MARKER};
pub use query::{ItemQuery, StatusFilter};
