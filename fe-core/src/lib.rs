#![deny(
    // Pedantic on purpose: an inline allow is the way to flag "this is fine, but take a second look."
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
)]

//! # fe-core – shared plumbing for the Factory Events tools
//!
//! Holds the pieces every tool in the workspace needs but none of them owns: the crate-wide
//! [`errors::Error`] type, the `tracing` subscriber setup in [`logging`], and the UTC
//! millisecond timestamp helpers in [`time`] that match the wire format of the ingestion
//! service (`yyyy-MM-dd'T'HH:mm:ss.SSS'Z'`).

pub mod errors;
pub mod logging;
#[cfg(any(test, feature = "testutils"))]
pub mod testutils;
pub mod time;

pub use errors::{
    Error,
    Result,
};
