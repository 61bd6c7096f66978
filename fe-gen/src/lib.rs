#![deny(
    // Pedantic on purpose: an inline allow is the way to flag "this is fine, but take a second look."
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
)]

//! # fe-gen – synthetic manufacturing events for load-testing the ingestion service
//!
//! fe-gen builds a fixed batch of fake [`EventRecord`]s and prints them as one pretty-printed
//! JSON array, ready to be posted to the batch ingestion endpoint.
//!
//! ## Pipeline overview
//! 1. Anchor – every timestamp is an offset from
//!    [`DEFAULT_ANCHOR`](crate::generator::DEFAULT_ANCHOR).
//! 2. Generation ([`generate_batch`](crate::generator::generate_batch)) – one record per index,
//!    in order. Ids and `eventTime` are pure functions of the index; `receivedTime` delay,
//!    `durationMs` and `defectCount` are drawn from the supplied RNG.
//! 3. Output ([`write_pretty`](crate::output::write_pretty)) – one `serde_json` pretty-print
//!    pass (2-space indent) plus a trailing newline.
//!
//! [`generator::run`] strings the three together with an unseeded thread-local RNG; tests call
//! the pieces directly with a seeded one.

pub mod generator;
pub mod model;
pub mod output;

pub use generator::{
    generate_batch,
    run,
};
pub use model::EventRecord;
pub use output::write_pretty;

/// Log filter used when `--verbosity` is not given; a successful run logs nothing at this level.
pub const DEFAULT_VERBOSITY: &str = "warn";
