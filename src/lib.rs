#![doc(test(attr(deny(warnings))))]

//! Expense Core offers the persistence and query primitives behind a small
//! personal expense tracker CLI: one JSON document on disk, an append-only
//! audit log, and filter/sort/summary helpers over the loaded records.

pub mod cli;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
