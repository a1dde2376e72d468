// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod config;
pub mod error;
pub mod image;
pub mod intent;
pub mod metrics;
pub mod pipeline;
pub mod provider;
pub mod record;
pub mod view;

// ---- Re-exports for stable public API ----
pub use crate::error::SearchError;
pub use crate::intent::{Language, Period, Region, SearchIntent, SearchMode, SearchPrefs, Topic};
pub use crate::pipeline::run_search;
pub use crate::record::NewsRecord;
