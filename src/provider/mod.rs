// src/provider/mod.rs
pub mod google_rss;

use crate::error::Result;
use crate::intent::{Language, Period, Region, Topic};
use crate::record::RawRecord;

/// What one provider call should retrieve. Exactly one retrieval mode per
/// call; a keyword intent expands into a `Search` call plus a `Lookup` call
/// because the provider exposes those as separate modes with only partially
/// overlapping result sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Full-text search, constrained to a relative time window.
    Search { query: String, period: Period },
    /// Direct topical news lookup for the same free-text query.
    Lookup { query: String },
    /// Category headlines addressed by the provider's opaque topic token.
    TopicHeadlines { topic: Topic },
    /// Full-text search bounded by provider-formatted dates (`mm/dd/yyyy`,
    /// or the raw user input when formatting fell back).
    DateRange {
        query: String,
        start: String,
        end: String,
    },
}

/// Immutable per-call configuration. Language and region travel with every
/// call instead of living as shared provider state, so call order can never
/// change what a call means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub language: Language,
    pub region: Region,
    pub request: FetchRequest,
}

/// One news provider. Each call is independent; the pipeline issues no
/// retries and assumes nothing about idempotency across repeated calls.
#[async_trait::async_trait]
pub trait NewsProvider: Send + Sync {
    async fn fetch(&self, config: &FetchConfig) -> Result<Vec<RawRecord>>;
    fn name(&self) -> &'static str;
}
