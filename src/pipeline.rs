// src/pipeline.rs
//! The search pipeline: plan → fetch → merge → normalize → cap.
//!
//! One invocation per user action, strictly sequential. A keyword intent
//! expands to two provider calls whose results are concatenated A-then-B;
//! no deduplication, no reordering. Any provider failure aborts the whole
//! invocation — the caller gets either a complete capped sequence or a
//! single error, never a partial list.

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge};
use once_cell::sync::OnceCell;

use crate::error::Result;
use crate::intent::{format_provider_date, SearchIntent, SearchMode};
use crate::provider::{FetchConfig, FetchRequest, NewsProvider};
use crate::record::{normalize_record, NewsRecord, RawRecord};

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("search_records_total", "Raw records parsed from provider feeds.");
        describe_counter!("search_kept_total", "Records kept after normalization.");
        describe_counter!(
            "search_dropped_total",
            "Records dropped for missing title or link."
        );
        describe_counter!("search_fetches_total", "Provider calls issued.");
        describe_counter!("search_provider_errors_total", "Provider fetch/parse errors.");
        describe_histogram!("search_parse_ms", "Provider feed parse time in milliseconds.");
        describe_gauge!("search_last_run_ts", "Unix ts when a search pipeline last ran.");
    });
}

/// Expand an intent into the ordered list of provider calls it requires.
///
/// Keyword mode issues two calls with the same query string — a full-text
/// search and a direct topical lookup — because the provider exposes these
/// as separate retrieval modes with only partially overlapping results.
/// An empty query (keyword or date-range) means no calls at all.
pub fn fetch_plan(intent: &SearchIntent) -> Vec<FetchConfig> {
    let call = |request: FetchRequest| FetchConfig {
        language: intent.language,
        region: intent.region,
        request,
    };

    match &intent.mode {
        SearchMode::Keyword { query, period } => {
            if query.is_empty() {
                return Vec::new();
            }
            vec![
                call(FetchRequest::Search {
                    query: query.clone(),
                    period: *period,
                }),
                call(FetchRequest::Lookup {
                    query: query.clone(),
                }),
            ]
        }
        SearchMode::Topic { topic } => vec![call(FetchRequest::TopicHeadlines { topic: *topic })],
        SearchMode::DateRange {
            query,
            start_date,
            end_date,
        } => {
            if query.is_empty() {
                return Vec::new();
            }
            vec![call(FetchRequest::DateRange {
                query: query.clone(),
                start: format_provider_date(start_date),
                end: format_provider_date(end_date),
            })]
        }
    }
}

/// Normalize a merged raw sequence in order: drop records without title or
/// link, fix link schemes. Returns the kept records and the drop count.
pub fn normalize_all(raw: Vec<RawRecord>) -> (Vec<NewsRecord>, usize) {
    let mut dropped = 0usize;
    let mut kept = Vec::with_capacity(raw.len());
    for rec in raw {
        match normalize_record(rec) {
            Some(n) => kept.push(n),
            None => dropped += 1,
        }
    }
    (kept, dropped)
}

/// Run one search invocation against `provider`.
///
/// Fetches run one after the other in plan order and the merged sequence is
/// their strict concatenation; duplicates across the two keyword calls are
/// kept. The normalized sequence is truncated to `max_results`. The
/// `sort_chronological` preference is accepted but never applied; output
/// order is fetch/merge order only.
pub async fn run_search(
    provider: &dyn NewsProvider,
    intent: &SearchIntent,
) -> Result<Vec<NewsRecord>> {
    ensure_metrics_described();

    let plan = fetch_plan(intent);
    let mut raw: Vec<RawRecord> = Vec::new();
    for config in &plan {
        counter!("search_fetches_total").increment(1);
        match provider.fetch(config).await {
            Ok(mut batch) => raw.append(&mut batch),
            Err(e) => {
                tracing::warn!(error = %e, provider = provider.name(), "provider call failed");
                counter!("search_provider_errors_total").increment(1);
                // All-or-nothing: no partial result list.
                return Err(e);
            }
        }
    }

    let (mut kept, dropped) = normalize_all(raw);
    kept.truncate(intent.prefs.max_results);

    counter!("search_kept_total").increment(kept.len() as u64);
    counter!("search_dropped_total").increment(dropped as u64);
    gauge!("search_last_run_ts").set(chrono::Utc::now().timestamp().max(0) as f64);

    tracing::info!(
        calls = plan.len(),
        kept = kept.len(),
        dropped,
        "search pipeline finished"
    );
    Ok(kept)
}
