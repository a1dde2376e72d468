// tests/pipeline.rs
//
// End-to-end pipeline behavior against a scripted mock provider:
// call planning, merge order, normalization, capping and error wrapping.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use gnews_explorer::error::{Result, SearchError};
use gnews_explorer::intent::{Language, Period, Region, SearchIntent, SearchMode, SearchPrefs, Topic};
use gnews_explorer::pipeline::run_search;
use gnews_explorer::provider::{FetchConfig, FetchRequest, NewsProvider};
use gnews_explorer::record::RawRecord;

/// Scripted provider: pops one canned response per call and records the
/// configs it was called with.
struct MockProvider {
    responses: Mutex<VecDeque<Result<Vec<RawRecord>>>>,
    calls: Mutex<Vec<FetchConfig>>,
}

impl MockProvider {
    fn new(responses: Vec<Result<Vec<RawRecord>>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl NewsProvider for MockProvider {
    async fn fetch(&self, config: &FetchConfig) -> Result<Vec<RawRecord>> {
        self.calls.lock().unwrap().push(config.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn name(&self) -> &'static str {
        "MockProvider"
    }
}

fn raw(title: &str, link: &str) -> RawRecord {
    RawRecord {
        title: Some(title.to_string()),
        link: Some(link.to_string()),
        ..Default::default()
    }
}

fn intent(mode: SearchMode, max_results: usize) -> SearchIntent {
    let prefs = SearchPrefs {
        max_results,
        ..Default::default()
    };
    SearchIntent::new(mode, Language::En, Region::Us, prefs).unwrap()
}

fn keyword(query: &str) -> SearchIntent {
    intent(
        SearchMode::Keyword {
            query: query.to_string(),
            period: Period::Day7,
        },
        30,
    )
}

#[tokio::test]
async fn keyword_merges_both_calls_in_order_without_dedup() {
    // The same link appears in both batches; both copies must survive.
    let provider = MockProvider::new(vec![
        Ok(vec![raw("A1", "https://a.example/1"), raw("A2", "https://a.example/2")]),
        Ok(vec![raw("B1", "https://b.example/1"), raw("A2", "https://a.example/2")]),
    ]);

    let out = run_search(&provider, &keyword("fed rates")).await.unwrap();

    assert_eq!(provider.call_count(), 2);
    let titles: Vec<&str> = out.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["A1", "A2", "B1", "A2"]);
}

#[tokio::test]
async fn keyword_issues_search_then_lookup() {
    let provider = MockProvider::new(vec![Ok(vec![]), Ok(vec![])]);
    run_search(&provider, &keyword("rust")).await.unwrap();

    let calls = provider.calls.lock().unwrap();
    assert!(matches!(calls[0].request, FetchRequest::Search { .. }));
    assert!(matches!(calls[1].request, FetchRequest::Lookup { .. }));
    // Language and region travel with every call.
    assert_eq!(calls[0].language, Language::En);
    assert_eq!(calls[1].region, Region::Us);
}

#[tokio::test]
async fn empty_keyword_query_makes_no_calls_and_no_error() {
    let provider = MockProvider::new(vec![]);
    let out = run_search(&provider, &keyword("")).await.unwrap();
    assert!(out.is_empty());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn empty_date_range_query_makes_no_calls_and_no_error() {
    let provider = MockProvider::new(vec![]);
    let it = intent(
        SearchMode::DateRange {
            query: String::new(),
            start_date: "2025-01-01".into(),
            end_date: "2025-01-31".into(),
        },
        30,
    );
    let out = run_search(&provider, &it).await.unwrap();
    assert!(out.is_empty());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn topic_mode_caps_to_max_results_preserving_prefix() {
    let records: Vec<RawRecord> = (0..15)
        .map(|i| raw(&format!("T{i}"), &format!("https://example.com/{i}")))
        .collect();
    let provider = MockProvider::new(vec![Ok(records)]);

    let it = intent(
        SearchMode::Topic {
            topic: Topic::Technology,
        },
        10,
    );
    let out = run_search(&provider, &it).await.unwrap();

    assert_eq!(provider.call_count(), 1);
    assert_eq!(out.len(), 10);
    for (i, rec) in out.iter().enumerate() {
        assert_eq!(rec.title, format!("T{i}"));
    }
}

#[tokio::test]
async fn invalid_records_are_dropped_silently() {
    let provider = MockProvider::new(vec![Ok(vec![
        raw("Good", "example.com/good"),
        RawRecord {
            title: Some(String::new()),
            link: Some("https://example.com/no-title".into()),
            ..Default::default()
        },
        RawRecord {
            title: Some("No link".into()),
            link: None,
            ..Default::default()
        },
    ])]);

    let it = intent(
        SearchMode::Topic {
            topic: Topic::World,
        },
        30,
    );
    let out = run_search(&provider, &it).await.unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].link, "https://example.com/good");
}

#[tokio::test]
async fn provider_failure_aborts_with_single_error() {
    let provider = MockProvider::new(vec![Err(SearchError::Provider(
        "connection reset".into(),
    ))]);

    let it = intent(
        SearchMode::Topic {
            topic: Topic::Health,
        },
        30,
    );
    let err = run_search(&provider, &it).await.unwrap_err();
    assert!(matches!(err, SearchError::Provider(_)));
}

#[tokio::test]
async fn failure_on_second_keyword_call_yields_no_partial_output() {
    let provider = MockProvider::new(vec![
        Ok(vec![raw("A1", "https://a.example/1")]),
        Err(SearchError::Http("timeout".into())),
    ]);

    let result = run_search(&provider, &keyword("markets")).await;
    assert!(result.is_err());
    assert_eq!(provider.call_count(), 2);
}
