// src/api.rs
use std::sync::Arc;

use shuttle_axum::axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::config::AppConfig;
use crate::error::SearchError;
use crate::intent::{Language, Period, Region, SearchIntent, SearchMode, SearchPrefs, Topic};
use crate::pipeline;
use crate::provider::NewsProvider;
use crate::view::{display_image, display_link};

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn NewsProvider>,
    pub defaults: AppConfig,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/search", get(search))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct SearchParams {
    mode: String,
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    lang: Option<String>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    period: Option<String>,
    #[serde(default)]
    topic: Option<String>,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    max_results: Option<usize>,
    #[serde(default)]
    sort: Option<bool>,
    #[serde(default)]
    images: Option<bool>,
}

#[derive(serde::Serialize)]
struct ResultItem {
    title: String,
    link: String,
    media: String,
    date: Option<String>,
    description: Option<String>,
    image: Option<String>,
}

#[derive(serde::Serialize)]
struct SearchResponse {
    count: usize,
    results: Vec<ResultItem>,
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

/// Build a validated intent from query params, filling gaps from config
/// defaults. Validation failures surface before any provider call.
fn intent_from_params(
    params: &SearchParams,
    defaults: &AppConfig,
) -> Result<SearchIntent, SearchError> {
    let language = match &params.lang {
        Some(s) => Language::parse(s)?,
        None => defaults.language,
    };
    let region = match &params.region {
        Some(s) => Region::parse(s)?,
        None => defaults.region,
    };

    let query = params.q.clone().unwrap_or_default();
    let mode = match params.mode.to_ascii_lowercase().as_str() {
        "keyword" => {
            let period = match &params.period {
                Some(s) => Period::parse(s)?,
                None => Period::Day7,
            };
            SearchMode::Keyword { query, period }
        }
        "topic" => {
            let name = params
                .topic
                .as_deref()
                .ok_or_else(|| SearchError::Validation("missing topic selection".into()))?;
            SearchMode::Topic {
                topic: Topic::parse(name)?,
            }
        }
        "daterange" => {
            let start_date = params
                .from
                .clone()
                .ok_or_else(|| SearchError::Validation("missing start date".into()))?;
            let end_date = params
                .to
                .clone()
                .ok_or_else(|| SearchError::Validation("missing end date".into()))?;
            SearchMode::DateRange {
                query,
                start_date,
                end_date,
            }
        }
        other => {
            return Err(SearchError::Validation(format!(
                "unknown mode '{other}' (expected keyword, topic or daterange)"
            )))
        }
    };

    let base = defaults.prefs();
    let prefs = SearchPrefs {
        max_results: params.max_results.unwrap_or(base.max_results),
        sort_chronological: params.sort.unwrap_or(base.sort_chronological),
        show_images: params.images.unwrap_or(base.show_images),
    };

    SearchIntent::new(mode, language, region, prefs)
}

fn error_response(e: SearchError) -> (StatusCode, Json<ErrorBody>) {
    let status = match e {
        SearchError::Validation(_) | SearchError::Config(_) => StatusCode::BAD_REQUEST,
        SearchError::Provider(_) | SearchError::Http(_) | SearchError::Parse(_) => {
            StatusCode::BAD_GATEWAY
        }
    };
    (
        status,
        Json(ErrorBody {
            error: e.to_string(),
        }),
    )
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, (StatusCode, Json<ErrorBody>)> {
    let intent = intent_from_params(&params, &state.defaults).map_err(error_response)?;

    let records = pipeline::run_search(state.provider.as_ref(), &intent)
        .await
        .map_err(error_response)?;

    let show_images = intent.prefs.show_images;
    let results = records
        .iter()
        .map(|r| ResultItem {
            title: r.title.clone(),
            link: display_link(r),
            media: r.media.clone(),
            date: r.published_date.clone(),
            description: r.description.clone(),
            image: display_image(r, show_images).map(str::to_string),
        })
        .collect::<Vec<_>>();

    Ok(Json(SearchResponse {
        count: results.len(),
        results,
    }))
}
