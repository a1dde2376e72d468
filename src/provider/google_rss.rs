// src/provider/google_rss.rs
//! Google News RSS provider.
//!
//! Maps a [`FetchConfig`] onto the provider's RSS endpoints (`/rss/search`
//! for free-text and date-range queries, `/rss/topics/{token}` for category
//! headlines) and parses the feed into [`RawRecord`]s. Can also be built
//! from a fixture string so parsing is testable without the network.

use metrics::{counter, histogram};
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::error::{Result, SearchError};
use crate::provider::{FetchConfig, FetchRequest, NewsProvider};
use crate::record::{clean_text, RawRecord};

const BASE_URL: &str = "https://news.google.com/rss";
const FETCH_TIMEOUT_SECS: u64 = 15;
const USER_AGENT: &str = concat!("gnews-explorer/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
    source: Option<Source>,
    // quick-xml's serde deserializer strips namespace prefixes, so
    // `<media:content>` arrives as `content`.
    #[serde(rename = "content")]
    media_content: Option<MediaContent>,
}

#[derive(Debug, Deserialize)]
struct Source {
    #[serde(rename = "$text")]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MediaContent {
    #[serde(rename = "@url")]
    url: Option<String>,
}

enum Transport {
    Http { client: reqwest::Client },
    /// Canned feed body for tests; the request URL is ignored.
    Fixture(String),
}

pub struct GoogleNewsRssProvider {
    transport: Transport,
}

impl GoogleNewsRssProvider {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SearchError::Http(e.to_string()))?;
        Ok(Self {
            transport: Transport::Http { client },
        })
    }

    pub fn from_fixture(content: &str) -> Self {
        Self {
            transport: Transport::Fixture(content.to_string()),
        }
    }

    async fn feed_body(&self, config: &FetchConfig) -> Result<String> {
        match &self.transport {
            Transport::Fixture(content) => Ok(content.clone()),
            Transport::Http { client } => {
                let (path, params) = request_parts(config);
                let resp = client
                    .get(path)
                    .query(&params)
                    .send()
                    .await
                    .map_err(|e| SearchError::Http(e.to_string()))?
                    .error_for_status()
                    .map_err(|e| SearchError::Provider(e.to_string()))?;
                resp.text()
                    .await
                    .map_err(|e| SearchError::Http(e.to_string()))
            }
        }
    }
}

/// Endpoint path plus query parameters for one call. Language and region
/// ride along as `hl`/`gl`/`ceid` on every request.
fn request_parts(config: &FetchConfig) -> (String, Vec<(&'static str, String)>) {
    let lang = config.language.code();
    let region = config.region.code();
    let mut params: Vec<(&'static str, String)> = Vec::new();

    let path = match &config.request {
        FetchRequest::Search { query, period } => {
            params.push(("q", format!("{query} when:{}", period.token())));
            format!("{BASE_URL}/search")
        }
        FetchRequest::Lookup { query } => {
            params.push(("q", query.clone()));
            format!("{BASE_URL}/search")
        }
        FetchRequest::TopicHeadlines { topic } => {
            format!("{BASE_URL}/topics/{}", topic.token())
        }
        FetchRequest::DateRange { query, start, end } => {
            params.push(("q", query.clone()));
            params.push(("tbs", format!("cdr:1,cd_min:{start},cd_max:{end}")));
            format!("{BASE_URL}/search")
        }
    };

    params.push(("hl", lang.to_string()));
    params.push(("gl", region.to_string()));
    params.push(("ceid", format!("{region}:{lang}")));
    (path, params)
}

fn parse_feed(body: &str) -> Result<Vec<RawRecord>> {
    let rss: Rss = from_str(body).map_err(|e| SearchError::Parse(e.to_string()))?;

    let mut out = Vec::with_capacity(rss.channel.item.len());
    for it in rss.channel.item {
        out.push(RawRecord {
            title: it.title.map(|t| clean_text(&t)),
            link: it.link,
            media: it.source.and_then(|s| s.name),
            // Raw passthrough; the pipeline never parses dates.
            date: it.pub_date,
            desc: it.description.map(|d| clean_text(&d)),
            img: it.media_content.and_then(|m| m.url),
        });
    }
    Ok(out)
}

#[async_trait::async_trait]
impl NewsProvider for GoogleNewsRssProvider {
    async fn fetch(&self, config: &FetchConfig) -> Result<Vec<RawRecord>> {
        let body = self.feed_body(config).await?;

        let t0 = std::time::Instant::now();
        let records = parse_feed(&body)?;
        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("search_parse_ms").record(ms);
        counter!("search_records_total").increment(records.len() as u64);

        tracing::debug!(
            provider = self.name(),
            records = records.len(),
            "feed parsed"
        );
        Ok(records)
    }

    fn name(&self) -> &'static str {
        "GoogleNewsRss"
    }
}
