// src/record.rs
//! Raw provider records and their normalized form.
//!
//! [`RawRecord`] mirrors the loose shape the provider returns: every field
//! optional. [`normalize_record`] turns it into an immutable [`NewsRecord`]
//! or drops it. Records carry no identity beyond the link string; the
//! pipeline performs no deduplication, so identical links may coexist.

use serde::{Deserialize, Serialize};

/// One raw article entry as returned by a provider, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub title: Option<String>,
    pub link: Option<String>,
    pub media: Option<String>,
    pub date: Option<String>,
    pub desc: Option<String>,
    pub img: Option<String>,
}

/// A normalized article entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRecord {
    /// Non-empty by construction.
    pub title: String,
    /// Starts with `http://` or `https://` by construction.
    pub link: String,
    pub media: String,
    /// Raw provider string, passed through unparsed.
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Prepend `https://` unless the string already carries an http(s) scheme.
/// Idempotent; applied once during normalization and again at emission so
/// any record path that bypasses the first site is still corrected.
pub fn ensure_scheme(link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        link.to_string()
    } else {
        format!("https://{link}")
    }
}

/// Validate and normalize one raw record. Returns `None` (record dropped)
/// when the title or link is empty or absent.
pub fn normalize_record(raw: RawRecord) -> Option<NewsRecord> {
    let title = raw.title.filter(|t| !t.is_empty())?;
    let link = raw.link.filter(|l| !l.is_empty())?;

    Some(NewsRecord {
        title,
        link: ensure_scheme(&link),
        media: raw.media.unwrap_or_default(),
        published_date: raw.date,
        description: raw.desc.filter(|d| !d.is_empty()),
        image_url: raw.img,
    })
}

/// Normalize provider text: decode HTML entities, strip tags, collapse
/// whitespace. Used by providers when mapping feed items, not part of the
/// drop/scheme contract above.
pub fn clean_text(s: &str) -> String {
    let mut out = html_escape::decode_html_entities(s).to_string();

    static RE_TAGS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").unwrap());
    out = re_tags.replace_all(&out, "").to_string();

    static RE_WS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").to_string();

    out.trim().to_string()
}
