// src/intent.rs
//! Search intent: what the user asked for, validated once per invocation.
//!
//! A [`SearchIntent`] is built from raw UI/CLI strings, checked here, and
//! read-only afterwards. Exactly one [`SearchMode`] is active per intent.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Supported interface languages (Google News `hl` codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
    Hi,
    Ar,
    Ja,
    Ko,
    Zh,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::It => "it",
            Self::Pt => "pt",
            Self::Hi => "hi",
            Self::Ar => "ar",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::Zh => "zh",
        }
    }

    pub fn parse(s: &str) -> Result<Self, SearchError> {
        Self::all()
            .iter()
            .copied()
            .find(|l| l.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| SearchError::Validation(format!("unknown language '{s}'")))
    }

    pub fn all() -> &'static [Language] {
        &[
            Self::En,
            Self::Es,
            Self::Fr,
            Self::De,
            Self::It,
            Self::Pt,
            Self::Hi,
            Self::Ar,
            Self::Ja,
            Self::Ko,
            Self::Zh,
        ]
    }
}

/// Supported regions (Google News `gl` codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Us,
    Uk,
    In,
    Au,
    Ca,
    Sg,
    Nz,
    Za,
}

impl Region {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Uk => "UK",
            Self::In => "IN",
            Self::Au => "AU",
            Self::Ca => "CA",
            Self::Sg => "SG",
            Self::Nz => "NZ",
            Self::Za => "ZA",
        }
    }

    pub fn parse(s: &str) -> Result<Self, SearchError> {
        Self::all()
            .iter()
            .copied()
            .find(|r| r.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| SearchError::Validation(format!("unknown region '{s}'")))
    }

    pub fn all() -> &'static [Region] {
        &[
            Self::Us,
            Self::Uk,
            Self::In,
            Self::Au,
            Self::Ca,
            Self::Sg,
            Self::Nz,
            Self::Za,
        ]
    }
}

/// Relative time window for keyword searches (provider `when:` tokens).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    Hour1,
    Hour4,
    Hour12,
    Day1,
    Day7,
    Day14,
    Day30,
}

impl Period {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Hour1 => "1h",
            Self::Hour4 => "4h",
            Self::Hour12 => "12h",
            Self::Day1 => "1d",
            Self::Day7 => "7d",
            Self::Day14 => "14d",
            Self::Day30 => "30d",
        }
    }

    pub fn parse(s: &str) -> Result<Self, SearchError> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.token() == s)
            .ok_or_else(|| SearchError::Validation(format!("unknown period '{s}'")))
    }

    pub fn all() -> &'static [Period] {
        &[
            Self::Hour1,
            Self::Hour4,
            Self::Hour12,
            Self::Day1,
            Self::Day7,
            Self::Day14,
            Self::Day30,
        ]
    }
}

/// Fixed news categories. Each maps to an opaque token from the provider's
/// own encoding; the tokens are carried verbatim and never derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Topic {
    World,
    Nation,
    Business,
    Technology,
    Entertainment,
    Sports,
    Science,
    Health,
}

impl Topic {
    /// The provider-specific constant identifying this category.
    pub fn token(&self) -> &'static str {
        match self {
            Self::World => "CAAqJggKIiBDQkFTRWdvSUwyMHZNRGx1YlY4U0FtVnVHZ0pWVXlnQVAB",
            Self::Nation => "CAAqIggKIhxDQkFTRHdvSkwyMHZNR2RtY0hNekVnSmxiaWdBUAE",
            Self::Business => "CAAqJggKIiBDQkFTRWdvSUwyMHZNRGx6TVdZU0FtVnVHZ0pWVXlnQVAB",
            Self::Technology => "CAAqJggKIiBDQkFTRWdvSUwyMHZNREpxYW5RU0FtVnVHZ0pWVXlnQVAB",
            Self::Entertainment => "CAAqJggKIiBDQkFTRWdvSUwyMHZNRFp1ZEdvU0FtVnVHZ0pWVXlnQVAB",
            Self::Sports => "CAAqJggKIiBDQkFTRWdvSUwyMHZNRFp1ZEdvU0FtVnVHZ0pWVXlnQVAB",
            Self::Science => "CAAqJggKIiBDQkFTRWdvSUwyMHZNRmt6Y0RNU0FtVnVHZ0pWVXlnQVAB",
            Self::Health => "CAAqIQgKIhtDQkFTRGdvSUwyMHZNR3QwTlRFU0FtVnVLQUFQAQ",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::World => "WORLD",
            Self::Nation => "NATION",
            Self::Business => "BUSINESS",
            Self::Technology => "TECHNOLOGY",
            Self::Entertainment => "ENTERTAINMENT",
            Self::Sports => "SPORTS",
            Self::Science => "SCIENCE",
            Self::Health => "HEALTH",
        }
    }

    pub fn parse(s: &str) -> Result<Self, SearchError> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SearchError::Validation(format!("unknown topic '{s}'")))
    }

    pub fn all() -> &'static [Topic] {
        &[
            Self::World,
            Self::Nation,
            Self::Business,
            Self::Technology,
            Self::Entertainment,
            Self::Sports,
            Self::Science,
            Self::Health,
        ]
    }
}

/// The three retrieval modes. Exactly one is active per intent.
///
/// An empty `query` in `Keyword` or `DateRange` mode is valid input meaning
/// "issue no provider calls"; the invocation then yields an empty result,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    Keyword {
        query: String,
        period: Period,
    },
    Topic {
        topic: Topic,
    },
    /// Dates are carried as the raw input strings; conversion to the
    /// provider's `mm/dd/yyyy` format happens when the fetch plan is built.
    DateRange {
        query: String,
        start_date: String,
        end_date: String,
    },
}

/// Presentation preferences shared by all modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPrefs {
    /// Cap on the final result sequence, within [10, 100].
    pub max_results: usize,
    /// Accepted for interface compatibility; the pipeline never reorders by
    /// date. Output order is fetch/merge order only.
    pub sort_chronological: bool,
    /// Gates image display eligibility checks; never drops records.
    pub show_images: bool,
}

pub const MIN_RESULTS: usize = 10;
pub const MAX_RESULTS: usize = 100;
pub const DEFAULT_MAX_RESULTS: usize = 30;

impl Default for SearchPrefs {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            sort_chronological: true,
            show_images: true,
        }
    }
}

/// A validated search request. Constructed once per user action via
/// [`SearchIntent::new`], read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIntent {
    pub mode: SearchMode,
    pub language: Language,
    pub region: Region,
    pub prefs: SearchPrefs,
}

impl SearchIntent {
    pub fn new(
        mode: SearchMode,
        language: Language,
        region: Region,
        prefs: SearchPrefs,
    ) -> Result<Self, SearchError> {
        if prefs.max_results < MIN_RESULTS || prefs.max_results > MAX_RESULTS {
            return Err(SearchError::Validation(format!(
                "max_results must be within [{MIN_RESULTS}, {MAX_RESULTS}], got {}",
                prefs.max_results
            )));
        }
        Ok(Self {
            mode,
            language,
            region,
            prefs,
        })
    }
}

/// Convert a `YYYY-MM-DD` date string to the provider's `mm/dd/yyyy` format.
/// On parse failure the raw input is passed through unchanged; a bad date is
/// the provider's problem, never a failed invocation.
pub fn format_provider_date(raw: &str) -> String {
    match chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%m/%d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
