// src/view.rs
//! Emission-time accessors for the presentation layer.
//!
//! The link scheme fix is reapplied here, immediately before a record
//! leaves the pipeline. It is the same idempotent function used during
//! normalization; a second call site means any record path that bypassed
//! the first is still corrected.

use crate::image::image_eligible;
use crate::record::{ensure_scheme, NewsRecord};

/// The link to hand to the display layer, scheme-normalized.
pub fn display_link(record: &NewsRecord) -> String {
    ensure_scheme(&record.link)
}

/// The image URL to display, if any. `None` either because images are
/// disabled, the record has no image, or the URL fails the eligibility
/// heuristic. Skipping the image never drops the record.
pub fn display_image(record: &NewsRecord, show_images: bool) -> Option<&str> {
    if !show_images {
        return None;
    }
    match record.image_url.as_deref() {
        Some(url) if image_eligible(url) => Some(url),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(link: &str, img: Option<&str>) -> NewsRecord {
        NewsRecord {
            title: "T".into(),
            link: link.into(),
            media: String::new(),
            published_date: None,
            description: None,
            image_url: img.map(str::to_string),
        }
    }

    #[test]
    fn display_link_fixes_scheme_again() {
        // A normalized record is already http(s)-prefixed, but emission
        // corrects stragglers too.
        assert_eq!(
            display_link(&record("example.com/x", None)),
            "https://example.com/x"
        );
        assert_eq!(
            display_link(&record("https://example.com/x", None)),
            "https://example.com/x"
        );
    }

    #[test]
    fn display_image_gates_on_flag_and_eligibility() {
        let rec = record("https://example.com", Some("https://example.com/a.jpg"));
        assert_eq!(display_image(&rec, true), Some("https://example.com/a.jpg"));
        assert_eq!(display_image(&rec, false), None);

        let placeholder = record("https://example.com", Some("https://example.com/placeholder.jpg"));
        assert_eq!(display_image(&placeholder, true), None);

        let none = record("https://example.com", None);
        assert_eq!(display_image(&none, true), None);
    }
}
