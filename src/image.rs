// src/image.rs
//! Image display eligibility.
//!
//! A pure predicate deciding whether a record's image URL is worth handing
//! to the display layer. It never drops a record, only the image. The
//! blacklist works by substring containment, matching the provider's
//! placeholder conventions; note that `"0"` matches anywhere in the URL, so
//! a legitimately hosted `photo0.jpg` is excluded too. That over-broad match
//! is part of the compatibility contract — keep it.

/// Substrings that mark a URL as a placeholder or non-image asset.
const BLACKLIST: [&str; 5] = ["0", "placeholder", "default", ".txt", ".html"];

/// At least one of these must appear for the URL to count as an image file.
const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// Returns true when `url` points at a displayable image: http(s)-prefixed,
/// free of blacklist substrings, and carrying a known image extension.
/// All substring checks are case-insensitive.
pub fn image_eligible(url: &str) -> bool {
    if !url.starts_with("http") {
        return false;
    }
    let lower = url.to_lowercase();
    if BLACKLIST.iter().any(|b| lower.contains(b)) {
        return false;
    }
    IMAGE_EXTENSIONS.iter().any(|ext| lower.contains(ext))
}
