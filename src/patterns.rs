//! Compiled regex patterns used by the noise filters and the assembler.
//!
//! All patterns are compiled once using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Metadata Noise Patterns
// =============================================================================

/// Matches a bare clock time such as `3:45 PM` or `12:07`.
pub static CLOCK_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d{1,2}:\d{2}\s*(?:AM|PM)?$").expect("CLOCK_TIME regex")
});

/// Matches text that opens with a month and a day, such as `Mar 5`,
/// `March 5, 2024` or `Jan 12, 2025 · Edited`.
///
/// Only the start is anchored, so prose opening with a date is matched too.
pub static MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\.?\s+\d",
    )
    .expect("MONTH_DAY regex")
});

/// Middle-dot characters used as metadata separators (`5m · 1.2K views`).
pub const METADATA_SEPARATORS: &[char] = &['\u{00B7}', '\u{2022}', '\u{2027}', '\u{2219}'];

// =============================================================================
// Assembler Patterns
// =============================================================================

/// Matches a hashtag and captures its word without the marker.
///
/// Word characters are ASCII only, so `#café` yields `caf`.
pub static HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#((?-u:\w)+)").expect("HASHTAG regex"));

// =============================================================================
// Input Validation Patterns
// =============================================================================

/// Matches an X/Twitter status link, the only accepted source URL shape.
pub static SOURCE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:twitter\.com|x\.com)/\w+/status/\d+").expect("SOURCE_URL regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Characters replaced in suggested file names.
pub static FILE_STEM_UNSAFE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("FILE_STEM_UNSAFE regex"));
