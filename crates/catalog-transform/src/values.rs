//! Pure cell rewrites used by the cleaner.

use std::sync::LazyLock;

use catalog_model::StudyModeKeyword;
use regex::Regex;

static DATE_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("Invalid date fragment regex"));

/// True when every comma-separated part of `value` is a null marker.
///
/// `NULL`, `nul` and `NULL,NUL` all match with the default markers; an empty
/// cell does not.
pub fn is_null_marker(value: &str, markers: &[String]) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed.split(',').all(|part| {
            let part = part.trim();
            markers.iter().any(|marker| marker.eq_ignore_ascii_case(part))
        })
}

/// First `YYYY-MM-DD` shaped fragment in `value`.
///
/// `2024-09-015720` yields `2024-09-01`. The fragment is not checked as a
/// calendar date.
pub fn extract_date(value: &str) -> Option<&str> {
    DATE_FRAGMENT.find(value).map(|found| found.as_str())
}

/// Canonical study mode for the first keyword contained in `value`.
pub fn canonical_study_mode<'a>(value: &str, keywords: &'a [StudyModeKeyword]) -> Option<&'a str> {
    let lowered = value.to_lowercase();
    keywords
        .iter()
        .find(|mode| lowered.contains(&mode.keyword.to_lowercase()))
        .map(|mode| mode.value.as_str())
}

/// A `Course Level URL` cell split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundUrl<'a> {
    pub url: &'a str,
    pub status: Option<&'a str>,
    pub show: Option<&'a str>,
}

/// Split `<url>,<tokens>` at the first comma.
///
/// The tail is scanned for the first status token and the first visibility
/// token it contains, independently. Returns `None` for cells without a comma.
pub fn split_compound_url<'a>(
    value: &'a str,
    status_tokens: &'a [String],
    show_tokens: &'a [String],
) -> Option<CompoundUrl<'a>> {
    let (url, tail) = value.split_once(',')?;
    let find = |tokens: &'a [String]| {
        tokens
            .iter()
            .find(|token| tail.contains(token.as_str()))
            .map(String::as_str)
    };
    Some(CompoundUrl {
        url: url.trim(),
        status: find(status_tokens),
        show: find(show_tokens),
    })
}
