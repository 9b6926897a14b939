//! Course Level URL syntax and reachability.

use catalog_model::{Category, UrlRules, Verdict, Violation};
use tracing::warn;
use url::Url;

use super::is_blank;
use crate::probe::{ProbeOutcome, UrlProbe};

/// Parse a URL that has both a scheme and a host.
pub fn parse_url(value: &str) -> Option<Url> {
    let url = Url::parse(value).ok()?;
    url.host_str().filter(|host| !host.is_empty())?;
    Some(url)
}

/// Reason phrase used in messages for failing statuses.
fn status_reason(status: u16) -> &'static str {
    match status {
        404 => "Not Found",
        410 => "Gone",
        500 => "Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "HTTP Error",
    }
}

/// Message for one probed URL, `None` when it counts as reachable.
///
/// Only the configured failing statuses are errors; `401`, `403` and `429`
/// usually mean a live page that blocks automated requests.
fn probe_failure(url: &str, outcome: &ProbeOutcome, failing: &[u16]) -> Option<String> {
    match outcome {
        ProbeOutcome::Status(status) if failing.contains(status) => Some(format!(
            "URL returns {status} ({}): {url}",
            status_reason(*status)
        )),
        ProbeOutcome::Status(_) | ProbeOutcome::Skipped => None,
        ProbeOutcome::Timeout => Some(format!("URL timeout (server not responding): {url}")),
        ProbeOutcome::ConnectionFailed => {
            Some(format!("URL connection error (server unreachable): {url}"))
        }
        ProbeOutcome::Failed(reason) if reason.contains("403") || reason.contains("401") => None,
        ProbeOutcome::Failed(_) => Some(format!("URL not accessible: {url}")),
    }
}

/// Every comma-separated URL must parse and must not fail its probe.
///
/// All per-URL problems are joined into one message.
pub fn check_course_url(value: &str, rules: &UrlRules, probe: &dyn UrlProbe) -> Verdict {
    if is_blank(value) {
        return Err(Violation::new(Category::Url, "Course Level URL cannot be blank"));
    }
    let mut errors = Vec::new();
    for candidate in value.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        let Some(url) = parse_url(candidate) else {
            errors.push(format!("Invalid URL format: {candidate}"));
            continue;
        };
        let outcome = probe.probe(&url);
        if let Some(message) = probe_failure(candidate, &outcome, &rules.failing_statuses) {
            warn!(outcome = ?outcome, "url probe failed");
            errors.push(message);
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Violation::new(Category::Url, errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::FormatOnlyProbe;

    struct FixedProbe(ProbeOutcome);

    impl UrlProbe for FixedProbe {
        fn probe(&self, _url: &Url) -> ProbeOutcome {
            self.0.clone()
        }
    }

    fn check(value: &str, outcome: ProbeOutcome) -> Verdict {
        check_course_url(value, &UrlRules::default(), &FixedProbe(outcome))
    }

    #[test]
    fn scheme_and_host_are_required() {
        assert!(parse_url("https://example.com/course").is_some());
        assert!(parse_url("example.com/course").is_none());
        assert!(parse_url("mailto:admissions@example.com").is_none());
    }

    #[test]
    fn failing_status_is_reported_with_reason() {
        let err = check("https://example.com/gone", ProbeOutcome::Status(404)).unwrap_err();
        assert_eq!(err.category, Category::Url);
        assert_eq!(err.message, "URL returns 404 (Not Found): https://example.com/gone");
        let err = check("https://example.com/x", ProbeOutcome::Status(503)).unwrap_err();
        assert_eq!(
            err.message,
            "URL returns 503 (Service Unavailable): https://example.com/x"
        );
    }

    #[test]
    fn bot_blocking_statuses_pass() {
        for status in [200, 301, 401, 403, 429] {
            assert!(check("https://example.com", ProbeOutcome::Status(status)).is_ok());
        }
    }

    #[test]
    fn network_failures_are_reported() {
        assert_eq!(
            check("https://slow.example", ProbeOutcome::Timeout).unwrap_err().message,
            "URL timeout (server not responding): https://slow.example"
        );
        assert_eq!(
            check("https://down.example", ProbeOutcome::ConnectionFailed)
                .unwrap_err()
                .message,
            "URL connection error (server unreachable): https://down.example"
        );
        assert_eq!(
            check("https://odd.example", ProbeOutcome::Failed("tls".to_string()))
                .unwrap_err()
                .message,
            "URL not accessible: https://odd.example"
        );
    }

    #[test]
    fn errors_for_several_urls_are_joined() {
        let err = check("notaurl, https://example.com/a", ProbeOutcome::Status(410)).unwrap_err();
        assert_eq!(
            err.message,
            "Invalid URL format: notaurl; URL returns 410 (Gone): https://example.com/a"
        );
    }

    #[test]
    fn format_only_probe_never_fails_well_formed_urls() {
        let rules = UrlRules::default();
        assert!(check_course_url("https://example.com/x", &rules, &FormatOnlyProbe).is_ok());
        assert!(check_course_url("www.example.com", &rules, &FormatOnlyProbe).is_err());
        assert_eq!(
            check_course_url(" ", &rules, &FormatOnlyProbe).unwrap_err().message,
            "Course Level URL cannot be blank"
        );
    }
}
