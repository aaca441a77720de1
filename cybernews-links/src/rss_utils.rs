/// URL utilities for feeds
pub mod url {
    use url::Url;

    /// Extract domain from URL
    pub fn extract_domain(url_str: &str) -> Option<String> {
        Url::parse(url_str)
            .ok()
            .and_then(|url| url.host_str().map(|h| h.to_string()))
    }

    /// Short name used in log lines: the host, or the raw string if unparsable.
    pub fn feed_name(url_str: &str) -> String {
        extract_domain(url_str).unwrap_or_else(|| url_str.to_string())
    }

    /// Validate feed URL format
    pub fn is_valid_rss_url(url_str: &str) -> bool {
        if let Ok(url) = Url::parse(url_str) {
            url.scheme() == "http" || url.scheme() == "https"
        } else {
            false
        }
    }
}

/// Date window utilities
pub mod time {
    use chrono::{NaiveDate, TimeDelta};

    /// First day of the trailing window ending on `today`, or `None` when it
    /// falls outside the representable calendar.
    pub fn window_start(today: NaiveDate, window_days: i64) -> Option<NaiveDate> {
        TimeDelta::try_days(window_days).and_then(|span| today.checked_sub_signed(span))
    }

    /// Whether `date` lies in `[today - window_days, today]`.
    pub fn within_window(date: NaiveDate, today: NaiveDate, window_days: i64) -> bool {
        let after_start = match window_start(today, window_days) {
            Some(start) => start <= date,
            None => window_days >= 0,
        };
        after_start && date <= today
    }
}
