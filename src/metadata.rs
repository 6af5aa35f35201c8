use chrono::NaiveDate;

// @module: Video metadata passed through to the XML document

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Metadata of the source video.
///
/// Every field defaults to empty, which is what file-based conversions use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoMetadata {
    /// Video title
    pub title: String,

    /// Raw upload date, `YYYYMMDD` or empty
    pub published: String,

    /// Length in whole seconds, 0 when unknown
    pub duration_secs: u64,

    /// Source URL
    pub url: String,
}

impl VideoMetadata {
    pub fn new(title: impl Into<String>, published: impl Into<String>, duration_secs: u64, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            published: published.into(),
            duration_secs,
            url: url.into(),
        }
    }

    /// Upload date as shown in the document
    pub fn display_published(&self) -> String {
        format_published(&self.published)
    }

    /// Duration as shown in the document
    pub fn display_duration(&self) -> String {
        format_duration(self.duration_secs)
    }
}

/// Format a duration in seconds as `"2h 15m"` style text.
///
/// Zero units are omitted and a zero duration yields an empty string, meaning
/// the duration is unknown.
pub fn format_duration(seconds: u64) -> String {
    if seconds == 0 {
        return String::new();
    }

    let hours = seconds / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let secs = seconds % SECONDS_PER_MINUTE;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if secs > 0 {
        parts.push(format!("{}s", secs));
    }
    parts.join(" ")
}

/// Convert a raw `YYYYMMDD` upload date to `YYYY-MM-DD`.
///
/// Anything that is not a valid eight-digit date is returned unchanged.
pub fn format_published(raw: &str) -> String {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    match NaiveDate::parse_from_str(raw, "%Y%m%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}
