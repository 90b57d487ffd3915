//! Scrape progress width computation.
//!
//! The dashboard bar carries `data-limit` and `data-scraped` attributes; its
//! fill width is the scraped/limit ratio as a percentage, capped at 100.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// Parse a count attribute: optional leading `+` after surrounding
/// whitespace, then leading ASCII digits. Trailing garbage is ignored;
/// digit-free or negative input is rejected.
#[must_use]
pub fn parse_count(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }
    unsigned[..end].parse().ok()
}

/// Fill percentage, capped at 100. A zero limit reads as 0 rather than a
/// division artifact.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fill_percent(scraped: u64, limit: u64) -> f64 {
    if limit == 0 {
        return 0.0;
    }
    ((scraped as f64 / limit as f64) * 100.0).min(100.0)
}

/// Inline width style for the bar, or `None` when either attribute fails to
/// parse. A `None` leaves the width to the stylesheet.
#[must_use]
pub fn width_from_attrs(limit: &str, scraped: &str) -> Option<String> {
    let limit = parse_count(limit)?;
    let scraped = parse_count(scraped)?;
    Some(format!("{}%", fill_percent(scraped, limit)))
}
