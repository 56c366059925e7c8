//! Display formatting for backend-supplied ISO datetime strings.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render an ISO datetime (`2025-03-05T14:30:00Z`) as `2025-03-05 14:30`.
///
/// The backend owns the real timestamp; this is display-only, so strings
/// that do not look like ISO datetimes pass through unchanged.
pub fn format_timestamp(iso: &str) -> String {
    let Some((date, time)) = iso.split_once('T') else {
        return iso.to_owned();
    };
    let clock = time.get(..5).unwrap_or(time);
    format!("{date} {clock}")
}
