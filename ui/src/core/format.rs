//! Formatting helpers for presenting scan metadata.

/// OCR wall time with two decimals, e.g. `1.28`. The unit lives in the
/// localized message.
pub fn format_seconds(value: f64) -> String {
    if !value.is_finite() || value < 0.0 {
        return "—".into();
    }
    format!("{value:.2}")
}
