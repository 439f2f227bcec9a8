use rust_decimal::Decimal;

/// Formats a seconds value as "MM:SS", rolling over to "H:MM:SS" at an hour.
/// Sub-second parts round to the nearest whole second for display only.
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Formats a time-behind-leader delta, e.g. "+02:05".
pub fn format_delta(seconds: f64) -> String {
    format!("+{}", format_time(seconds))
}

/// Rounds a rating for display at the system's precision. Internal values
/// stay unrounded; this is the only place rounding happens.
pub fn format_rating(value: Decimal, precision: u32) -> String {
    value.round_dp(precision).to_string()
}

/// Display rounding for corrected seconds at the system's precision.
pub fn format_corrected(seconds: f64, precision: u32) -> String {
    Decimal::from_f64_retain(seconds)
        .map(|d| d.round_dp(precision).to_string())
        .unwrap_or_else(|| seconds.to_string())
}
