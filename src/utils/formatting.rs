//! Formatting utilities used for CLI and export outputs.

/// Render minutes as `{sign}{hours}h{minutes:02}`, e.g. `7h30`, `-0h45`.
///
/// The sign is taken off before the split, so hours and minutes are never
/// negative themselves.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.unsigned_abs();
    format!("{}{}h{:02}", sign, abs_m / 60, abs_m % 60)
}

/// Same as [`format_minutes`] with an explicit `+` on positive values,
/// used for differences.
pub fn format_difference(mins: i64) -> String {
    if mins > 0 {
        format!("+{}", format_minutes(mins))
    } else {
        format_minutes(mins)
    }
}

/// Builds a separator line using the configured character.
pub fn separator(ch: &str, width: usize) -> String {
    let c = ch.chars().next().unwrap_or('-');
    std::iter::repeat_n(c, width).collect()
}
