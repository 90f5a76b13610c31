/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Difference color: >= 0 green (on or above plan), < 0 red.
pub fn color_for_difference(value: i64) -> &'static str {
    if value >= 0 { GREEN } else { RED }
}

/// Greys out zero durations ("0h00").
pub fn colorize_minutes(rendered: &str, minutes: i64) -> String {
    if minutes == 0 {
        format!("{GREY}{rendered}{RESET}")
    } else {
        rendered.to_string()
    }
}

pub fn colorize_difference(rendered: &str, minutes: i64) -> String {
    format!("{}{}{}", color_for_difference(minutes), rendered, RESET)
}
