/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Highlight background used for freshly arrived announcements.
pub const HIGHLIGHT: &str = "\x1b[41;97m";

/// Grey out placeholder cells ("--:--", "--") in tables.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Overtime color: >0 green, 0 grey.
pub fn color_for_overtime(hours: f64) -> &'static str {
    if hours > 0.0 { GREEN } else { GREY }
}
