//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Render fractional hours as "8.50h"; "--" for missing values.
pub fn hours2readable(hours: Option<f64>) -> String {
    match hours {
        Some(h) => format!("{:.2}h", h),
        None => "--".to_string(),
    }
}

/// Returns a status label and an ANSI color for a session row.
/// "Partial" covers present sessions flagged late or early, as in the
/// original dashboard.
pub fn describe_status(status: &str, late: bool, early: bool) -> (String, &'static str) {
    match status {
        "present" if late || early => ("Partial".into(), "\x1b[33m"),
        "present" => ("Present".into(), "\x1b[32m"),
        "absent" => ("Absent".into(), "\x1b[31m"),
        "half-day" => ("Half-day".into(), "\x1b[33m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_rendering() {
        assert_eq!(hours2readable(Some(8.5)), "8.50h");
        assert_eq!(hours2readable(None), "--");
    }

    #[test]
    fn partial_when_flagged() {
        assert_eq!(describe_status("present", true, false).0, "Partial");
        assert_eq!(describe_status("present", false, false).0, "Present");
        assert_eq!(describe_status("half-day", false, false).0, "Half-day");
    }
}
