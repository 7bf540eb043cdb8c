use chrono::{Datelike, NaiveDate};

use crate::errors::{AppError, AppResult};

/// Inclusive calendar-day range, sent to the backend as query params.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }
    pub fn end_str(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve a period expression into a date range.
/// Accepted forms: `YYYY-MM-DD`, `YYYY-MM`, `YYYY`, and `start:end` where
/// each side is any of the former.
pub fn resolve_period(p: &str) -> AppResult<DateRange> {
    if p.contains(':') {
        let parts: Vec<&str> = p.split(':').collect();
        if parts.len() == 2 {
            let s = period_bounds(parts[0])?;
            let e = period_bounds(parts[1])?;
            if s.start > e.end {
                return Err(AppError::InvalidPeriod(p.to_string()));
            }
            return Ok(DateRange {
                start: s.start,
                end: e.end,
            });
        }
        return Err(AppError::InvalidPeriod(p.to_string()));
    }

    period_bounds(p)
}

fn period_bounds(p: &str) -> AppResult<DateRange> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(DateRange { start: d, end: d });
    }

    // YYYY-MM
    if p.len() == 7
        && let Ok(first) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d")
    {
        return Ok(DateRange {
            start: first,
            end: last_day_of_month(first.year(), first.month()),
        });
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
        return Ok(DateRange { start, end });
    }

    Err(AppError::InvalidPeriod(p.to_string()))
}

pub fn current_month() -> DateRange {
    let t = today();
    DateRange {
        start: NaiveDate::from_ymd_opt(t.year(), t.month(), 1).unwrap(),
        end: last_day_of_month(t.year(), t.month()),
    }
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };
    first_next.pred_opt().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_day_period() {
        let r = resolve_period("2026-03-02").unwrap();
        assert_eq!(r.start, r.end);
        assert_eq!(r.start_str(), "2026-03-02");
    }

    #[test]
    fn month_period_covers_whole_month() {
        let r = resolve_period("2026-02").unwrap();
        assert_eq!(r.start_str(), "2026-02-01");
        assert_eq!(r.end_str(), "2026-02-28");
    }

    #[test]
    fn year_period() {
        let r = resolve_period("2025").unwrap();
        assert_eq!(r.start_str(), "2025-01-01");
        assert_eq!(r.end_str(), "2025-12-31");
    }

    #[test]
    fn range_period_spans_both_sides() {
        let r = resolve_period("2025-11:2026-01").unwrap();
        assert_eq!(r.start_str(), "2025-11-01");
        assert_eq!(r.end_str(), "2026-01-31");
    }

    #[test]
    fn malformed_period_is_rejected() {
        assert!(resolve_period("2025-9").is_err());
        assert!(resolve_period("03-2025").is_err());
        assert!(resolve_period("2026-02:2025-02").is_err());
    }
}
