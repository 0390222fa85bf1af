//! Date-range helpers for fixture generation.

use chrono::NaiveDate;

/// Parses a `YYYY-MM-DD` date string.
pub fn to_date(date: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
}

/// Every date from `start` through `end`, inclusive. Empty when `start` is
/// after `end`.
pub fn dates_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut day = start;
    while day <= end {
        dates.push(day);
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_date_parses_iso_dates() {
        let d = to_date("2024-02-29").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn to_date_rejects_garbage() {
        assert!(to_date("not-a-date").is_err());
        assert!(to_date("2023-02-29").is_err());
    }

    #[test]
    fn dates_between_is_inclusive() {
        let start = to_date("2024-01-30").unwrap();
        let end = to_date("2024-02-02").unwrap();
        let dates = dates_between(start, end);
        assert_eq!(dates.len(), 4);
        assert_eq!(dates.first(), Some(&start));
        assert_eq!(dates.last(), Some(&end));
    }

    #[test]
    fn dates_between_single_day() {
        let day = to_date("2024-06-01").unwrap();
        assert_eq!(dates_between(day, day), vec![day]);
    }

    #[test]
    fn dates_between_empty_when_reversed() {
        let start = to_date("2024-06-02").unwrap();
        let end = to_date("2024-06-01").unwrap();
        assert!(dates_between(start, end).is_empty());
    }
}
