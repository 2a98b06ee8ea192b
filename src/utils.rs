//! Date helpers shared by the dashboard and the detail panel.

use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Shown wherever a date-derived value cannot be computed.
pub const PLACEHOLDER: &str = "—";

const DAYS_PER_MONTH: i64 = 30;
const DAYS_PER_YEAR: i64 = 365;

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Option<Date> {
    Date::parse(input.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// The current calendar date, local if the offset is known, else UTC.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Formats the time elapsed between `date` and `today` in the coarsest
/// sensible unit: days under a month, months under a year, then years with
/// one decimal. Missing, malformed or future dates yield [`PLACEHOLDER`].
pub fn time_since(date: &str, today: Date) -> String {
    let Some(date) = parse_date(date) else {
        return PLACEHOLDER.to_string();
    };

    let days = (today - date).whole_days();
    if days < 0 {
        return PLACEHOLDER.to_string();
    }

    if days < DAYS_PER_MONTH {
        plural(days, "day")
    } else if days < DAYS_PER_YEAR {
        plural((days / DAYS_PER_MONTH).max(1), "month")
    } else {
        format!("{:.1} years", days as f64 / 365.25)
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2025 - 06 - 15);

    #[test]
    fn same_day_is_zero_days() {
        assert_eq!(time_since("2025-06-15", TODAY), "0 days");
    }

    #[test]
    fn short_spans_use_days() {
        assert_eq!(time_since("2025-06-14", TODAY), "1 day");
        assert_eq!(time_since("2025-05-20", TODAY), "26 days");
    }

    #[test]
    fn spans_under_a_year_use_months() {
        assert_eq!(time_since("2025-05-16", TODAY), "1 month");
        assert_eq!(time_since("2024-12-15", TODAY), "6 months");
    }

    #[test]
    fn spans_over_a_year_use_years() {
        assert_eq!(time_since("2023-06-15", TODAY), "2.0 years");
        assert!(time_since("2019-03-14", TODAY).ends_with("years"));
    }

    #[test]
    fn is_pure_for_same_input() {
        let first = time_since("2021-11-23", TODAY);
        let second = time_since("2021-11-23", TODAY);
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_or_missing_dates_render_placeholder() {
        assert_eq!(time_since("", TODAY), PLACEHOLDER);
        assert_eq!(time_since("not a date", TODAY), PLACEHOLDER);
        assert_eq!(time_since("2025-13-40", TODAY), PLACEHOLDER);
    }

    #[test]
    fn future_dates_render_placeholder() {
        assert_eq!(time_since("2025-06-16", TODAY), PLACEHOLDER);
    }

    #[test]
    fn today_is_zero_days_against_the_clock() {
        let now = today();
        let formatted = now
            .format(format_description!("[year]-[month]-[day]"))
            .expect("date formats");
        assert_eq!(time_since(&formatted, now), "0 days");
    }
}
