//! Human-readable distances between two points in time ("5 minutes ago").

use time::OffsetDateTime;

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Distance in words between `date` and `base`, independent of order.
pub fn format_distance(date: OffsetDateTime, base: OffsetDateTime) -> String {
    let (earlier, later) = if date <= base { (date, base) } else { (base, date) };

    let seconds = (later - earlier).whole_seconds();
    let minutes = round_div(seconds, 60);

    if minutes == 0 {
        return "less than a minute".to_string();
    }
    if minutes < 45 {
        return plural(minutes, "1 minute", "minutes");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        return format!("about {}", plural(round_div(minutes, 60), "1 hour", "hours"));
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        return plural(round_div(minutes, MINUTES_IN_DAY), "1 day", "days");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = round_div(minutes, MINUTES_IN_MONTH);
        return format!("about {}", plural(months, "1 month", "months"));
    }

    let months = calendar_months_between(earlier, later);
    if months < 12 {
        return plural(round_div(minutes, MINUTES_IN_MONTH), "1 month", "months");
    }

    let years = months / 12;
    match months % 12 {
        0..=2 => format!("about {}", plural(years, "1 year", "years")),
        3..=8 => format!("over {}", plural(years, "1 year", "years")),
        _ => format!("almost {}", plural(years + 1, "1 year", "years")),
    }
}

/// Like [`format_distance`] but with an "in ..." / "... ago" suffix.
pub fn format_distance_with_suffix(date: OffsetDateTime, base: OffsetDateTime) -> String {
    let distance = format_distance(date, base);
    if date > base {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}

/// Distance from `date` to the current UTC time, e.g. "about 2 hours ago".
pub fn format_distance_to_now(date: OffsetDateTime) -> String {
    format_distance_with_suffix(date, OffsetDateTime::now_utc())
}

/// Integer division rounding halves up, for non-negative numerators.
fn round_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

fn plural(count: i64, one: &str, many: &str) -> String {
    if count == 1 {
        one.to_string()
    } else {
        format!("{count} {many}")
    }
}

/// Full calendar months from `earlier` to `later`.
fn calendar_months_between(earlier: OffsetDateTime, later: OffsetDateTime) -> i64 {
    let later = later.to_offset(earlier.offset());
    let mut months = (i64::from(later.year()) - i64::from(earlier.year())) * 12
        + (i64::from(u8::from(later.month())) - i64::from(u8::from(earlier.month())));

    // The last month only counts once its day and time have been reached.
    if months > 0 && (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months -= 1;
    }

    months
}
