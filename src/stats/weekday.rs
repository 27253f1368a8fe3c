//! Weekday ordering
//!
//! `stats_by_day` is Monday-first while `day_of_week_streaks` is
//! Sunday-first. The mapping below is inferred from observed payloads, not
//! from any published contract.

use chrono::Weekday;

/// Monday..Sunday, the row order of the daily performance table
pub fn weekdays_from_monday() -> impl Iterator<Item = Weekday> {
    std::iter::successors(Some(Weekday::Mon), |day| Some(day.succ())).take(7)
}

/// Index into the Sunday-first streak array for `day`
pub fn streak_index(day: Weekday) -> usize {
    day.num_days_from_sunday() as usize
}

/// Full English name
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
