use chrono::{NaiveDateTime, NaiveTime, Timelike};

use crate::error::{CpvError, Result};

pub const DATE_FMT: &str = "%m/%d/%Y";
pub const TIME_FMT: &str = "%I:%M %p";
pub const DATE_TIME_FMT: &str = "%m/%d/%Y %I:%M %p";

pub fn parse_clock_time(input: &str, line: u64, field: &'static str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), TIME_FMT)
        .map_err(|e| CpvError::parse(line, field, input, e))
}

pub fn parse_aired_at(date: &str, time: &str, line: u64) -> Result<NaiveDateTime> {
    let joined = format!("{} {}", date.trim(), time.trim());
    NaiveDateTime::parse_from_str(&joined, DATE_TIME_FMT)
        .map_err(|e| CpvError::parse(line, "date/time", &joined, e))
}

// Inclusive on both ends; 10 PM to 2 AM wraps to 22, 23, 0, 1, 2.
pub fn hour_span(start: NaiveTime, end: NaiveTime) -> Vec<u32> {
    let (start, end) = (start.hour(), end.hour());
    if start <= end {
        (start..=end).collect()
    } else {
        (start..24).chain(0..=end).collect()
    }
}
