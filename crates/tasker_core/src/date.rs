use crate::error::AppError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime, UtcOffset};

const DATE_DISPLAY: &[BorrowedFormatItem<'static>] = format_description!("[year]/[month]/[day]");
const TIMESTAMP_DISPLAY: &[BorrowedFormatItem<'static>] =
    format_description!("[year]/[month]/[day] [hour]:[minute]");

/// Parses a due date written as `YYYY/MM/DD` or `YYYY-MM-DD`.
///
/// The shape is checked first, on the raw line: ten bytes, all-digit
/// components, the same separator in both positions. A well-shaped input
/// that names no real calendar day (month 13, 2023/02/29, day 00) fails
/// with `InvalidDate` instead of rolling over to a neighbouring date.
pub fn parse_due_date(input: &str) -> Result<Date, AppError> {
    let (year, month, day) = split_ymd(input).ok_or(AppError::InvalidDateFormat)?;
    let month = Month::try_from(month).map_err(|_| AppError::InvalidDate)?;
    Date::from_calendar_date(year, month, day).map_err(|_| AppError::InvalidDate)
}

fn split_ymd(input: &str) -> Option<(i32, u8, u8)> {
    let bytes = input.as_bytes();
    if bytes.len() != 10 {
        return None;
    }

    let separator = bytes[4];
    if separator != b'/' && separator != b'-' {
        return None;
    }
    if bytes[7] != separator {
        return None;
    }

    let year = parse_digits(&bytes[0..4])?;
    let month = parse_digits(&bytes[5..7])?;
    let day = parse_digits(&bytes[8..10])?;
    Some((year as i32, month as u8, day as u8))
}

fn parse_digits(bytes: &[u8]) -> Option<u32> {
    let mut value = 0u32;
    for byte in bytes {
        if !byte.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u32::from(byte - b'0');
    }
    Some(value)
}

/// Current local time; falls back to UTC when the offset is unavailable.
pub fn local_now() -> OffsetDateTime {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetDateTime::now_utc().to_offset(offset)
}

pub fn format_date(date: Date) -> Result<String, AppError> {
    date.format(&DATE_DISPLAY)
        .map_err(|err| AppError::invalid_data(err.to_string()))
}

pub fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, AppError> {
    timestamp
        .format(&TIMESTAMP_DISPLAY)
        .map_err(|err| AppError::invalid_data(err.to_string()))
}
