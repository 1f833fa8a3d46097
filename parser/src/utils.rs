use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::FieldError;

/// Сумма из поля записи
///
/// Пустое поле - это отсутствие значения, а не ноль.
pub(crate) fn parse_amount(raw: &str, field: &'static str) -> Result<Option<Decimal>, FieldError> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return Ok(None);
    }

    Decimal::from_str(cleaned)
        .map(Some)
        .map_err(|source| FieldError::InvalidAmount {
            field,
            value: cleaned.to_string(),
            source,
        })
}

/// Количество (записей, счетов, групп, items) из поля записи
pub(crate) fn parse_count(raw: &str, field: &'static str) -> Result<Option<usize>, FieldError> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return Ok(None);
    }

    cleaned
        .parse::<usize>()
        .map(Some)
        .map_err(|source| FieldError::InvalidCount {
            field,
            value: cleaned.to_string(),
            source,
        })
}

/// YYMMDD -> дата
///
/// простое допущение: все даты в 2000-х
pub(crate) fn parse_bai_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.len() != 6 || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let yy: i32 = s[0..2].parse().ok()?;
    let mm: u32 = s[2..4].parse().ok()?;
    let dd: u32 = s[4..6].parse().ok()?;

    NaiveDate::from_ymd_opt(2000 + yy, mm, dd)
}

/// YYMMDD + HHMM -> дата и время
///
/// `2400` и `9999` означают конец дня, т.е. полночь следующего дня.
pub(crate) fn parse_bai_datetime(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = parse_bai_date(date)?;
    let time = time.trim();

    if time == "2400" || time == "9999" {
        let next_day = date.checked_add_days(Days::new(1))?;
        return Some(next_day.and_time(NaiveTime::MIN));
    }

    if time.len() != 4 || !time.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let hh: u32 = time[0..2].parse().ok()?;
    let mm: u32 = time[2..4].parse().ok()?;

    NaiveTime::from_hms_opt(hh, mm, 0).map(|t| date.and_time(t))
}
