//! 字段级校验规则
//!
//! 只校验刚刚变更的字段；规则产出面向用户的提示文案，
//! 不产出内部错误类型。

use chrono::{Datelike, Weekday};
use chrono_tz::Tz;

use crate::utils::time::{day_start_millis, parse_date, parse_hhmm};

// ── Opening hours ───────────────────────────────────────────────────

/// First bookable time, exclusive (10:30)
pub const OPEN_HHMM: i32 = 1030;

/// Last bookable time, exclusive (21:30)
pub const CLOSE_HHMM: i32 = 2130;

/// Weekly closing day
pub const CLOSED_WEEKDAY: Weekday = Weekday::Tue;

// ── Messages ────────────────────────────────────────────────────────

pub const MSG_CLOSED_TUESDAY: &str = "The restaurant is closed on Tuesday.";
pub const MSG_PAST_DATE: &str = "Reservation must be in the future.";
pub const MSG_OUTSIDE_HOURS: &str =
    "Reservations are only allowed between 10:30am and 9:30pm.";

// ── Rules ───────────────────────────────────────────────────────────

/// Validate a reservation date (YYYY-MM-DD) against the closing day and
/// the clock.
///
/// 日期折算为业务时区当日零点再与 `now_millis` 比较；
/// 两条规则同时命中时，闭店文案在前。
/// 无法解析的输入不产出提示。
pub fn validate_reservation_date(value: &str, now_millis: i64, tz: Tz) -> Vec<String> {
    let Some(date) = parse_date(value) else {
        tracing::debug!(value, "Unparseable reservation date, no findings");
        return Vec::new();
    };

    let closed = date.weekday() == CLOSED_WEEKDAY;
    let past = day_start_millis(date, tz) <= now_millis;

    match (closed, past) {
        (true, true) => vec![MSG_CLOSED_TUESDAY.to_string(), MSG_PAST_DATE.to_string()],
        (true, false) => vec![MSG_CLOSED_TUESDAY.to_string()],
        (false, true) => vec![MSG_PAST_DATE.to_string()],
        (false, false) => Vec::new(),
    }
}

/// Validate a reservation time (HH:MM) against opening hours.
///
/// 边界值本身 (10:30 / 21:30) 视为不可预订。
pub fn validate_reservation_time(value: &str) -> Vec<String> {
    match parse_hhmm(value) {
        Some(hhmm) if hhmm > OPEN_HHMM && hhmm < CLOSE_HHMM => Vec::new(),
        _ => vec![MSG_OUTSIDE_HOURS.to_string()],
    }
}
