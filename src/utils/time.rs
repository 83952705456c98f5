//! 时间工具函数 — 业务时区转换
//!
//! 日期/时间字符串解析统一在这里完成，
//! 校验层只比较 `i64` Unix millis。

use chrono::NaiveDate;
use chrono_tz::Tz;

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// 解析时间字符串 (HH:MM) → HHMM 整数
///
/// "18:00" → 1800。非法输入返回 None。
pub fn parse_hhmm(time: &str) -> Option<i32> {
    let (hh, mm) = time.split_once(':')?;
    let hour: i32 = hh.parse().ok()?;
    let minute: i32 = mm.parse().ok()?;
    if !(0..24).contains(&hour) || !(0..60).contains(&minute) {
        return None;
    }
    Some(hour * 100 + minute)
}

/// 日期零点 → Unix millis (业务时区)
///
/// DST gap fallback: 如果本地时间不存在 (夏令时跳跃)，fallback 到 UTC。
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    let naive = date.and_hms_opt(0, 0, 0).unwrap();
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// 当前时间的 Unix millis
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
