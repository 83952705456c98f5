//! 电话号码格式化
//!
//! 把自由输入规范化为 (XXX) XXX-XXXX。

/// Normalize free-form phone input into the canonical punctuation pattern.
///
/// Everything but digits is stripped. Fewer than four digits come back
/// bare, so the area code is not punctuated while the caller is still
/// typing it. Input past the tenth digit is truncated.
///
/// # Examples
///
/// ```
/// use reserve_client::form::normalize_phone;
///
/// assert_eq!(normalize_phone("123"), "123");
/// assert_eq!(normalize_phone("1234"), "(123) 4");
/// assert_eq!(normalize_phone("123-456-7890"), "(123) 456-7890");
/// ```
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() < 4 {
        return digits;
    }
    if digits.len() < 7 {
        return format!("({}) {}", &digits[..3], &digits[3..]);
    }

    let digits = &digits[..digits.len().min(10)];
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}
