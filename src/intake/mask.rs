//! Keystroke masking for phone and date inputs.
//!
//! Each formatter receives the full current value of the input, not a
//! delta: strip every non-digit, then reinsert the literal separators
//! positionally. Digits past the mask length are dropped, which makes
//! both functions idempotent on their own output.

fn digits_of(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Mask a raw phone input as `(DDD) DDD-DDDD`, capped at ten digits.
pub fn format_phone(value: &str) -> String {
    let digits = digits_of(value);
    match digits.len() {
        0 => String::new(),
        1..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!(
            "({}) {}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..digits.len().min(10)]
        ),
    }
}

/// Mask a raw date input as `DD/DD/DDDD`, capped at eight digits.
pub fn format_date(value: &str) -> String {
    let digits = digits_of(value);
    match digits.len() {
        0 => String::new(),
        1..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!(
            "{}/{}/{}",
            &digits[..2],
            &digits[2..4],
            &digits[4..digits.len().min(8)]
        ),
    }
}
