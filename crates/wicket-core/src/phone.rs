use crate::error::AuthError;

/// Country code accepted ahead of the national number.
pub const COUNTRY_CODE: &str = "+7";
/// Trunk prefix used in the 11-digit domestic format.
pub const TRUNK_PREFIX: char = '8';
/// Length of the national significant number.
pub const NATIONAL_LEN: usize = 10;

/// Reduces free-form phone text to the national number: digits only, the
/// country code or trunk prefix stripped, at most [`NATIONAL_LEN`] digits.
///
/// Never fails; input with no usable digits collapses to the empty string.
/// Idempotent: the output passes through unchanged.
pub fn normalize(raw: &str) -> String {
    let rest = raw.strip_prefix(COUNTRY_CODE).unwrap_or(raw);
    let mut digits: String = rest.chars().filter(char::is_ascii_digit).collect();
    // 11-digit domestic forms: 8XXXXXXXXXX, or 7XXXXXXXXXX typed without "+".
    if digits.len() > NATIONAL_LEN && digits.starts_with(['7', TRUNK_PREFIX]) {
        digits.remove(0);
    }
    digits.truncate(NATIONAL_LEN);
    digits
}

/// Validates a fully-prefixed phone string: `8`, `7` or `+7` followed by
/// exactly ten digits, or by the grouped form `" (DDD) DDD DD DD"`.
///
/// This runs against the prefixed number built for the wallet service, not
/// against raw screen text.
pub fn validate(phone: &str) -> Result<(), AuthError> {
    let rest = phone
        .strip_prefix(COUNTRY_CODE)
        .or_else(|| phone.strip_prefix(TRUNK_PREFIX))
        .or_else(|| phone.strip_prefix('7'))
        .ok_or(AuthError::IncorrectPhone)?;
    if is_plain(rest) || is_grouped(rest) {
        Ok(())
    } else {
        Err(AuthError::IncorrectPhone)
    }
}

fn is_plain(rest: &str) -> bool {
    rest.len() == NATIONAL_LEN && rest.bytes().all(|b| b.is_ascii_digit())
}

// ` (909) 123 12 12`
fn is_grouped(rest: &str) -> bool {
    let b = rest.as_bytes();
    b.len() == 16
        && b[0] == b' '
        && b[1] == b'('
        && b[2..5].iter().all(u8::is_ascii_digit)
        && b[5] == b')'
        && b[6] == b' '
        && b[7..10].iter().all(u8::is_ascii_digit)
        && b[10] == b' '
        && b[11..13].iter().all(u8::is_ascii_digit)
        && b[13] == b' '
        && b[14..16].iter().all(u8::is_ascii_digit)
}
