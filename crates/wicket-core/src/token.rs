use crate::error::AuthError;

/// Length of an SMS confirmation token.
pub const TOKEN_LEN: usize = 6;
/// Token type sent alongside wallet activation.
pub const TOKEN_TYPE: &str = "sms";

/// Reduces free-form token text to at most [`TOKEN_LEN`] digits.
pub fn normalize(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.truncate(TOKEN_LEN);
    digits
}

/// Accepts a token that starts with exactly [`TOKEN_LEN`] ASCII digits.
///
/// The check is anchored at the start only: characters after the sixth
/// digit are tolerated. Input that went through [`normalize`] can never
/// carry such a tail, so through the flow this behaves as an exact match.
pub fn validate(token: &str) -> Result<(), AuthError> {
    let b = token.as_bytes();
    if b.len() >= TOKEN_LEN && b[..TOKEN_LEN].iter().all(u8::is_ascii_digit) {
        Ok(())
    } else {
        Err(AuthError::IncorrectToken)
    }
}
