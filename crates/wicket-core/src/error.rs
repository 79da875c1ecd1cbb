use thiserror::Error;

/// Terminal, user-visible outcomes of the enrollment flow. None are fatal;
/// every one of them leaves the flow waiting for a fresh user submit.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("incorrect phone number")]
    IncorrectPhone,
    #[error("incorrect token")]
    IncorrectToken,
    #[error("no internet connection")]
    NoInternet,
    #[error("request was not sent")]
    RequestNotSent,
    #[error("server returned an empty response")]
    EmptyResponse,
    #[error("unknown error")]
    Unknown,
}

impl AuthError {
    /// Maps a wallet-service error code onto its user-facing kind. The
    /// table mirrors the service's error vocabulary exactly.
    pub fn of_code(code: i32) -> Self {
        match code {
            -40 => Self::NoInternet,
            806 => Self::IncorrectToken,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_their_kind() {
        assert_eq!(AuthError::of_code(-40), AuthError::NoInternet);
        assert_eq!(AuthError::of_code(806), AuthError::IncorrectToken);
    }

    #[test]
    fn unmapped_codes_are_unknown() {
        assert_eq!(AuthError::of_code(123), AuthError::Unknown);
        assert_eq!(AuthError::of_code(0), AuthError::Unknown);
        assert_eq!(AuthError::of_code(-1), AuthError::Unknown);
    }
}
