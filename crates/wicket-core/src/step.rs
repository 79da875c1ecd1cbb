use serde::{Deserialize, Serialize};

/// Enrollment progression: phone entry, then token entry, then done.
///
/// A step advances only when the verification it names succeeds; there is
/// no regression and no skipping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthStep {
    #[default]
    Phone,
    Token,
    Done,
}

impl AuthStep {
    /// The step reached once the current one verifies.
    pub fn advanced(self) -> Self {
        match self {
            Self::Phone => Self::Token,
            Self::Token | Self::Done => Self::Done,
        }
    }

    pub fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_advance_in_order() {
        let step = AuthStep::default();
        assert_eq!(step, AuthStep::Phone);
        assert_eq!(step.advanced(), AuthStep::Token);
        assert_eq!(step.advanced().advanced(), AuthStep::Done);
    }

    #[test]
    fn done_is_terminal() {
        assert_eq!(AuthStep::Done.advanced(), AuthStep::Done);
        assert!(AuthStep::Done.is_done());
        assert!(!AuthStep::Phone.is_done());
    }
}
