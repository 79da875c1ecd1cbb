use serde::{Deserialize, Serialize};

/// Opaque token handed back the moment a call reaches the wallet SDK.
/// Reports dispatch-time failure (e.g. no connectivity) before any
/// completion arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchTicket {
    err_no: Option<i32>,
}

impl DispatchTicket {
    pub fn sent() -> Self {
        Self { err_no: None }
    }

    pub fn failed(err_no: i32) -> Self {
        Self {
            err_no: Some(err_no),
        }
    }

    pub fn has_error(&self) -> bool {
        self.err_no.is_some()
    }
}

/// The shapes a wallet-SDK call can resolve to, as one tagged type in
/// place of an overridable callback object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkReply<P> {
    /// The dispatch ticket reported an error; no completion will arrive.
    NotSent,
    /// The completion callback fired: completion flag, vendor error code,
    /// optional typed payload.
    Completed {
        ok: bool,
        err_no: i32,
        payload: Option<P>,
    },
    /// The failure callback fired, possibly without a usable code.
    TransportFailed { err_no: Option<i32> },
}

impl<P> SdkReply<P> {
    /// Clean success carrying a payload.
    pub fn success(payload: P) -> Self {
        Self::Completed {
            ok: true,
            err_no: 0,
            payload: Some(payload),
        }
    }

    /// Completion that carries a vendor error code.
    pub fn error_code(err_no: i32) -> Self {
        Self::Completed {
            ok: true,
            err_no,
            payload: None,
        }
    }
}

/// Payload of a successful wallet activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletActivation {
    pub wallet_id: String,
    pub active: bool,
}

/// Terms-of-use document served by the wallet service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsOfUse {
    pub text: String,
}
