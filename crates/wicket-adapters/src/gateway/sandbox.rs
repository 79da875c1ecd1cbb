use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use wicket_core::token::TOKEN_TYPE;
use wicket_ports::outbound::WalletGateway;
use wicket_ports::types::{DispatchTicket, SdkReply, TermsOfUse, WalletActivation};

/// Wallet-service code for a missing connection.
const ERR_NO_INTERNET: i32 = -40;
/// Wallet-service code for a rejected token.
const ERR_BAD_TOKEN: i32 = 806;

/// Knobs for the stand-in wallet service.
#[derive(Debug, Clone)]
pub struct SandboxConfig {
    /// Code "delivered" by SMS after a successful login call.
    pub sms_code: String,
    /// How long an issued code stays valid.
    pub code_ttl: Duration,
    pub terms_html: String,
    /// Fail at dispatch time: every call resolves to `NotSent`.
    pub fail_dispatch: bool,
    /// Fail in transport: every call resolves with the no-internet code.
    pub offline: bool,
    /// Complete successfully but without a payload.
    pub empty_payloads: bool,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            sms_code: "123456".into(),
            code_ttl: Duration::minutes(5),
            terms_html: "<title>user_agreement</title><p>Demo wallet terms of use.</p>".into(),
            fail_dispatch: false,
            offline: false,
            empty_payloads: false,
        }
    }
}

/// Deterministic in-memory wallet service used by the demo in place of the
/// closed vendor SDK.
///
/// Accepts any prefixed phone, issues the configured SMS code with an
/// expiry, and activates a wallet when the same code comes back in time.
/// The failure knobs reproduce every completion shape the flow has to map.
pub struct SandboxGateway {
    config: SandboxConfig,
    issued: Mutex<Option<IssuedCode>>,
}

#[derive(Debug, Clone)]
struct IssuedCode {
    phone: String,
    code: String,
    expires_at: DateTime<Utc>,
}

impl SandboxGateway {
    pub fn new(config: SandboxConfig) -> Self {
        Self {
            config,
            issued: Mutex::new(None),
        }
    }

    fn dispatch(&self) -> DispatchTicket {
        if self.config.fail_dispatch {
            DispatchTicket::failed(ERR_NO_INTERNET)
        } else {
            DispatchTicket::sent()
        }
    }
}

#[async_trait]
impl WalletGateway for SandboxGateway {
    async fn login_by_phone(&self, phone: &str) -> SdkReply<()> {
        if self.dispatch().has_error() {
            return SdkReply::NotSent;
        }
        if self.config.offline {
            // The login completion reports connectivity loss via its code.
            return SdkReply::Completed {
                ok: false,
                err_no: ERR_NO_INTERNET,
                payload: None,
            };
        }

        let code = IssuedCode {
            phone: phone.to_string(),
            code: self.config.sms_code.clone(),
            expires_at: Utc::now() + self.config.code_ttl,
        };
        tracing::debug!(phone, code = %code.code, "sandbox issued sms code");
        *self.issued.lock().expect("issued code lock poisoned") = Some(code);
        SdkReply::success(())
    }

    async fn activate_wallet(&self, token: &str, token_type: &str) -> SdkReply<WalletActivation> {
        if self.dispatch().has_error() {
            return SdkReply::NotSent;
        }
        if self.config.offline {
            return SdkReply::TransportFailed {
                err_no: Some(ERR_NO_INTERNET),
            };
        }
        if self.config.empty_payloads {
            return SdkReply::Completed {
                ok: true,
                err_no: 0,
                payload: None,
            };
        }

        let issued = self.issued.lock().expect("issued code lock poisoned").clone();
        match issued {
            Some(issued)
                if token_type == TOKEN_TYPE
                    && issued.code == token
                    && Utc::now() < issued.expires_at =>
            {
                tracing::debug!(phone = %issued.phone, "sandbox activated wallet");
                SdkReply::success(WalletActivation {
                    wallet_id: format!("W-{}", issued.phone),
                    active: true,
                })
            }
            _ => SdkReply::error_code(ERR_BAD_TOKEN),
        }
    }

    async fn fetch_terms_of_use(&self) -> SdkReply<TermsOfUse> {
        if self.dispatch().has_error() {
            return SdkReply::NotSent;
        }
        if self.config.offline {
            return SdkReply::Completed {
                ok: false,
                err_no: ERR_NO_INTERNET,
                payload: None,
            };
        }
        if self.config.empty_payloads {
            return SdkReply::Completed {
                ok: true,
                err_no: 0,
                payload: None,
            };
        }

        SdkReply::success(TermsOfUse {
            text: self.config.terms_html.clone(),
        })
    }
}
