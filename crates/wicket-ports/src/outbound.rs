use async_trait::async_trait;

use wicket_core::error::AuthError;

use crate::types::{SdkReply, TermsOfUse, WalletActivation};

/// The closed wallet SDK, reduced to the three calls the enrollment flow
/// drives. Implementations resolve each call to a single [`SdkReply`];
/// a dispatch-time failure resolves immediately to [`SdkReply::NotSent`].
#[async_trait]
pub trait WalletGateway: Send + Sync {
    /// Starts phone login. `phone` is the fully-prefixed number
    /// (country code plus ten national digits).
    async fn login_by_phone(&self, phone: &str) -> SdkReply<()>;

    /// Activates the wallet with a confirmation token of the given type.
    async fn activate_wallet(&self, token: &str, token_type: &str) -> SdkReply<WalletActivation>;

    async fn fetch_terms_of_use(&self) -> SdkReply<TermsOfUse>;
}

/// Sink for globally surfaced errors — transport and dispatch failures
/// that belong to no single input field.
#[async_trait]
pub trait UiNotifier: Send + Sync {
    async fn notify(&self, error: AuthError);
}
