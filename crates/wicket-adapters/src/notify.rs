use async_trait::async_trait;

use wicket_core::error::AuthError;
use wicket_ports::outbound::UiNotifier;

/// Surfaces globally-scoped flow errors through the log, standing in for
/// the toast/snackbar layer a full client would have.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[async_trait]
impl UiNotifier for TracingNotifier {
    async fn notify(&self, error: AuthError) {
        tracing::warn!(error = %error, "enrollment error");
    }
}
