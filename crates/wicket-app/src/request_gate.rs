use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use wicket_core::error::AuthError;
use wicket_ports::types::SdkReply;

/// Outcome of one submit attempt.
pub type Outcome<P> = Result<P, AuthError>;

/// Single-flight wrapper around one logical wallet call.
///
/// At most one call is in flight per gate; a submit while one is
/// outstanding is dropped, not queued. The flag clears before the outcome
/// is returned, so a failed attempt can be resubmitted immediately.
#[derive(Debug, Default)]
pub struct RequestGate {
    in_flight: AtomicBool,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Runs `call` unless another call on this gate is outstanding and
    /// maps its reply onto an outcome. Returns `None` when the submit was
    /// dropped.
    pub async fn submit<P, F, Fut>(&self, call: F) -> Option<Outcome<P>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = SdkReply<P>>,
    {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return None;
        }
        let reply = call().await;
        let outcome = outcome_of(reply);
        self.in_flight.store(false, Ordering::Release);
        Some(outcome)
    }
}

/// Maps the three completion shapes onto one outcome.
///
/// A completion whose flag is down or whose code is nonzero resolves
/// through the code table even when a payload is present; a clean
/// completion without a payload is an empty response.
pub fn outcome_of<P>(reply: SdkReply<P>) -> Outcome<P> {
    match reply {
        SdkReply::NotSent => Err(AuthError::RequestNotSent),
        SdkReply::Completed { ok, err_no, .. } if !ok || err_no != 0 => {
            Err(AuthError::of_code(err_no))
        }
        SdkReply::Completed {
            payload: Some(payload),
            ..
        } => Ok(payload),
        SdkReply::Completed { payload: None, .. } => Err(AuthError::EmptyResponse),
        SdkReply::TransportFailed { err_no } => {
            Err(err_no.map_or(AuthError::Unknown, AuthError::of_code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use tokio::sync::Notify;

    #[test]
    fn not_sent_maps_to_request_not_sent() {
        assert_eq!(
            outcome_of::<()>(SdkReply::NotSent),
            Err(AuthError::RequestNotSent)
        );
    }

    #[test]
    fn completion_codes_map_through_the_table() {
        assert_eq!(
            outcome_of::<()>(SdkReply::error_code(-40)),
            Err(AuthError::NoInternet)
        );
        assert_eq!(
            outcome_of::<()>(SdkReply::error_code(806)),
            Err(AuthError::IncorrectToken)
        );
        assert_eq!(
            outcome_of::<()>(SdkReply::error_code(123)),
            Err(AuthError::Unknown)
        );
    }

    #[test]
    fn downed_flag_maps_even_with_payload() {
        let reply = SdkReply::Completed {
            ok: false,
            err_no: 0,
            payload: Some(7u32),
        };
        assert_eq!(outcome_of(reply), Err(AuthError::Unknown));
    }

    #[test]
    fn nonzero_code_wins_over_missing_payload() {
        let reply = SdkReply::<u32>::Completed {
            ok: true,
            err_no: 806,
            payload: None,
        };
        assert_eq!(outcome_of(reply), Err(AuthError::IncorrectToken));
    }

    #[test]
    fn clean_completion_without_payload_is_empty_response() {
        let reply = SdkReply::<u32>::Completed {
            ok: true,
            err_no: 0,
            payload: None,
        };
        assert_eq!(outcome_of(reply), Err(AuthError::EmptyResponse));
    }

    #[test]
    fn clean_completion_yields_the_payload() {
        assert_eq!(outcome_of(SdkReply::success(7u32)), Ok(7));
    }

    #[test]
    fn transport_failure_maps_code_or_unknown() {
        assert_eq!(
            outcome_of::<()>(SdkReply::TransportFailed { err_no: Some(-40) }),
            Err(AuthError::NoInternet)
        );
        assert_eq!(
            outcome_of::<()>(SdkReply::TransportFailed { err_no: None }),
            Err(AuthError::Unknown)
        );
    }

    #[tokio::test]
    async fn submit_clears_the_flag_after_each_outcome() {
        let gate = RequestGate::new();

        let outcome = gate.submit(|| async { SdkReply::success(1u32) }).await;
        assert_eq!(outcome, Some(Ok(1)));
        assert!(!gate.is_in_flight());

        let outcome = gate.submit(|| async { SdkReply::<u32>::NotSent }).await;
        assert_eq!(outcome, Some(Err(AuthError::RequestNotSent)));
        assert!(!gate.is_in_flight());
    }

    #[tokio::test]
    async fn second_submit_while_outstanding_is_dropped() {
        let gate = Arc::new(RequestGate::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let release = Arc::new(Notify::new());

        let first = {
            let gate = gate.clone();
            let calls = calls.clone();
            let release = release.clone();
            tokio::spawn(async move {
                gate.submit(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    release.notified().await;
                    SdkReply::success(())
                })
                .await
            })
        };

        while !gate.is_in_flight() {
            tokio::task::yield_now().await;
        }

        let second = gate
            .submit(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                SdkReply::success(())
            })
            .await;
        assert_eq!(second, None);

        release.notify_one();
        assert_eq!(first.await.unwrap(), Some(Ok(())));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!gate.is_in_flight());
    }
}
