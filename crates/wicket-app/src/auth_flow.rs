use std::sync::{Mutex, MutexGuard};

use wicket_core::ids::SessionId;
use wicket_core::input::InputField;
use wicket_core::step::AuthStep;
use wicket_core::{phone, terms, token};
use wicket_ports::outbound::{UiNotifier, WalletGateway};
use wicket_ports::types::WalletActivation;

use crate::request_gate::{Outcome, RequestGate};

/// One enrollment session: input state, step progression and a
/// single-flight gate per wallet call.
///
/// Field-local failures (validation) land on the field itself; gate
/// failures go through the notifier. State sits behind a mutex so a UI
/// layer can keep delivering events while a call is outstanding; the lock
/// is never held across an await.
pub struct AuthFlow<G, N>
where
    G: WalletGateway,
    N: UiNotifier,
{
    session: SessionId,
    gateway: G,
    notifier: N,
    state: Mutex<FlowState>,
    terms_gate: RequestGate,
    phone_gate: RequestGate,
    token_gate: RequestGate,
}

#[derive(Default)]
struct FlowState {
    phone: InputField,
    token: InputField,
    terms: Option<String>,
    terms_accepted: bool,
    step: AuthStep,
    activation: Option<WalletActivation>,
}

impl<G, N> AuthFlow<G, N>
where
    G: WalletGateway,
    N: UiNotifier,
{
    pub fn new(gateway: G, notifier: N) -> Self {
        Self {
            session: SessionId::new(),
            gateway,
            notifier,
            state: Mutex::new(FlowState::default()),
            terms_gate: RequestGate::new(),
            phone_gate: RequestGate::new(),
            token_gate: RequestGate::new(),
        }
    }

    fn state(&self) -> MutexGuard<'_, FlowState> {
        self.state.lock().expect("flow state lock poisoned")
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    pub fn step(&self) -> AuthStep {
        self.state().step
    }

    pub fn phone_input(&self) -> InputField {
        self.state().phone.clone()
    }

    pub fn token_input(&self) -> InputField {
        self.state().token.clone()
    }

    pub fn terms(&self) -> Option<String> {
        self.state().terms.clone()
    }

    pub fn terms_accepted(&self) -> bool {
        self.state().terms_accepted
    }

    pub fn activation(&self) -> Option<WalletActivation> {
        self.state().activation.clone()
    }

    pub fn is_terms_loading(&self) -> bool {
        self.terms_gate.is_in_flight()
    }

    pub fn is_phone_verifying(&self) -> bool {
        self.phone_gate.is_in_flight()
    }

    pub fn is_token_verifying(&self) -> bool {
        self.token_gate.is_in_flight()
    }

    /// Reduces a phone edit to the national digit string.
    pub fn on_phone_input(&self, raw: &str) {
        self.state().phone.edit(raw, phone::normalize);
    }

    /// Reduces a token edit to the six-digit string.
    pub fn on_token_input(&self, raw: &str) {
        self.state().token.edit(raw, token::normalize);
    }

    pub fn set_terms_accepted(&self, accepted: bool) {
        self.state().terms_accepted = accepted;
    }

    pub fn can_verify_phone(&self) -> bool {
        let state = self.state();
        state.phone.digits().len() == phone::NATIONAL_LEN
            && state.terms_accepted
            && !self.phone_gate.is_in_flight()
    }

    pub fn can_verify_token(&self) -> bool {
        let state = self.state();
        state.token.digits().len() == token::TOKEN_LEN && !self.token_gate.is_in_flight()
    }

    /// Fetches and stores the terms-of-use text. Gate errors surface
    /// through the notifier; a fetch while one is outstanding is dropped.
    pub async fn load_terms(&self) -> Option<Outcome<String>> {
        let outcome = self
            .terms_gate
            .submit(|| self.gateway.fetch_terms_of_use())
            .await?;
        match outcome {
            Ok(doc) => {
                let text = terms::clean(&doc.text);
                self.state().terms = Some(text.clone());
                Some(Ok(text))
            }
            Err(error) => {
                self.notifier.notify(error).await;
                Some(Err(error))
            }
        }
    }

    /// Validates the prefixed number, then starts phone login.
    ///
    /// Validation failure stays on the field and makes no external call.
    /// Success clears the field error and advances the flow to the token
    /// step. Returns `None` when dropped because a login is outstanding.
    pub async fn verify_phone(&self) -> Option<Outcome<()>> {
        if self.phone_gate.is_in_flight() {
            return None;
        }

        let number = format!("{}{}", phone::COUNTRY_CODE, self.state().phone.digits());
        if let Err(error) = phone::validate(&number) {
            self.state().phone.set_error(error.to_string());
            return Some(Err(error));
        }

        let outcome = self
            .phone_gate
            .submit(|| self.gateway.login_by_phone(&number))
            .await?;
        match outcome {
            Ok(()) => {
                let mut state = self.state();
                state.phone.clear_error();
                if state.step == AuthStep::Phone {
                    state.step = state.step.advanced();
                }
                Some(Ok(()))
            }
            Err(error) => {
                self.notifier.notify(error).await;
                Some(Err(error))
            }
        }
    }

    /// Validates the entered token, then activates the wallet with it.
    ///
    /// Same contract as [`Self::verify_phone`]; success records the
    /// activation payload and finishes the flow.
    pub async fn verify_token(&self) -> Option<Outcome<WalletActivation>> {
        if self.token_gate.is_in_flight() {
            return None;
        }

        let code = self.state().token.digits().to_string();
        if let Err(error) = token::validate(&code) {
            self.state().token.set_error(error.to_string());
            return Some(Err(error));
        }

        let outcome = self
            .token_gate
            .submit(|| self.gateway.activate_wallet(&code, token::TOKEN_TYPE))
            .await?;
        match outcome {
            Ok(activation) => {
                let mut state = self.state();
                state.token.clear_error();
                if state.step == AuthStep::Token {
                    state.step = state.step.advanced();
                }
                state.activation = Some(activation.clone());
                Some(Ok(activation))
            }
            Err(error) => {
                self.notifier.notify(error).await;
                Some(Err(error))
            }
        }
    }
}
