//! Session context for the frontend. The provider reads the stored token once
//! on mount and exposes it as a signal so the header and guarded routes react
//! to login and logout. Storage stays the source of truth; the signal mirrors it.

use super::{BrowserStorage, Session};
use crate::app_lib::AppError;
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Session state shared through Leptos.
pub struct SessionContext {
    pub token: RwSignal<Option<String>>,
    pub is_logged_in: Signal<bool>,
}

impl SessionContext {
    fn new(token: RwSignal<Option<String>>) -> Self {
        let is_logged_in = Signal::derive(move || token.get().is_some());
        Self {
            token,
            is_logged_in,
        }
    }

    /// Storage-backed session handle.
    pub fn session(&self) -> Session<BrowserStorage> {
        Session::new(BrowserStorage)
    }

    /// Persists a freshly issued token and publishes it.
    pub fn sign_in(&self, token: &str) -> Result<(), AppError> {
        self.session().store_token(token)?;
        self.token.set(Some(token.to_string()));
        Ok(())
    }

    /// Clears every stored key and drops the in-memory copy.
    pub fn logout(&self) -> Result<(), AppError> {
        let cleared = self.session().clear_all();
        self.token.set(None);
        cleared
    }
}

/// Provides the session context, hydrated from storage on mount.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let token = RwSignal::new(Session::new(BrowserStorage).token());
    provide_context(SessionContext::new(token));

    view! { {children()} }
}

/// Returns the current session context or one hydrated from storage.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        let token = RwSignal::new(Session::new(BrowserStorage).token());
        SessionContext::new(token)
    })
}
