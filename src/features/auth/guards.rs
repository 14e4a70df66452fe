use crate::features::session::{Session, SessionStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Deny,
}

/// Allows entry iff a token is stored right now. Validity and expiry are not
/// checked; the API is the real access control.
pub fn can_activate<S: SessionStore>(session: &Session<S>) -> GuardDecision {
    if session.is_logged_in() {
        GuardDecision::Allow
    } else {
        GuardDecision::Deny
    }
}

#[cfg(target_arch = "wasm32")]
pub use view::RequireToken;

#[cfg(target_arch = "wasm32")]
mod view {
    use super::{GuardDecision, can_activate};
    use crate::features::session::context::use_session;
    use leptos::prelude::*;

    /// Renders `children` only while the guard allows entry. A denied
    /// navigation renders nothing and does not redirect.
    #[component]
    pub fn RequireToken(children: ChildrenFn) -> impl IntoView {
        let session = use_session();

        move || {
            // Track the signal so login/logout re-run the check, but decide on storage.
            session.token.track();
            match can_activate(&session.session()) {
                GuardDecision::Allow => Some(children()),
                GuardDecision::Deny => {
                    tracing::warn!("navigation blocked: no session token");
                    None
                }
            }
        }
    }
}
