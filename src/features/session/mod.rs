//! Session token handling. The token is issued by the exam API at login and
//! kept in client storage under [`TOKEN_KEY`]; every authenticated request and
//! the route guard read it through [`Session`] instead of touching storage
//! directly. There is no client-side expiry.

#[cfg(target_arch = "wasm32")]
pub(crate) mod context;
pub(crate) mod storage;

#[cfg(target_arch = "wasm32")]
pub(crate) use storage::BrowserStorage;
pub(crate) use storage::{MemoryStorage, SessionStore, TOKEN_KEY};

use crate::app_lib::AppError;
use tracing::{info, warn};

/// The single owner of the session token.
#[derive(Clone, Copy, Debug, Default)]
pub struct Session<S> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current token. Empty values and unreadable storage count as no token.
    pub fn token(&self) -> Option<String> {
        match self.store.get(TOKEN_KEY) {
            Ok(token) => token.filter(|value| !value.is_empty()),
            Err(err) => {
                warn!(%err, "unable to read session token");
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn store_token(&self, token: &str) -> Result<(), AppError> {
        self.store.set(TOKEN_KEY, token)?;
        info!("session token stored");
        Ok(())
    }

    /// Wipes all client storage, including keys unrelated to the session.
    pub fn clear_all(&self) -> Result<(), AppError> {
        self.store.clear()?;
        info!("client storage cleared");
        Ok(())
    }
}
