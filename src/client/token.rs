//! Bearer credential cache for the travel API
//!
//! [`TokenCache`] owns the current [`Credential`] and refreshes it through a
//! [`CredentialExchange`] whenever it is missing or expired. The slot stays
//! locked for the duration of an exchange, so callers that arrive while a
//! refresh is in flight wait for it instead of starting their own.

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use super::api::CredentialExchange;
use crate::error::{ApiError, Result};

/// Bearer token with its absolute expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    /// Build a credential from a lifetime in seconds, as returned by OAuth endpoints.
    ///
    /// A lifetime that does not fit a timestamp is an invalid response.
    pub fn from_lifetime(
        token: String,
        expires_in: i64,
        now: DateTime<Utc>,
    ) -> std::result::Result<Self, ApiError> {
        let expires_at = Duration::try_seconds(expires_in)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                ApiError::InvalidResponse(format!("Token lifetime out of range: {}", expires_in))
            })?;

        Ok(Self { token, expires_at })
    }

    /// A credential authenticates requests only strictly before its expiry
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Single-flight cache around a credential exchange
pub struct TokenCache<E> {
    exchange: E,
    slot: Mutex<Option<Credential>>,
}

impl<E: CredentialExchange> TokenCache<E> {
    pub fn new(exchange: E) -> Self {
        Self {
            exchange,
            slot: Mutex::new(None),
        }
    }

    /// Return a valid bearer token, exchanging credentials first if needed.
    ///
    /// Exchange failures propagate unchanged and leave the slot untouched.
    pub async fn token(&self) -> Result<String> {
        let mut slot = self.slot.lock().await;

        if let Some(credential) = slot.as_ref().filter(|c| c.is_valid_at(Utc::now())) {
            return Ok(credential.token.clone());
        }

        let fresh = self.exchange.exchange().await?;
        log::debug!("Cached new credential valid until {}", fresh.expires_at);

        let token = fresh.token.clone();
        *slot = Some(fresh);
        Ok(token)
    }

    /// Replace the cached credential wholesale
    pub async fn set_credential(&self, credential: Credential) {
        *self.slot.lock().await = Some(credential);
    }

    /// Snapshot of the cached credential, if any
    pub async fn current(&self) -> Option<Credential> {
        self.slot.lock().await.clone()
    }
}
