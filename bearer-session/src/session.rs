use core::fmt;
use std::sync::Arc;

use futures_util::future::join_all;
use log::{debug, info, warn};
use tokio::sync::RwLock;

use crate::{
    claims::ClaimMappings, error::StorageUnavailableError, jwt_decode::TokenDecoder,
    notify::StateConsumer, principal::Principal, raw_token::RawToken, store::TokenStore,
};

/// Snapshot of the session's authentication state.
///
/// Replaced wholesale on every transition, never mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticationState {
    principal: Principal,
}

impl AuthenticationState {
    pub fn new(principal: Principal) -> Self {
        AuthenticationState { principal }
    }

    pub fn anonymous() -> Self {
        AuthenticationState::new(Principal::anonymous())
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_authenticated()
    }
}

/// AuthSession
///
/// Single source of truth for the current authentication state.
/// Construct via [builder](AuthSession::builder), then share clones
/// wherever the state is read or transitions are triggered.
#[derive(Clone)]
pub struct AuthSession {
    store: Arc<dyn TokenStore>,
    decoder: Arc<dyn TokenDecoder>,
    consumers: Arc<RwLock<Vec<Arc<dyn StateConsumer>>>>,
    token_key: String,
    claim_mappings: ClaimMappings,
    log_decoded_claims: bool,
}

impl AuthSession {
    pub(crate) fn new(
        store: Arc<dyn TokenStore>,
        decoder: Arc<dyn TokenDecoder>,
        consumers: Vec<Arc<dyn StateConsumer>>,
        token_key: String,
        claim_mappings: ClaimMappings,
        log_decoded_claims: bool,
    ) -> Self {
        info!(
            "Session will keep the token under '{}' and resolve principals with {}",
            &token_key, &claim_mappings
        );
        AuthSession {
            store,
            decoder,
            consumers: Arc::new(RwLock::new(consumers)),
            token_key,
            claim_mappings,
            log_decoded_claims,
        }
    }

    /// Derive the current state from the persisted token.
    ///
    /// An absent or blank token yields the anonymous state without invoking
    /// the decoder. A token that fails to decode is removed from the store
    /// (best effort) and also yields the anonymous state. Only storage
    /// failures surface as errors.
    pub async fn current_state(&self) -> Result<AuthenticationState, StorageUnavailableError> {
        let token = match self.store.get(&self.token_key).await? {
            Some(token) => RawToken::new(token),
            None => return Ok(AuthenticationState::anonymous()),
        };
        if token.is_blank() {
            return Ok(AuthenticationState::anonymous());
        }
        match self.decoder.decode(&token) {
            Ok(claims) => {
                if self.log_decoded_claims {
                    for claim in claims.iter() {
                        debug!("Decoded claim {}", claim);
                    }
                }
                Ok(AuthenticationState::new(Principal::authenticated(
                    claims,
                    self.claim_mappings.clone(),
                )))
            }
            Err(e) => {
                debug!("Discarding persisted token: {}", e);
                if let Err(e) = self.store.remove(&self.token_key).await {
                    warn!("Failed to remove malformed token: {}", e);
                }
                Ok(AuthenticationState::anonymous())
            }
        }
    }

    /// Persist `token` and broadcast the resulting state.
    ///
    /// The token is stored verbatim, without validation. The broadcast state
    /// is recomputed from the store, so a token that fails to decode results
    /// in an anonymous state and an already purged store slot.
    pub async fn mark_authenticated(
        &self,
        token: impl Into<String>,
    ) -> Result<AuthenticationState, StorageUnavailableError> {
        let token = token.into();
        self.store.set(&self.token_key, &token).await?;
        let state = self.current_state().await?;
        self.notify_consumers(state.clone()).await;
        Ok(state)
    }

    /// Remove the persisted token and broadcast the anonymous state.
    ///
    /// Idempotent. Logging out an already anonymous session broadcasts
    /// again.
    pub async fn mark_logged_out(&self) -> Result<AuthenticationState, StorageUnavailableError> {
        self.store.remove(&self.token_key).await?;
        let state = self.current_state().await?;
        self.notify_consumers(state.clone()).await;
        Ok(state)
    }

    /// Register a consumer for every subsequent state broadcast.
    pub async fn add_consumer(&self, consumer: Arc<dyn StateConsumer>) {
        self.consumers.write().await.push(consumer);
    }

    async fn notify_consumers(&self, state: AuthenticationState) {
        let consumers = self.consumers.read().await.clone();
        if consumers.is_empty() {
            return;
        }
        tokio::spawn(notify_job(consumers, state));
    }
}

async fn notify_job(consumers: Vec<Arc<dyn StateConsumer>>, state: AuthenticationState) {
    join_all(
        consumers
            .iter()
            .map(|consumer| consumer.receive_state(state.clone()))
            .collect::<Vec<_>>(),
    )
    .await;
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("token_key", &self.token_key)
            .finish()
    }
}
