use std::sync::Arc;

use crate::{
    claims::ClaimMappings,
    error::StartupError,
    jwt_decode::{JwtTokenDecoder, TokenDecoder},
    notify::StateConsumer,
    session::AuthSession,
    store::{TokenStore, DEFAULT_TOKEN_KEY},
};

pub struct AuthSessionBuilder {
    store: Option<Arc<dyn TokenStore>>,
    decoder: Option<Arc<dyn TokenDecoder>>,
    consumers: Vec<Arc<dyn StateConsumer>>,
    token_key: Option<String>,
    claim_mappings: Option<ClaimMappings>,
    log_decoded_claims: bool,
}

impl AuthSession {
    pub fn builder() -> AuthSessionBuilder {
        AuthSessionBuilder::new()
    }
}

impl AuthSessionBuilder {
    fn new() -> Self {
        AuthSessionBuilder {
            store: None,
            decoder: None,
            consumers: Vec::new(),
            token_key: None,
            claim_mappings: None,
            log_decoded_claims: false,
        }
    }

    /// Set the persisted token store backing the session.
    ///
    /// Required. The durability of the store decides the lifetime of the
    /// session.
    pub fn store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the decoder used to derive claims from the persisted token.
    ///
    /// Default is [JwtTokenDecoder].
    pub fn decoder(mut self, decoder: Arc<dyn TokenDecoder>) -> Self {
        self.decoder = Some(decoder);
        self
    }

    /// Register a consumer before the session is constructed.
    ///
    /// Further consumers can be added later via
    /// [add_consumer](AuthSession::add_consumer).
    pub fn add_consumer(mut self, consumer: Arc<dyn StateConsumer>) -> Self {
        self.consumers.push(consumer);
        self
    }

    /// Set the key the token is persisted under.
    ///
    /// Default value is `"token"`.
    pub fn token_key(mut self, token_key: impl Into<String>) -> Self {
        self.token_key = Some(token_key.into());
        self
    }

    /// Set the claim names used to resolve display name and roles.
    pub fn claim_mappings(mut self, claim_mappings: ClaimMappings) -> Self {
        self.claim_mappings = Some(claim_mappings);
        self
    }

    /// Log every decoded claim at debug level.
    ///
    /// Off by default. Claim values end up in the log output, so only
    /// enable this for diagnostics.
    pub fn log_decoded_claims(mut self, log_decoded_claims: bool) -> Self {
        self.log_decoded_claims = log_decoded_claims;
        self
    }

    /// Construct an AuthSession.
    pub fn build(self) -> Result<AuthSession, StartupError> {
        let store = self
            .store
            .ok_or_else(|| StartupError::InvalidParameter("store is required".to_owned()))?;
        Ok(AuthSession::new(
            store,
            self.decoder.unwrap_or_else(|| Arc::new(JwtTokenDecoder)),
            self.consumers,
            self.token_key
                .unwrap_or_else(|| DEFAULT_TOKEN_KEY.to_owned()),
            self.claim_mappings.unwrap_or_default(),
            self.log_decoded_claims,
        ))
    }
}

impl Default for AuthSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
