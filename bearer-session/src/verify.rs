use std::marker::PhantomData;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use log::debug;
use serde::de::DeserializeOwned;

use crate::{
    claims::RegisteredClaims,
    error::{StartupError, VerificationError},
    raw_token::RawToken,
};

/// Verifies token signatures and registered claims.
///
/// Complements [JwtTokenDecoder](crate::jwt_decode::JwtTokenDecoder): the
/// session derives state from the token's shape alone, while tokens
/// arriving from outside should be verified before they are handed to
/// [mark_authenticated](crate::session::AuthSession::mark_authenticated).
///
/// Tokens must be signed with a shared HS256 secret and are checked for
/// issuer, audience and lifetime (`exp`, plus `nbf` when present). The
/// accepted clock skew is zero unless configured via
/// [leeway](TokenVerifierBuilder::leeway).
pub struct TokenVerifier<Claims = RegisteredClaims>
where
    Claims: DeserializeOwned,
{
    decoding_key: DecodingKey,
    validation: Validation,
    phantom: PhantomData<Claims>,
}

impl<Claims> std::fmt::Debug for TokenVerifier<Claims>
where
    Claims: DeserializeOwned,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // DecodingKey does not implement Debug (and holds key material).
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl<Claims> TokenVerifier<Claims>
where
    Claims: DeserializeOwned,
{
    pub fn builder() -> TokenVerifierBuilder<Claims> {
        TokenVerifierBuilder::new()
    }

    /// Verify `token` against the configured key, issuer and audience.
    pub fn verify(&self, token: &RawToken) -> Result<Claims, VerificationError> {
        match decode::<Claims>(token.as_str(), &self.decoding_key, &self.validation) {
            Ok(result) => {
                debug!("Token verification successful");
                Ok(result.claims)
            }
            Err(e) => {
                let reason = e.into_kind();
                debug!("Token verification failed: {:?}", reason);
                Err(VerificationError::ValidationFailed { reason })
            }
        }
    }
}

pub struct TokenVerifierBuilder<Claims>
where
    Claims: DeserializeOwned,
{
    symmetric_key: Option<Vec<u8>>,
    issuer: Option<String>,
    audience: Option<String>,
    leeway: u64,
    phantom: PhantomData<Claims>,
}

impl<Claims> TokenVerifierBuilder<Claims>
where
    Claims: DeserializeOwned,
{
    fn new() -> Self {
        TokenVerifierBuilder {
            symmetric_key: None,
            issuer: None,
            audience: None,
            leeway: 0,
            phantom: PhantomData,
        }
    }

    /// Set the shared secret tokens must be signed with (HS256).
    pub fn symmetric_key(mut self, symmetric_key: impl AsRef<[u8]>) -> Self {
        self.symmetric_key = Some(symmetric_key.as_ref().to_vec());
        self
    }

    /// Set the expected `iss` claim.
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Set the expected `aud` claim.
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Set the accepted clock skew for `exp` and `nbf`, in seconds.
    ///
    /// Default value is `0`.
    pub fn leeway(mut self, leeway: u64) -> Self {
        self.leeway = leeway;
        self
    }

    /// Construct a TokenVerifier.
    pub fn build(self) -> Result<TokenVerifier<Claims>, StartupError> {
        let symmetric_key = self.symmetric_key.ok_or_else(|| {
            StartupError::InvalidParameter("symmetric_key is required".to_owned())
        })?;
        let issuer = self
            .issuer
            .ok_or_else(|| StartupError::InvalidParameter("issuer is required".to_owned()))?;
        let audience = self
            .audience
            .ok_or_else(|| StartupError::InvalidParameter("audience is required".to_owned()))?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.set_issuer(&[&issuer]);
        validation.set_audience(&[&audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);

        Ok(TokenVerifier {
            decoding_key: DecodingKey::from_secret(&symmetric_key),
            validation,
            phantom: PhantomData,
        })
    }
}

impl<Claims> Default for TokenVerifierBuilder<Claims>
where
    Claims: DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}
