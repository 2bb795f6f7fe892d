#![doc = include_str!("../README.md")]

/// Builder used to construct an [AuthSession](crate::session::AuthSession) instance.
///
/// For further information on the different properties,
/// see [AuthSessionBuilder](crate::builder::AuthSessionBuilder).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use bearer_session::session::AuthSession;
/// use bearer_session::store::InMemoryTokenStore;
///
/// let session = AuthSession::builder()
///     .store(Arc::new(InMemoryTokenStore::new()))
///     .build()
///     .expect("Failed to build AuthSession");
/// ```
pub mod builder;

/// Claim types decoded from token payloads.
///
/// [ClaimSet](crate::claims::ClaimSet) holds the flattened claims of a
/// decoded token.
/// [ClaimMappings](crate::claims::ClaimMappings) configures which claim
/// names resolve a principal's display name and roles.
/// [RegisteredClaims](crate::claims::RegisteredClaims) is the default
/// claims implementation used by [TokenVerifier](crate::verify::TokenVerifier).
pub mod claims;

/// Error types.
pub mod error;

/// Structural token decoding.
///
/// [JwtTokenDecoder](crate::jwt_decode::JwtTokenDecoder) turns a JWT in
/// compact serialization into a [ClaimSet](crate::claims::ClaimSet) without
/// verifying its signature. Only the token's shape is inspected.
pub mod jwt_decode;

/// [StateConsumer](crate::notify::StateConsumer) implementations receive a
/// broadcast after every session transition.
pub mod notify;

/// Named role policies for authorization decisions.
pub mod policy;

/// [Principal](crate::principal::Principal) is the identity derived from a
/// decoded token, or the anonymous identity.
pub mod principal;

/// [RawToken](crate::raw_token::RawToken) is used to represent a not yet
/// decoded token.
pub mod raw_token;

/// [AuthSession](crate::session::AuthSession) is the single source of truth
/// for the current authentication state.
///
/// It derives the state from a token kept in a
/// [TokenStore](crate::store::TokenStore), reacts to login and logout
/// commands and broadcasts every transition to registered
/// [StateConsumer](crate::notify::StateConsumer)s.
///
/// It's recommended to keep a single instance per user session and provide
/// clones of it to the different places where the authentication state is
/// needed.
pub mod session;

/// Persisted token store.
///
/// The durability of the store decides the lifetime of a session.
/// [InMemoryTokenStore](crate::store::InMemoryTokenStore) is provided for
/// tests and short lived processes; implement
/// [TokenStore](crate::store::TokenStore) against durable storage where
/// sessions must survive a restart.
pub mod store;

/// Signature verification for tokens received from outside.
///
/// [TokenVerifier](crate::verify::TokenVerifier) checks an HS256 signature
/// together with issuer, audience and expiry before a token is handed to
/// [mark_authenticated](crate::session::AuthSession::mark_authenticated).
pub mod verify;
