use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use bearer_session::notify::StateConsumer;
use bearer_session::policy::{PolicySet, RolePolicy};
use bearer_session::raw_token::RawToken;
use bearer_session::session::{AuthSession, AuthenticationState};
use bearer_session::store::InMemoryTokenStore;
use bearer_session::verify::TokenVerifier;
use jsonwebtoken::{encode, EncodingKey, Header};
use log::info;
use serde_json::json;

const SECRET: &str = "demo-secret-not-for-production";
const ISSUER: &str = "https://demo-issuer.example";
const AUDIENCE: &str = "https://demo-app.example";

struct LoggingConsumer;

#[async_trait]
impl StateConsumer for LoggingConsumer {
    async fn receive_state(&self, state: AuthenticationState) {
        match state.principal().name() {
            Some(name) => info!("State changed: authenticated as {}", name),
            None => info!("State changed: anonymous"),
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let session = AuthSession::builder()
        .store(Arc::new(InMemoryTokenStore::new()))
        .add_consumer(Arc::new(LoggingConsumer))
        .log_decoded_claims(true)
        .build()
        .expect("Failed to build AuthSession");

    let verifier = <TokenVerifier>::builder()
        .symmetric_key(SECRET)
        .issuer(ISSUER)
        .audience(AUDIENCE)
        .build()
        .expect("Failed to build TokenVerifier");

    let policies = PolicySet::new()
        .add_policy(RolePolicy::new("admin-only", &["Admin"]))
        .add_policy(RolePolicy::new("user-only", &["User"]));

    let state = session
        .current_state()
        .await
        .expect("Token store unavailable");
    info!("Before login, authenticated: {}", state.is_authenticated());

    let token = mint_token("alice", &["Admin"]);
    verifier
        .verify(&RawToken::new(token.clone()))
        .expect("Freshly minted token should verify");

    let state = session
        .mark_authenticated(token)
        .await
        .expect("Token store unavailable");
    info!(
        "Logged in as {:?} with roles {:?}",
        state.principal().name(),
        state.principal().roles()
    );

    for policy in ["admin-only", "user-only"] {
        match policies.evaluate(policy, state.principal()) {
            Ok(()) => info!("{}: granted", policy),
            Err(e) => info!("{}: denied ({})", policy, e),
        }
    }

    let state = session
        .mark_logged_out()
        .await
        .expect("Token store unavailable");
    info!("After logout, authenticated: {}", state.is_authenticated());

    // Let the broadcast task finish before the runtime shuts down.
    tokio::time::sleep(Duration::from_millis(50)).await;
}

fn mint_token(name: &str, roles: &[&str]) -> String {
    let exp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before unix epoch")
        .as_secs()
        + 60 * 5;
    let claims = json!({
        "iss": ISSUER,
        "aud": AUDIENCE,
        "sub": name,
        "unique_name": name,
        "role": roles,
        "exp": exp,
    });
    encode(
        &Header::new(jsonwebtoken::Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("Failed to mint demo token")
}
