use async_trait::async_trait;

use crate::session::AuthenticationState;

/// Receives the new [AuthenticationState] after every session transition.
///
/// Register implementations via
/// [add_consumer](crate::session::AuthSession::add_consumer) or up front via
/// [AuthSessionBuilder](crate::builder::AuthSessionBuilder::add_consumer).
///
/// Broadcasts are delivered from a separate task, so a slow consumer never
/// blocks the session. Consumers must tolerate overlapping deliveries when
/// transitions happen in quick succession.
#[async_trait]
pub trait StateConsumer: Send + Sync {
    async fn receive_state(&self, state: AuthenticationState);
}
