use std::time::{Duration, Instant};

use async_trait::async_trait;
use bearer_session::notify::StateConsumer;
use bearer_session::session::AuthenticationState;
use tokio::sync::RwLock;

/// Records every broadcast state, in delivery order.
pub struct RecordingConsumer {
    states: RwLock<Vec<AuthenticationState>>,
}

impl RecordingConsumer {
    pub fn new() -> Self {
        Self {
            states: RwLock::new(Vec::new()),
        }
    }

    pub async fn count(&self) -> usize {
        self.states.read().await.len()
    }

    pub async fn received(&self) -> Vec<AuthenticationState> {
        self.states.read().await.clone()
    }

    pub async fn last(&self) -> Option<AuthenticationState> {
        self.states.read().await.last().cloned()
    }
}

#[async_trait]
impl StateConsumer for RecordingConsumer {
    async fn receive_state(&self, state: AuthenticationState) {
        self.states.write().await.push(state);
    }
}

/// Wait until `consumer` has recorded at least `expected` broadcasts.
pub async fn wait_for_broadcasts(consumer: &RecordingConsumer, expected: usize) -> bool {
    let start = Instant::now();
    while start.elapsed() < Duration::from_millis(500) {
        if consumer.count().await >= expected {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}
