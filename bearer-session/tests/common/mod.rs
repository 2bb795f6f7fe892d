use std::time::{SystemTime, UNIX_EPOCH};

pub mod jwt;
pub mod util;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789";
pub const DEFAULT_ISSUER: &str = "https://auth-server.com";
pub const DEFAULT_AUDIENCE: &str = "https://resource-server.com";

pub fn unix_epoch_sec_from_now(sec: i64) -> u64 {
    (SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
        + sec) as u64
}
