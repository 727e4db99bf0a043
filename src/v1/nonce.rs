use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha1::{Digest, Sha1};
use uuid::Builder;

/// Single-use token for one request: 32 lowercase hex characters in v4 UUID
/// layout.
///
/// Bytes come from the OS random source. If that fails, they are derived
/// from the clock and a process-wide counter instead; generation never fails.
pub fn nonce() -> String {
    let mut bytes = [0u8; 16];
    if let Err(err) = OsRng.try_fill_bytes(&mut bytes) {
        tracing::warn!(%err, "OS random source failed, deriving nonce from the clock");
        bytes = clock_bytes();
    }
    nonce_from_bytes(bytes)
}

/// Seconds since the Unix epoch.
pub fn timestamp() -> i64 {
    Utc::now().timestamp()
}

fn nonce_from_bytes(bytes: [u8; 16]) -> String {
    Builder::from_random_bytes(bytes)
        .into_uuid()
        .simple()
        .to_string()
}

fn clock_bytes() -> [u8; 16] {
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let now = Utc::now();
    let nanos = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros());
    let count = COUNTER.fetch_add(1, Ordering::Relaxed);
    let digest = Sha1::new()
        .chain_update(nanos.to_be_bytes())
        .chain_update(count.to_be_bytes())
        .finalize();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    bytes
}
