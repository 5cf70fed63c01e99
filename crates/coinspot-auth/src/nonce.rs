//! Request nonces

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Last nonce handed out by [`Nonce::now`] in this process
static LAST_GENERATED: AtomicU64 = AtomicU64::new(0);

/// A request nonce
///
/// CoinSpot rejects a request whose nonce is not larger than every nonce
/// previously used with the same key. The conventional source is the current
/// time in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nonce(u64);

impl Nonce {
    /// Wrap a caller-chosen nonce as-is
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Current time in microseconds since the Unix epoch
    ///
    /// Two calls in the same microsecond (or a clock step backwards) still
    /// yield strictly increasing values within this process.
    pub fn now() -> Self {
        let micros = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as u64)
            .unwrap_or(0);

        let mut last = LAST_GENERATED.load(Ordering::Relaxed);
        loop {
            let next = micros.max(last.saturating_add(1));
            match LAST_GENERATED.compare_exchange_weak(
                last,
                next,
                Ordering::SeqCst,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Self(next),
                Err(actual) => last = actual,
            }
        }
    }

    /// Get the raw value
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Nonce {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
