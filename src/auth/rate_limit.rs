// src/auth/rate_limit.rs
// DOCUMENTATION: Per-client throttling for register and login
// PURPOSE: Slow down credential stuffing against the auth endpoints

use crate::errors::RentalError;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU64, Ordering};

/// Idle buckets are dropped every this many checks
const PRUNE_EVERY: u64 = 256;

/// Keyed GCRA limiter, one bucket per client address
pub struct AuthRateLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
    checks: AtomicU64,
}

impl AuthRateLimiter {
    pub fn per_minute(attempts: u32) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(attempts).unwrap_or(NonZeroU32::MIN));
        Self::with_quota(quota)
    }

    fn with_quota(quota: Quota) -> Self {
        Self {
            limiter: RateLimiter::keyed(quota),
            checks: AtomicU64::new(0),
        }
    }

    /// Consume one attempt for `client`, failing with 429 once the quota is spent
    pub fn check(&self, client: &str) -> Result<(), RentalError> {
        if self.checks.fetch_add(1, Ordering::Relaxed) % PRUNE_EVERY == PRUNE_EVERY - 1 {
            self.prune();
        }

        self.limiter.check_key(&client.to_string()).map_err(|_| {
            log::warn!("Auth rate limit exceeded for {}", client);
            RentalError::RateLimitExceeded
        })
    }

    /// Forget clients whose bucket has fully refilled
    fn prune(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
        log::debug!("Auth limiter tracking {} clients", self.limiter.len());
    }
}
