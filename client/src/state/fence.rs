//! Request fencing for overlapping async fetches.
//!
//! A page may start a new stats or chat request before the previous one has
//! answered. Each request takes a token from the fence; when the response
//! arrives it is applied only if its token is still the latest.

#[cfg(test)]
#[path = "fence_test.rs"]
mod fence_test;

/// Token identifying one in-flight request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// Monotonic issuer of [`RequestToken`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestFence {
    latest: u64,
}

impl RequestFence {
    /// Issue a token that supersedes every earlier one.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Invalidate all outstanding tokens without starting a request.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
