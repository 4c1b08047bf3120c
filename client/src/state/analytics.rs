//! Dashboard overview state for the active dataset.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard refetches stats whenever the time-range selection or the
//! active dataset changes. Fetches may overlap; only the response to the most
//! recent request is applied. A failed fetch falls back to demo data so the
//! page never renders empty.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use timerange::StatsQuery;

use super::fence::{RequestFence, RequestToken};
use crate::net::types::DatasetStats;
use crate::util::demo;

#[derive(Clone, Debug, Default)]
pub struct AnalyticsState {
    pub stats: Option<DatasetStats>,
    /// Query the current `stats` answer.
    pub query: StatsQuery,
    pub loading: bool,
    pub is_demo: bool,
    pub error: Option<String>,
    fence: RequestFence,
}

impl AnalyticsState {
    /// Start a fetch for `query`, superseding any outstanding one.
    pub fn begin_request(&mut self, query: StatsQuery) -> RequestToken {
        self.loading = true;
        self.query = query;
        self.fence.begin()
    }

    /// Apply a fetch result. Stale responses are ignored and reported as
    /// `false`.
    pub fn apply_response(&mut self, token: RequestToken, result: Result<DatasetStats, String>) -> bool {
        if !self.fence.is_current(token) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(stats) => {
                self.stats = Some(stats);
                self.is_demo = false;
                self.error = None;
            }
            Err(e) => {
                self.stats = Some(demo::demo_stats(&self.query));
                self.is_demo = true;
                self.error = Some(e);
            }
        }
        true
    }

    /// Drop displayed stats and cancel outstanding fetches (no dataset).
    pub fn reset(&mut self) {
        self.fence.invalidate();
        self.stats = None;
        self.loading = false;
        self.is_demo = false;
        self.error = None;
    }
}
