//! Request lifecycle tracking and dashboard aggregation
//!
//! [`RequestLifecycleTracker`] owns the last-fetched snapshot of requests
//! and interventions and maintains two derived outputs: a filtered view of
//! the requests and the dashboard counters. It performs no I/O; callers
//! push fetched snapshots and confirmed mutations into it and render the
//! derived state however they choose.
//!
//! Every mutating operation recomputes the derived state synchronously
//! before returning. The tracker holds no locks; a concurrent host must
//! serialize access to an instance.

use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{RequestFilter, RequestStatus},
        intervention::Intervention,
        request::Request,
    },
};

/// Dashboard counters, computed over the unfiltered collections.
///
/// Requests with an unrecognized status are excluded from both request
/// counters, so `pending_requests + processed_requests` can fall short of
/// the collection size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub pending_requests: usize,
    pub processed_requests: usize,
    pub interventions_in_progress: usize,
}

/// In-memory state machine behind the department-head dashboard
#[derive(Debug, Default)]
pub struct RequestLifecycleTracker {
    requests: Vec<Request>,
    interventions: Vec<Intervention>,
    filter: RequestFilter,
    filtered: Vec<Request>,
    stats: DashboardStats,
}

impl RequestLifecycleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held request collection wholesale (no merge) and
    /// recompute the filtered view and the counters.
    pub fn set_requests(&mut self, requests: Vec<Request>) {
        self.requests = requests;
        self.recompute();
    }

    /// Replace the held intervention collection wholesale and recompute
    /// the counters.
    pub fn set_interventions(&mut self, interventions: Vec<Intervention>) {
        self.interventions = interventions;
        self.update_stats();
    }

    /// Change the active filter and recompute the filtered view.
    /// Counters are unaffected: they always cover the full collection.
    pub fn set_filter(&mut self, filter: RequestFilter) {
        self.filter = filter;
        self.apply_filter();
    }

    pub fn filter(&self) -> RequestFilter {
        self.filter
    }

    /// Full held collection, in fetch order
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    /// Requests matching the active filter, preserving fetch order
    pub fn filtered_view(&self) -> &[Request] {
        &self.filtered
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats
    }

    pub fn get(&self, request_id: i32) -> Option<&Request> {
        self.requests.iter().find(|r| r.id == request_id)
    }

    /// Record a scheduling confirmed by the backing store: the request
    /// moves to `TRAITEE` in place and both derived outputs are
    /// recomputed.
    ///
    /// Fails with [`AppError::NotFound`] when the id is not held, which
    /// signals the local snapshot is stale and should be re-fetched.
    /// Calling it again on an already-scheduled request is a no-op.
    pub fn mark_scheduled(&mut self, request_id: i32) -> AppResult<()> {
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or_else(|| AppError::NotFound(format!("No request with id {}", request_id)))?;

        if request.status.is_scheduled() {
            return Ok(());
        }

        request.status = RequestStatus::Scheduled;
        self.recompute();
        Ok(())
    }

    fn recompute(&mut self) {
        self.update_stats();
        self.apply_filter();
    }

    fn update_stats(&mut self) {
        let mut pending = 0;
        let mut processed = 0;
        for request in &self.requests {
            match &request.status {
                RequestStatus::Submitted | RequestStatus::Pending => pending += 1,
                RequestStatus::Scheduled => processed += 1,
                RequestStatus::Unrecognized(raw) => {
                    tracing::warn!(
                        request_id = request.id,
                        status = %raw,
                        "request has unrecognized status, excluded from counters"
                    );
                }
            }
        }

        let in_progress = self
            .interventions
            .iter()
            .filter(|i| i.status.is_open())
            .count();

        self.stats = DashboardStats {
            pending_requests: pending,
            processed_requests: processed,
            interventions_in_progress: in_progress,
        };
    }

    fn apply_filter(&mut self) {
        self.filtered = match self.filter {
            RequestFilter::All => self.requests.clone(),
            // Unrecognized statuses land on the unprocessed side
            RequestFilter::Unprocessed => self
                .requests
                .iter()
                .filter(|r| !r.status.is_scheduled())
                .cloned()
                .collect(),
            RequestFilter::Processed => self
                .requests
                .iter()
                .filter(|r| r.status.is_scheduled())
                .cloned()
                .collect(),
        };
    }
}
