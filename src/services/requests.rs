//! Service requests dashboard service
//!
//! Orchestrates the request lifecycle between the backing store and the
//! in-memory [`RequestLifecycleTracker`]: snapshots are fetched through
//! the gateway and pushed into the tracker, and scheduling follows the
//! confirm-then-update pattern, so a failed store call never leaves a
//! half-applied local state.

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    gateway::RequestsGateway,
    lifecycle::{DashboardStats, RequestLifecycleTracker},
    models::{
        enums::RequestFilter,
        intervention::Intervention,
        request::{CreateRequest, Request},
    },
};

pub struct RequestsService {
    gateway: Arc<dyn RequestsGateway>,
    tracker: RequestLifecycleTracker,
}

impl RequestsService {
    pub fn new(gateway: Arc<dyn RequestsGateway>) -> Self {
        Self {
            gateway,
            tracker: RequestLifecycleTracker::new(),
        }
    }

    /// Reload requests and interventions from the backing store
    pub async fn refresh(&mut self) -> AppResult<()> {
        let requests = self.gateway.list_requests().await?;
        let interventions = self.gateway.list_interventions().await?;
        self.tracker.set_requests(requests);
        self.tracker.set_interventions(interventions);
        Ok(())
    }

    /// Submit a new citizen request and reload the held collection
    pub async fn submit(&mut self, data: &CreateRequest) -> AppResult<Request> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let created = self.gateway.create_request(data).await?;
        tracing::info!(request_id = created.id, "request submitted");

        let requests = self.gateway.list_requests().await?;
        self.tracker.set_requests(requests);
        Ok(created)
    }

    /// Schedule an intervention for a held request.
    ///
    /// An already-scheduled request is rejected with a conflict before
    /// the store is contacted. The local view is only updated once the
    /// store has confirmed the transition; on a gateway failure the
    /// tracker is untouched.
    pub async fn schedule(&mut self, request_id: i32) -> AppResult<Intervention> {
        let request = self
            .tracker
            .get(request_id)
            .ok_or_else(|| AppError::NotFound(format!("No request with id {}", request_id)))?;

        if request.status.is_scheduled() {
            return Err(AppError::Conflict(format!(
                "Request {} is already scheduled",
                request_id
            )));
        }

        let intervention = self.gateway.schedule_intervention(request_id).await?;
        tracing::info!(
            request_id,
            intervention_id = intervention.id,
            "intervention scheduled"
        );

        self.tracker.mark_scheduled(request_id)?;
        let interventions = self.gateway.list_interventions().await?;
        self.tracker.set_interventions(interventions);
        Ok(intervention)
    }

    pub fn set_filter(&mut self, filter: RequestFilter) {
        self.tracker.set_filter(filter);
    }

    pub fn filtered_view(&self) -> &[Request] {
        self.tracker.filtered_view()
    }

    pub fn stats(&self) -> DashboardStats {
        self.tracker.stats()
    }

    pub fn tracker(&self) -> &RequestLifecycleTracker {
        &self.tracker
    }
}
