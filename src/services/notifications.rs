//! Notifications service

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    gateway::NotificationsGateway,
    models::notification::{CreateNotification, Notification},
};

pub struct NotificationsService {
    gateway: Arc<dyn NotificationsGateway>,
}

impl NotificationsService {
    pub fn new(gateway: Arc<dyn NotificationsGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> AppResult<Vec<Notification>> {
        self.gateway.list().await
    }

    /// List notifications addressed to one user
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Notification>> {
        self.gateway.list_for_user(user_id).await
    }

    pub async fn send(&self, data: &CreateNotification) -> AppResult<Notification> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.gateway.create(data).await
    }

    pub async fn mark_read(&self, id: i32) -> AppResult<()> {
        self.gateway.mark_read(id).await
    }
}
