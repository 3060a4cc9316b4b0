//! Gateway traits to the backing store
//!
//! The core never performs network I/O; everything it knows comes from a
//! backing store reached through these traits. Concrete implementations
//! (the REST client of the deployed application, in-memory fixtures in
//! tests) live outside this crate and map their transport failures to
//! [`AppError::Gateway`](crate::error::AppError::Gateway).

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{
        equipment::{CreateEquipment, Equipment, UpdateEquipment},
        intervention::Intervention,
        notification::{CreateNotification, Notification},
        request::{CreateRequest, Request},
        resource::{CreateResource, MaterialResource, UpdateResource},
        user::{CreateDepartmentHead, CreateTechnician, User},
    },
};

/// Service requests and their interventions
#[async_trait]
pub trait RequestsGateway: Send + Sync {
    async fn list_requests(&self) -> AppResult<Vec<Request>>;

    async fn create_request(&self, data: &CreateRequest) -> AppResult<Request>;

    /// Authoritative scheduling transition. On success the store has
    /// moved the request to `TRAITEE` and created the returned
    /// intervention.
    async fn schedule_intervention(&self, request_id: i32) -> AppResult<Intervention>;

    async fn list_interventions(&self) -> AppResult<Vec<Intervention>>;
}

/// Equipment catalog
#[async_trait]
pub trait EquipmentGateway: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Equipment>>;
    async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment>;
    async fn update(&self, id: i32, data: &UpdateEquipment) -> AppResult<Equipment>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Material stock catalog
#[async_trait]
pub trait ResourcesGateway: Send + Sync {
    async fn list(&self) -> AppResult<Vec<MaterialResource>>;
    async fn create(&self, data: &CreateResource) -> AppResult<MaterialResource>;
    async fn update(&self, id: i32, data: &UpdateResource) -> AppResult<MaterialResource>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// User notifications
#[async_trait]
pub trait NotificationsGateway: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Notification>>;
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Notification>>;
    async fn create(&self, data: &CreateNotification) -> AppResult<Notification>;
    async fn mark_read(&self, id: i32) -> AppResult<()>;
}

/// Staff and citizen accounts (admin operations)
#[async_trait]
pub trait UsersGateway: Send + Sync {
    async fn list(&self) -> AppResult<Vec<User>>;
    async fn create_technician(&self, data: &CreateTechnician) -> AppResult<User>;
    async fn create_department_head(&self, data: &CreateDepartmentHead) -> AppResult<User>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Aggregate of all gateways, handed to [`Services`](crate::services::Services)
#[derive(Clone)]
pub struct Gateways {
    pub requests: Arc<dyn RequestsGateway>,
    pub equipment: Arc<dyn EquipmentGateway>,
    pub resources: Arc<dyn ResourcesGateway>,
    pub notifications: Arc<dyn NotificationsGateway>,
    pub users: Arc<dyn UsersGateway>,
}
