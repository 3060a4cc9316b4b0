//! User account management service (admin operations)

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    gateway::UsersGateway,
    models::user::{CreateDepartmentHead, CreateTechnician, User},
};

pub struct UsersService {
    gateway: Arc<dyn UsersGateway>,
}

impl UsersService {
    pub fn new(gateway: Arc<dyn UsersGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.gateway.list().await
    }

    pub async fn create_technician(&self, data: &CreateTechnician) -> AppResult<User> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let created = self.gateway.create_technician(data).await?;
        tracing::info!(user_id = created.id, "technician account created");
        Ok(created)
    }

    pub async fn create_department_head(&self, data: &CreateDepartmentHead) -> AppResult<User> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let created = self.gateway.create_department_head(data).await?;
        tracing::info!(user_id = created.id, "department head account created");
        Ok(created)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.gateway.delete(id).await
    }
}
