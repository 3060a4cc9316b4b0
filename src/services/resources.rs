//! Material resources service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    gateway::ResourcesGateway,
    models::resource::{CreateResource, MaterialResource, UpdateResource},
};

pub struct ResourcesService {
    gateway: Arc<dyn ResourcesGateway>,
}

impl ResourcesService {
    pub fn new(gateway: Arc<dyn ResourcesGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> AppResult<Vec<MaterialResource>> {
        self.gateway.list().await
    }

    pub async fn create(&self, data: &CreateResource) -> AppResult<MaterialResource> {
        if data.designation.trim().is_empty() {
            return Err(AppError::Validation(
                "Designation cannot be empty".to_string(),
            ));
        }
        if data.quantity_in_stock < 0 {
            return Err(AppError::Validation(
                "Stock quantity cannot be negative".to_string(),
            ));
        }
        self.gateway.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateResource) -> AppResult<MaterialResource> {
        if let Some(ref designation) = data.designation {
            if designation.trim().is_empty() {
                return Err(AppError::Validation(
                    "Designation cannot be empty".to_string(),
                ));
            }
        }
        if let Some(quantity) = data.quantity_in_stock {
            if quantity < 0 {
                return Err(AppError::Validation(
                    "Stock quantity cannot be negative".to_string(),
                ));
            }
        }
        self.gateway.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.gateway.delete(id).await
    }
}
