//! Equipment service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    gateway::EquipmentGateway,
    models::equipment::{CreateEquipment, Equipment, Supplier, UpdateEquipment},
};

pub struct EquipmentService {
    gateway: Arc<dyn EquipmentGateway>,
}

impl EquipmentService {
    pub fn new(gateway: Arc<dyn EquipmentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.gateway.list().await
    }

    /// Create an equipment record. The standard supplier is filled in
    /// when the caller gives none.
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        if data.equipment_type.trim().is_empty() {
            return Err(AppError::Validation(
                "Equipment type cannot be empty".to_string(),
            ));
        }

        let mut data = data.clone();
        if data.supplier.is_none() {
            data.supplier = Some(Supplier::standard());
        }
        self.gateway.create(&data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateEquipment) -> AppResult<Equipment> {
        if let Some(ref equipment_type) = data.equipment_type {
            if equipment_type.trim().is_empty() {
                return Err(AppError::Validation(
                    "Equipment type cannot be empty".to_string(),
                ));
            }
        }
        self.gateway.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.gateway.delete(id).await
    }
}
