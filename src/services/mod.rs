//! Business logic services

pub mod equipment;
pub mod notifications;
pub mod requests;
pub mod resources;
pub mod users;

use crate::gateway::Gateways;

/// Container for all services
pub struct Services {
    pub requests: requests::RequestsService,
    pub equipment: equipment::EquipmentService,
    pub resources: resources::ResourcesService,
    pub notifications: notifications::NotificationsService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services with the given gateways
    pub fn new(gateways: Gateways) -> Self {
        Self {
            requests: requests::RequestsService::new(gateways.requests),
            equipment: equipment::EquipmentService::new(gateways.equipment),
            resources: resources::ResourcesService::new(gateways.resources),
            notifications: notifications::NotificationsService::new(gateways.notifications),
            users: users::UsersService::new(gateways.users),
        }
    }
}
