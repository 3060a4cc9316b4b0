//! Service orchestration tests with mocked gateways

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::eq;

use sgiiville_core::{
    error::{AppError, AppResult},
    models::{
        enums::{InterventionStatus, RequestStatus, Role},
        equipment::{CreateEquipment, Equipment, UpdateEquipment},
        intervention::Intervention,
        notification::{CreateNotification, Notification},
        request::{CreateRequest, Location, Request},
        resource::{CreateResource, MaterialResource, UpdateResource},
        user::{CreateDepartmentHead, CreateTechnician, User},
    },
    services::{
        equipment::EquipmentService, notifications::NotificationsService,
        requests::RequestsService, resources::ResourcesService, users::UsersService,
    },
};

mock! {
    pub RequestsGw {}

    #[async_trait]
    impl sgiiville_core::gateway::RequestsGateway for RequestsGw {
        async fn list_requests(&self) -> AppResult<Vec<Request>>;
        async fn create_request(&self, data: &CreateRequest) -> AppResult<Request>;
        async fn schedule_intervention(&self, request_id: i32) -> AppResult<Intervention>;
        async fn list_interventions(&self) -> AppResult<Vec<Intervention>>;
    }
}

mock! {
    pub EquipmentGw {}

    #[async_trait]
    impl sgiiville_core::gateway::EquipmentGateway for EquipmentGw {
        async fn list(&self) -> AppResult<Vec<Equipment>>;
        async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment>;
        async fn update(&self, id: i32, data: &UpdateEquipment) -> AppResult<Equipment>;
        async fn delete(&self, id: i32) -> AppResult<()>;
    }
}

mock! {
    pub ResourcesGw {}

    #[async_trait]
    impl sgiiville_core::gateway::ResourcesGateway for ResourcesGw {
        async fn list(&self) -> AppResult<Vec<MaterialResource>>;
        async fn create(&self, data: &CreateResource) -> AppResult<MaterialResource>;
        async fn update(&self, id: i32, data: &UpdateResource) -> AppResult<MaterialResource>;
        async fn delete(&self, id: i32) -> AppResult<()>;
    }
}

mock! {
    pub NotificationsGw {}

    #[async_trait]
    impl sgiiville_core::gateway::NotificationsGateway for NotificationsGw {
        async fn list(&self) -> AppResult<Vec<Notification>>;
        async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Notification>>;
        async fn create(&self, data: &CreateNotification) -> AppResult<Notification>;
        async fn mark_read(&self, id: i32) -> AppResult<()>;
    }
}

mock! {
    pub UsersGw {}

    #[async_trait]
    impl sgiiville_core::gateway::UsersGateway for UsersGw {
        async fn list(&self) -> AppResult<Vec<User>>;
        async fn create_technician(&self, data: &CreateTechnician) -> AppResult<User>;
        async fn create_department_head(&self, data: &CreateDepartmentHead) -> AppResult<User>;
        async fn delete(&self, id: i32) -> AppResult<()>;
    }
}

fn request(id: i32, status: RequestStatus) -> Request {
    Request {
        id,
        description: format!("Lampadaire cassé {}", id),
        location: Location {
            latitude: 36.8065,
            longitude: 10.1815,
        },
        status,
        submission_date: None,
        photo_refs: vec![],
    }
}

fn intervention(id: i32, request_id: i32) -> Intervention {
    Intervention {
        id,
        status: InterventionStatus::Pending,
        request_id: Some(request_id),
        planned_date: None,
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn schedule_confirms_with_store_then_updates_local_view() {
    let mut gateway = MockRequestsGw::new();
    gateway
        .expect_list_requests()
        .times(1)
        .returning(|| Ok(vec![request(1, RequestStatus::Submitted)]));
    gateway
        .expect_list_interventions()
        .times(2)
        .returning(|| Ok(vec![]));
    gateway
        .expect_schedule_intervention()
        .with(eq(1))
        .times(1)
        .returning(|id| Ok(intervention(10, id)));

    let mut service = RequestsService::new(Arc::new(gateway));
    service.refresh().await.expect("refresh");

    let created = service.schedule(1).await.expect("schedule");
    assert_eq!(created.id, 10);

    let stats = service.stats();
    assert_eq!(stats.pending_requests, 0);
    assert_eq!(stats.processed_requests, 1);
}

#[tokio::test]
async fn schedule_rejects_already_scheduled_before_store_call() {
    let mut gateway = MockRequestsGw::new();
    gateway
        .expect_list_requests()
        .returning(|| Ok(vec![request(1, RequestStatus::Scheduled)]));
    gateway.expect_list_interventions().returning(|| Ok(vec![]));
    gateway.expect_schedule_intervention().never();

    let mut service = RequestsService::new(Arc::new(gateway));
    service.refresh().await.expect("refresh");

    let err = service.schedule(1).await.expect_err("already scheduled");
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn schedule_unknown_request_is_not_found() {
    let mut gateway = MockRequestsGw::new();
    gateway
        .expect_list_requests()
        .returning(|| Ok(vec![request(1, RequestStatus::Submitted)]));
    gateway.expect_list_interventions().returning(|| Ok(vec![]));
    gateway.expect_schedule_intervention().never();

    let mut service = RequestsService::new(Arc::new(gateway));
    service.refresh().await.expect("refresh");

    let err = service.schedule(99).await.expect_err("absent id");
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn schedule_store_failure_leaves_tracker_untouched() {
    let mut gateway = MockRequestsGw::new();
    gateway
        .expect_list_requests()
        .returning(|| Ok(vec![request(1, RequestStatus::Submitted)]));
    gateway
        .expect_list_interventions()
        .times(1)
        .returning(|| Ok(vec![]));
    gateway
        .expect_schedule_intervention()
        .with(eq(1))
        .returning(|_| Err(AppError::Gateway("HTTP 500".to_string())));

    let mut service = RequestsService::new(Arc::new(gateway));
    service.refresh().await.expect("refresh");
    let before = service.stats();

    let err = service.schedule(1).await.expect_err("store failed");
    assert!(matches!(err, AppError::Gateway(_)));
    assert_eq!(service.stats(), before);
    assert_eq!(
        service.tracker().get(1).map(|r| r.status.clone()),
        Some(RequestStatus::Submitted)
    );
}

#[tokio::test]
async fn submit_requires_a_description() {
    let mut gateway = MockRequestsGw::new();
    gateway.expect_create_request().never();

    let mut service = RequestsService::new(Arc::new(gateway));
    let data = CreateRequest {
        description: String::new(),
        location: Location {
            latitude: 0.0,
            longitude: 0.0,
        },
    };

    let err = service.submit(&data).await.expect_err("empty description");
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn submit_creates_and_reloads() {
    let mut gateway = MockRequestsGw::new();
    gateway
        .expect_create_request()
        .withf(|d: &CreateRequest| d.description == "Fuite d'eau avenue Bourguiba")
        .times(1)
        .returning(|_| Ok(request(5, RequestStatus::Submitted)));
    gateway
        .expect_list_requests()
        .times(1)
        .returning(|| Ok(vec![request(5, RequestStatus::Submitted)]));

    let mut service = RequestsService::new(Arc::new(gateway));
    let data = CreateRequest {
        description: "Fuite d'eau avenue Bourguiba".to_string(),
        location: Location {
            latitude: 36.8,
            longitude: 10.18,
        },
    };

    let created = service.submit(&data).await.expect("submit");
    assert_eq!(created.id, 5);
    assert_eq!(service.tracker().requests().len(), 1);
    assert_eq!(service.stats().pending_requests, 1);
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

fn create_equipment(equipment_type: &str) -> CreateEquipment {
    CreateEquipment {
        equipment_type: equipment_type.to_string(),
        status: Default::default(),
        purchase_value: 1200.0,
        location: Location {
            latitude: 36.8065,
            longitude: 10.1815,
        },
        supplier: None,
    }
}

#[tokio::test]
async fn equipment_create_fills_standard_supplier() {
    let mut gateway = MockEquipmentGw::new();
    gateway
        .expect_create()
        .withf(|d: &CreateEquipment| {
            d.supplier
                .as_ref()
                .map(|s| s.name == "Fournisseur Standard")
                .unwrap_or(false)
        })
        .times(1)
        .returning(|d| {
            Ok(Equipment {
                id: 1,
                equipment_type: d.equipment_type.clone(),
                status: d.status,
                purchase_value: d.purchase_value,
                location: d.location,
                supplier: d.supplier.clone(),
            })
        });

    let service = EquipmentService::new(Arc::new(gateway));
    let created = service
        .create(&create_equipment("Tractopelle"))
        .await
        .expect("create");
    assert_eq!(created.id, 1);
}

#[tokio::test]
async fn equipment_create_requires_a_type() {
    let mut gateway = MockEquipmentGw::new();
    gateway.expect_create().never();

    let service = EquipmentService::new(Arc::new(gateway));
    let err = service
        .create(&create_equipment("  "))
        .await
        .expect_err("blank type");
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn equipment_update_rejects_blank_type() {
    let mut gateway = MockEquipmentGw::new();
    gateway.expect_update().never();

    let service = EquipmentService::new(Arc::new(gateway));
    let data = UpdateEquipment {
        equipment_type: Some(String::new()),
        ..Default::default()
    };
    let err = service.update(3, &data).await.expect_err("blank type");
    assert!(matches!(err, AppError::Validation(_)));
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

#[tokio::test]
async fn resource_create_rejects_negative_stock() {
    let mut gateway = MockResourcesGw::new();
    gateway.expect_create().never();

    let service = ResourcesService::new(Arc::new(gateway));
    let data = CreateResource {
        designation: "Ciment".to_string(),
        quantity_in_stock: -3,
        purchase_value: 40.0,
    };
    let err = service.create(&data).await.expect_err("negative stock");
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn resource_delete_passes_through() {
    let mut gateway = MockResourcesGw::new();
    gateway
        .expect_delete()
        .with(eq(7))
        .times(1)
        .returning(|_| Ok(()));

    let service = ResourcesService::new(Arc::new(gateway));
    service.delete(7).await.expect("delete");
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[tokio::test]
async fn notification_send_requires_title_and_message() {
    let mut gateway = MockNotificationsGw::new();
    gateway.expect_create().never();

    let service = NotificationsService::new(Arc::new(gateway));
    let data = CreateNotification {
        title: "Intervention planifiée".to_string(),
        message: String::new(),
        recipient_id: 4,
        kind: "INFO".to_string(),
    };
    let err = service.send(&data).await.expect_err("empty message");
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn notification_mark_read_passes_through() {
    let mut gateway = MockNotificationsGw::new();
    gateway
        .expect_mark_read()
        .with(eq(12))
        .times(1)
        .returning(|_| Ok(()));

    let service = NotificationsService::new(Arc::new(gateway));
    service.mark_read(12).await.expect("mark read");
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn technician_creation_validates_fields() {
    let mut gateway = MockUsersGw::new();
    gateway.expect_create_technician().never();

    let service = UsersService::new(Arc::new(gateway));
    let data = CreateTechnician {
        name: "Ali".to_string(),
        email: "not-an-email".to_string(),
        password: "secret".to_string(),
        skills: vec!["plomberie".to_string()],
    };
    let err = service
        .create_technician(&data)
        .await
        .expect_err("bad email");
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn department_head_creation_passes_valid_payload() {
    let mut gateway = MockUsersGw::new();
    gateway
        .expect_create_department_head()
        .withf(|d: &CreateDepartmentHead| d.department == "Voirie")
        .times(1)
        .returning(|d| {
            Ok(User {
                id: 2,
                name: d.name.clone(),
                email: d.email.clone(),
                role: Role::DepartmentHead,
            })
        });

    let service = UsersService::new(Arc::new(gateway));
    let data = CreateDepartmentHead {
        name: "Mouna".to_string(),
        email: "mouna@ville.tn".to_string(),
        password: "motdepasse".to_string(),
        department: "Voirie".to_string(),
    };
    let created = service
        .create_department_head(&data)
        .await
        .expect("create");
    assert_eq!(created.role, Role::DepartmentHead);
}
