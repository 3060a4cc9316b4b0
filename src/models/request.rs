//! Citizen service request model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::enums::RequestStatus;

/// Geographic location of a reported issue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Service request record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub id: i32,
    pub description: String,
    #[serde(rename = "localisation")]
    pub location: Location,
    #[serde(rename = "etat")]
    pub status: RequestStatus,
    #[serde(rename = "dateSoumission", default, skip_serializing_if = "Option::is_none")]
    pub submission_date: Option<NaiveDate>,
    /// Ids of photos attached at submission time
    #[serde(rename = "photoRefs", default, skip_serializing_if = "Vec::is_empty")]
    pub photo_refs: Vec<i32>,
}

/// Create request payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRequest {
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(rename = "localisation")]
    pub location: Location,
}
