//! Intervention model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::enums::InterventionStatus;

/// Work action created when a request is scheduled (at most one per request)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intervention {
    pub id: i32,
    #[serde(rename = "etat")]
    pub status: InterventionStatus,
    #[serde(rename = "demandeId", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<i32>,
    #[serde(rename = "datePlanifiee", default, skip_serializing_if = "Option::is_none")]
    pub planned_date: Option<NaiveDate>,
}
