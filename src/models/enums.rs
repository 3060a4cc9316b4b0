//! Shared domain enums (wire labels matching the original backend)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

// ---------------------------------------------------------------------------
// RequestStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a citizen service request.
///
/// The backend uses French wire labels. A request is created as
/// `SOUMISE` and moves once to `TRAITEE` when a department head schedules
/// an intervention; no back-transition exists. Labels the backend may add
/// later are carried verbatim in [`RequestStatus::Unrecognized`] rather
/// than rejected at deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestStatus {
    Submitted,
    Pending,
    Scheduled,
    Unrecognized(String),
}

impl RequestStatus {
    /// Scheduled requests are the "processed" side of the dashboard split.
    pub fn is_scheduled(&self) -> bool {
        matches!(self, RequestStatus::Scheduled)
    }

    /// Submitted and pending requests count as awaiting treatment.
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Submitted | RequestStatus::Pending)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, RequestStatus::Unrecognized(_))
    }
}

impl From<String> for RequestStatus {
    fn from(v: String) -> Self {
        match v.as_str() {
            "SOUMISE" => RequestStatus::Submitted,
            "EN_ATTENTE" => RequestStatus::Pending,
            "TRAITEE" => RequestStatus::Scheduled,
            _ => RequestStatus::Unrecognized(v),
        }
    }
}

impl From<RequestStatus> for String {
    fn from(s: RequestStatus) -> Self {
        match s {
            RequestStatus::Submitted => "SOUMISE".to_string(),
            RequestStatus::Pending => "EN_ATTENTE".to_string(),
            RequestStatus::Scheduled => "TRAITEE".to_string(),
            RequestStatus::Unrecognized(raw) => raw,
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RequestStatus::Submitted => "SOUMISE",
            RequestStatus::Pending => "EN_ATTENTE",
            RequestStatus::Scheduled => "TRAITEE",
            RequestStatus::Unrecognized(raw) => raw,
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// InterventionStatus
// ---------------------------------------------------------------------------

/// Status of a scheduled intervention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InterventionStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Unrecognized(String),
}

impl InterventionStatus {
    /// Pending and in-progress interventions feed the dashboard counter.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            InterventionStatus::Pending | InterventionStatus::InProgress
        )
    }
}

impl From<String> for InterventionStatus {
    fn from(v: String) -> Self {
        match v.as_str() {
            "EN_ATTENTE" => InterventionStatus::Pending,
            "EN_COURS" => InterventionStatus::InProgress,
            "TERMINEE" => InterventionStatus::Completed,
            "ANNULEE" => InterventionStatus::Cancelled,
            _ => InterventionStatus::Unrecognized(v),
        }
    }
}

impl From<InterventionStatus> for String {
    fn from(s: InterventionStatus) -> Self {
        match s {
            InterventionStatus::Pending => "EN_ATTENTE".to_string(),
            InterventionStatus::InProgress => "EN_COURS".to_string(),
            InterventionStatus::Completed => "TERMINEE".to_string(),
            InterventionStatus::Cancelled => "ANNULEE".to_string(),
            InterventionStatus::Unrecognized(raw) => raw,
        }
    }
}

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Equipment status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentStatus {
    #[serde(rename = "FONCTIONNEL")]
    Functional,
    #[serde(rename = "DEFECTUEUX")]
    Defective,
    #[serde(rename = "EN_MAINTENANCE")]
    UnderMaintenance,
}

impl Default for EquipmentStatus {
    fn default() -> Self {
        EquipmentStatus::Functional
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentStatus::Functional => "FONCTIONNEL",
            EquipmentStatus::Defective => "DEFECTUEUX",
            EquipmentStatus::UnderMaintenance => "EN_MAINTENANCE",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// RequestFilter
// ---------------------------------------------------------------------------

/// Dashboard filter over the held request collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RequestFilter {
    #[default]
    #[serde(rename = "TOUS")]
    All,
    #[serde(rename = "NON_TRAITEES")]
    Unprocessed,
    #[serde(rename = "TRAITEES")]
    Processed,
}

impl FromStr for RequestFilter {
    type Err = AppError;

    /// Unknown filter modes are rejected, never silently defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TOUS" => Ok(RequestFilter::All),
            "NON_TRAITEES" => Ok(RequestFilter::Unprocessed),
            "TRAITEES" => Ok(RequestFilter::Processed),
            _ => Err(AppError::Validation(format!(
                "Unknown request filter: {}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for RequestFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RequestFilter::All => "TOUS",
            RequestFilter::Unprocessed => "NON_TRAITEES",
            RequestFilter::Processed => "TRAITEES",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User account roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "CITOYEN")]
    Citizen,
    #[serde(rename = "TECHNICIEN")]
    Technician,
    #[serde(rename = "CHEF_SERVICE")]
    DepartmentHead,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Citizen => "CITOYEN",
            Role::Technician => "TECHNICIEN",
            Role::DepartmentHead => "CHEF_SERVICE",
            Role::Admin => "ADMIN",
        };
        write!(f, "{}", label)
    }
}
