//! User account models

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::enums::Role;

/// User account record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    #[serde(rename = "nom")]
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Create technician request (admin operation)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTechnician {
    #[validate(length(min = 1, message = "Name is required"))]
    #[serde(rename = "nom")]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    #[serde(rename = "motDePasse")]
    pub password: String,
    #[serde(rename = "competences", default)]
    pub skills: Vec<String>,
}

/// Create department head request (admin operation)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDepartmentHead {
    #[validate(length(min = 1, message = "Name is required"))]
    #[serde(rename = "nom")]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    #[serde(rename = "motDePasse")]
    pub password: String,
    #[validate(length(min = 1, message = "Department is required"))]
    #[serde(rename = "departement")]
    pub department: String,
}
