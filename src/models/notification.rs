//! Notification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Notification sent to a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i32,
    #[serde(rename = "titre")]
    pub title: String,
    pub message: String,
    #[serde(rename = "dateEnvoi")]
    pub sent_at: DateTime<Utc>,
    #[serde(rename = "destinataireId")]
    pub recipient_id: i32,
    /// Free-form category set by the sender
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub read: bool,
}

/// Create notification request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNotification {
    #[validate(length(min = 1, message = "Title is required"))]
    #[serde(rename = "titre")]
    pub title: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    #[serde(rename = "destinataireId")]
    pub recipient_id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}
