//! Material stock resource model

use serde::{Deserialize, Serialize};

/// Material resource record (stock catalog)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialResource {
    pub id: i32,
    pub designation: String,
    #[serde(rename = "quantiteEnStock")]
    pub quantity_in_stock: i32,
    #[serde(rename = "valeurAchat")]
    pub purchase_value: f64,
}

/// Create material resource request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResource {
    pub designation: String,
    #[serde(rename = "quantiteEnStock")]
    pub quantity_in_stock: i32,
    #[serde(rename = "valeurAchat")]
    pub purchase_value: f64,
}

/// Update material resource request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(rename = "quantiteEnStock", default, skip_serializing_if = "Option::is_none")]
    pub quantity_in_stock: Option<i32>,
    #[serde(rename = "valeurAchat", default, skip_serializing_if = "Option::is_none")]
    pub purchase_value: Option<f64>,
}
