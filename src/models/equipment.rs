//! Equipment model

use serde::{Deserialize, Serialize};

use crate::models::{enums::EquipmentStatus, request::Location};

/// Equipment supplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i32,
    #[serde(rename = "nom")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telephone")]
    pub phone: String,
    #[serde(rename = "adresse")]
    pub address: String,
}

impl Supplier {
    /// Fallback supplier used when none is given on creation
    pub fn standard() -> Self {
        Self {
            id: 1,
            name: "Fournisseur Standard".to_string(),
            email: "contact@fournisseur.tn".to_string(),
            phone: "+216 70 000 000".to_string(),
            address: String::new(),
        }
    }
}

/// Equipment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i32,
    #[serde(rename = "type")]
    pub equipment_type: String,
    #[serde(rename = "etat")]
    pub status: EquipmentStatus,
    #[serde(rename = "valeurAchat")]
    pub purchase_value: f64,
    #[serde(rename = "localisation")]
    pub location: Location,
    #[serde(rename = "fournisseur", default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<Supplier>,
}

/// Create equipment request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEquipment {
    #[serde(rename = "type")]
    pub equipment_type: String,
    #[serde(rename = "etat", default)]
    pub status: EquipmentStatus,
    #[serde(rename = "valeurAchat")]
    pub purchase_value: f64,
    #[serde(rename = "localisation")]
    pub location: Location,
    #[serde(rename = "fournisseur", default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<Supplier>,
}

/// Update equipment request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEquipment {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<String>,
    #[serde(rename = "etat", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EquipmentStatus>,
    #[serde(rename = "valeurAchat", default, skip_serializing_if = "Option::is_none")]
    pub purchase_value: Option<f64>,
    #[serde(rename = "localisation", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(rename = "fournisseur", default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<Supplier>,
}
