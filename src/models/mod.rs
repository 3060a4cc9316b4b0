//! Domain models

pub mod enums;
pub mod equipment;
pub mod intervention;
pub mod notification;
pub mod request;
pub mod resource;
pub mod user;
