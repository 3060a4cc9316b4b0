//! SGIIVILLE Municipal Service Request Management
//!
//! Core domain logic for the SGIIVILLE application: citizens submit
//! service requests, department heads triage them and schedule
//! interventions, administrators manage staff accounts.
//!
//! This crate holds the in-memory request-lifecycle tracking and the
//! per-entity services. Transport, authentication and presentation live
//! outside; services reach the backing store through the [`gateway`]
//! traits.

pub mod error;
pub mod gateway;
pub mod lifecycle;
pub mod models;
pub mod services;

pub use error::{AppError, AppResult};
pub use lifecycle::{DashboardStats, RequestLifecycleTracker};
