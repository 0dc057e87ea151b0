//! Data Transfer Objects for inter-service communication
//!
//! This module contains DTOs exchanged between Corral and the fleet
//! service. DTOs are lightweight representations of domain entities
//! optimized for network transfer.

pub mod pool;
