//! Core domain types
//!
//! This module contains the core domain structures used across Corral
//! services. These types represent the two sides the pool keeper joins:
//! compute instances leased from the fleet service and runners registered
//! with GitHub Actions.

pub mod instance;
pub mod runner;
pub mod scope;
