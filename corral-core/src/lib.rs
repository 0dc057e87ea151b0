//! Corral Core
//!
//! Core types and abstractions for the Corral runner pool system.
//!
//! This crate contains:
//! - Domain types: Core business entities (Instance, RegisteredRunner, Scope)
//! - DTOs: Data transfer objects exchanged with the fleet service
//! - Pool classification: Pure snapshot-folding logic shared by the
//!   reconciler and the CLI

pub mod domain;
pub mod dto;
pub mod pool;
