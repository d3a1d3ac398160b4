//! Application Layer - SyncGate
//!
//! This crate contains the application layer of SyncGate: the sync
//! coordinator and the use cases built on top of it.
//!
//! ## Architecture
//!
//! The application layer:
//! - Implements the coordinator that serializes sync attempts
//! - Owns the per-coordinator observer registry
//! - Decides which sync outcomes are reported as errors
//! - Depends only on the domain ports, never on concrete stores
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `syncgate-domain`: For outcome types, errors and port traits
//! - `tokio` and `tracing`

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
