//! Task list management.
//!
//! Tasks are created with text and the lowest priority, listed highest
//! priority first, edited, re-prioritised one step at a time and removed by
//! identifier. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
