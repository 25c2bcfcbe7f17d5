//! Tasklist: an in-memory task list with bounded priorities.
//!
//! Tasks are created with text and the lowest priority, listed highest
//! priority first, edited, re-prioritised and removed by identifier.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task and priority types with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for storage, identifier
//!   generation and rendering
//! - **Adapters**: Concrete implementations of ports (in-memory storage,
//!   renderers)
//!
//! # Modules
//!
//! - [`task`]: Task domain, ports, adapters and services
//! - [`config`]: Startup configuration
//! - [`container`]: Wiring of shared components
//! - [`demo`]: Reference demo script

pub mod config;
pub mod container;
pub mod demo;
pub mod task;
