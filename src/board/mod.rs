//! Board-to-tracker synchronization.
//!
//! Moving an issue into a column aligns the tracker's open/closed state,
//! board-managed labels and assignees with the column, then cascades the
//! move to issues the moved item closes. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Board layout loading in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
