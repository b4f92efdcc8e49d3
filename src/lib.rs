//! Boardsync: kanban board to issue tracker synchronization.
//!
//! Moving an issue into a board column brings the tracker's open/closed
//! state, board-managed labels and assignees in line with the column, and
//! cascades the move to issues the moved item closes.
//!
//! # Architecture
//!
//! Boardsync follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory tracker,
//!   configured column registry, pattern-based link extraction)
//!
//! # Modules
//!
//! - [`board`]: Column moves, diff computation and reference propagation

pub mod board;
