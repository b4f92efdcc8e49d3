//! Adapter implementations for board ports.

pub mod links;
pub mod memory;

pub use links::PatternLinkExtractor;
