//! Link extraction port.

use crate::board::domain::{Link, LinkType};

/// Parses free text for typed cross-references.
pub trait LinkExtractor: Send + Sync {
    /// Returns all references of `link_type` found in `text`, in text order.
    fn find_links(&self, text: &str, link_type: LinkType) -> Vec<Link>;
}
