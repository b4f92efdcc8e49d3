//! Pattern-based link extraction.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::board::{
    domain::{IssueNumber, Link, LinkType},
    ports::LinkExtractor,
};

static LINK_PATTERN: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        \b(?P<keyword>
            close[sd]? | fix(?:e[sd])? | resolve[sd]?
          | depends\s+on | requires | needs
          | relate[sd]?\s+to
        )
        \s*:?\s+
        (?:
            https?://github\.com/(?P<url_owner>[\w.-]+)/(?P<url_repo>[\w.-]+)/(?:issues|pull)/
          | (?:(?P<owner>[\w.-]+)/(?P<repo>[\w.-]+))?\#
        )
        (?P<number>\d+)\b",
    )
});

/// Link extractor recognising GitHub-style keyword references.
///
/// Accepted targets are `#12`, `owner/repo#12` and issue or pull request
/// URLs, each preceded by a keyword such as `closes`, `depends on` or
/// `related to`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternLinkExtractor;

impl PatternLinkExtractor {
    /// Creates the extractor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns every recognised link regardless of type, in text order.
    #[must_use]
    pub fn find_all(&self, text: &str) -> Vec<Link> {
        let Ok(pattern) = LINK_PATTERN.as_ref() else {
            return Vec::new();
        };
        pattern.captures_iter(text).filter_map(|caps| to_link(&caps)).collect()
    }
}

impl LinkExtractor for PatternLinkExtractor {
    fn find_links(&self, text: &str, link_type: LinkType) -> Vec<Link> {
        self.find_all(text)
            .into_iter()
            .filter(|link| link.link_type() == link_type)
            .collect()
    }
}

fn keyword_type(keyword: &str) -> LinkType {
    let lowered = keyword.to_ascii_lowercase();
    if lowered.starts_with("depends") || lowered == "requires" || lowered == "needs" {
        LinkType::DependsOn
    } else if lowered.starts_with("relate") {
        LinkType::RelatesTo
    } else {
        LinkType::Closes
    }
}

fn to_link(caps: &Captures<'_>) -> Option<Link> {
    let link_type = keyword_type(caps.name("keyword")?.as_str());
    let number = caps
        .name("number")?
        .as_str()
        .parse::<u64>()
        .ok()
        .and_then(|value| IssueNumber::new(value).ok())?;

    let owner = caps.name("url_owner").or_else(|| caps.name("owner"));
    let repo = caps.name("url_repo").or_else(|| caps.name("repo"));
    match (owner, repo) {
        (Some(owner), Some(repo)) => Some(Link::qualified(
            link_type,
            owner.as_str(),
            repo.as_str(),
            number,
        )),
        _ => Some(Link::local(link_type, number)),
    }
}
