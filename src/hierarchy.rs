use std::collections::VecDeque;

use reqwest::Url;

use crate::document::{child_href, Document};
use crate::error::{InventoryError, Result};
use crate::transport::Fetch;

/// Ordered level names, from the root down to the leaf level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hierarchy {
    levels: Vec<String>,
}

impl Hierarchy {
    /// Returns `None` when no (non-empty) level names are given.
    pub fn new<I, S>(levels: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let levels: Vec<String> = levels
            .into_iter()
            .map(Into::into)
            .filter(|level| !level.is_empty())
            .collect();

        if levels.is_empty() {
            None
        } else {
            Some(Self { levels })
        }
    }

    pub fn name(&self, depth: usize) -> &str {
        &self.levels[depth]
    }

    /// Name of the level below `depth`, or `None` at the leaf level.
    pub fn child_level(&self, depth: usize) -> Option<&str> {
        self.levels.get(depth + 1).map(String::as_str)
    }
}

/// A fetchable collection at a given depth of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocatedResource {
    pub depth: usize,
    pub url: Url,
}

/// Resolves an `href` found in a response. Relative references hang off the
/// base URL, absolute ones are taken as they are.
pub fn resolve_href(base_url: &Url, href: &str) -> Result<Url> {
    if let Ok(absolute) = Url::parse(href) {
        return Ok(absolute);
    }

    let joined = format!(
        "{}/{}",
        base_url.as_str().trim_end_matches('/'),
        href.trim_start_matches('/')
    );
    Url::parse(&joined)
        .map_err(|err| InventoryError::schema(base_url, format!("invalid link `{href}`: {err}")))
}

/// Breadth-first walk from `root` down to the leaf level of `hierarchy`,
/// returning every leaf-level location in discovery order.
///
/// A location that turns out to have no children before the leaf level is
/// reached is returned as if it were a leaf, so the root is never dropped.
pub fn walk<F: Fetch + ?Sized>(
    fetcher: &F,
    hierarchy: &Hierarchy,
    base_url: &Url,
    root: Url,
) -> Result<Vec<LocatedResource>> {
    let mut current = LocatedResource {
        depth: 0,
        url: root,
    };
    let mut frontier = VecDeque::new();

    while let Some(child_level) = hierarchy.child_level(current.depth) {
        tracing::debug!(
            level_name = hierarchy.name(current.depth),
            url = %current.url,
            "expanding"
        );

        let response = fetcher.fetch(&current.url)?;
        for item in Document::parse(&current.url, response)?.into_items() {
            let href = child_href(&current.url, item, child_level)?;
            frontier.push_back(LocatedResource {
                depth: current.depth + 1,
                url: resolve_href(base_url, &href)?,
            });
        }

        match frontier.pop_front() {
            Some(next) => current = next,
            None => {
                tracing::warn!(
                    level_name = hierarchy.name(current.depth),
                    url = %current.url,
                    "no {child_level} found, treating location as a leaf"
                );
                break;
            }
        }
    }

    // `current` was dequeued but never expanded.
    frontier.push_front(current);

    tracing::info!(leaves = frontier.len(), "hierarchy walk complete");
    Ok(frontier.into())
}
