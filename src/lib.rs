//! Counts the distinct hardware configurations of a testbed by walking its
//! REST API from the root down to the node lists.

pub mod aggregate;
pub mod document;
pub mod error;
pub mod hardware;
pub mod hierarchy;
pub mod logging;
pub mod report;
pub mod transport;

#[cfg(test)]
mod testing;

use reqwest::Url;

pub use aggregate::{aggregate, CountTable, Inventory};
pub use error::{InventoryError, Result};
pub use hierarchy::{walk, Hierarchy, LocatedResource};
pub use transport::{Fetch, HttpFetcher};

/// Walks the hierarchy rooted at `base_url`, then tallies every node found
/// at the leaf level.
pub fn take_inventory<F: Fetch + ?Sized>(
    fetcher: &F,
    hierarchy: &Hierarchy,
    base_url: &Url,
) -> Result<Inventory> {
    let leaves = walk(fetcher, hierarchy, base_url, base_url.clone())?;
    aggregate(fetcher, &leaves)
}
