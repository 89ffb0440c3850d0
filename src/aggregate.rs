use std::collections::HashMap;
use std::hash::Hash;

use crate::document::Document;
use crate::error::{InventoryError, Result};
use crate::hardware::{Chassis, NetworkAdapter, NodeRecord, Processor, StorageDevice};
use crate::hierarchy::LocatedResource;
use crate::transport::Fetch;

#[derive(Debug, Clone, Copy)]
struct Tally {
    count: u64,
    first_seen: usize,
}

/// Occurrence counts keyed by descriptor.
#[derive(Debug, Clone)]
pub struct CountTable<T> {
    tallies: HashMap<T, Tally>,
}

impl<T> Default for CountTable<T> {
    fn default() -> Self {
        Self {
            tallies: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash> CountTable<T> {
    pub fn increment(&mut self, descriptor: T) {
        let first_seen = self.tallies.len();
        let tally = self
            .tallies
            .entry(descriptor)
            .or_insert(Tally { count: 0, first_seen });
        tally.count += 1;
    }

    pub fn count(&self, descriptor: &T) -> u64 {
        self.tallies.get(descriptor).map_or(0, |tally| tally.count)
    }

    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Entries by descending count. Equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(&T, u64)> {
        let mut entries: Vec<(&T, Tally)> = self
            .tallies
            .iter()
            .map(|(descriptor, tally)| (descriptor, *tally))
            .collect();

        entries.sort_by(|(_, left), (_, right)| {
            right
                .count
                .cmp(&left.count)
                .then_with(|| left.first_seen.cmp(&right.first_seen))
        });

        entries
            .into_iter()
            .map(|(descriptor, tally)| (descriptor, tally.count))
            .collect()
    }
}

/// Hardware tallies for one run.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub processors: CountTable<Processor>,
    pub network_adapters: CountTable<NetworkAdapter>,
    pub storage_devices: CountTable<StorageDevice>,
    pub chassis: CountTable<Chassis>,
    pub nodes: u64,
}

impl Inventory {
    pub fn record(&mut self, node: NodeRecord) {
        self.nodes += 1;
        self.processors.increment(node.processor);
        for adapter in node.network_adapters {
            self.network_adapters.increment(adapter);
        }
        for device in node.storage_devices {
            self.storage_devices.increment(device);
        }
        self.chassis.increment(node.chassis);
    }
}

/// Fetches every leaf location and folds its node records into a fresh
/// [`Inventory`]. The first failure aborts the whole aggregation.
pub fn aggregate<F: Fetch + ?Sized>(fetcher: &F, leaves: &[LocatedResource]) -> Result<Inventory> {
    let mut inventory = Inventory::default();

    for leaf in leaves {
        let response = fetcher.fetch(&leaf.url)?;
        let nodes = match Document::parse(&leaf.url, response)? {
            Document::List(nodes) => nodes,
            Document::Single(_) => {
                return Err(InventoryError::schema(&leaf.url, "expected an `items` list of nodes"))
            }
        };

        tracing::debug!(url = %leaf.url, nodes = nodes.len(), "aggregating");
        for (index, node) in nodes.into_iter().enumerate() {
            let node = serde_json::from_value::<NodeRecord>(node).map_err(|err| {
                InventoryError::schema(&leaf.url, format!("node #{index} is malformed: {err}"))
            })?;
            inventory.record(node);
        }
    }

    tracing::info!(nodes = inventory.nodes, "aggregation complete");
    Ok(inventory)
}
