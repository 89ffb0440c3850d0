//! Hardware descriptors extracted from leaf-level node records.
//!
//! Each descriptor only carries the fields that identify it, so the derived
//! `Eq`/`Hash` compare exactly those fields and anything else in the JSON is
//! ignored.

use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawProcessor")]
pub struct Processor {
    pub vendor: String,
    pub model: String,
    /// Empty when the API does not report a version.
    pub version: String,
}

#[derive(Deserialize)]
struct RawProcessor {
    vendor: String,
    model: String,
    #[serde(default)]
    version: Option<String>,
}

impl From<RawProcessor> for Processor {
    fn from(raw: RawProcessor) -> Self {
        Processor {
            vendor: raw.vendor,
            model: raw.model,
            version: raw.version.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkAdapter {
    pub vendor: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorageDevice {
    pub vendor: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chassis {
    pub name: String,
}

/// The four facets of one node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeRecord {
    pub processor: Processor,
    pub network_adapters: Vec<NetworkAdapter>,
    pub storage_devices: Vec<StorageDevice>,
    pub chassis: Chassis,
}
