use handlebars::Handlebars;
use serde_derive::Serialize;

use crate::aggregate::{CountTable, Inventory};
use crate::error::Result;
use crate::hardware::{Chassis, NetworkAdapter, Processor, StorageDevice};

#[derive(Serialize)]
struct Row<'a, T> {
    #[serde(flatten)]
    descriptor: &'a T,
    count: u64,
}

#[derive(Serialize)]
struct ReportData<'a> {
    processors: Vec<Row<'a, Processor>>,
    network_adapters: Vec<Row<'a, NetworkAdapter>>,
    storage_devices: Vec<Row<'a, StorageDevice>>,
    chassis: Vec<Row<'a, Chassis>>,
}

fn rows<T: Eq + std::hash::Hash>(table: &CountTable<T>) -> Vec<Row<'_, T>> {
    table
        .ranked()
        .into_iter()
        .map(|(descriptor, count)| Row { descriptor, count })
        .collect()
}

/// Renders the four tables, most common hardware first.
pub fn render(inventory: &Inventory) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.register_template_string("report", include_str!("../static/report.hbs"))?;

    let data = ReportData {
        processors: rows(&inventory.processors),
        network_adapters: rows(&inventory.network_adapters),
        storage_devices: rows(&inventory.storage_devices),
        chassis: rows(&inventory.chassis),
    };

    Ok(handlebars.render("report", &data)?)
}
