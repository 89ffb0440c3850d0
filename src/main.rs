use std::process::ExitCode;

use reqwest::Url;
use testbed_inventory::{logging, report, take_inventory, Hierarchy, HttpFetcher, Result};

#[derive(clap::Parser, Debug)]
#[command(
    version,
    about = "Count the distinct processors, network adapters, storage devices and chassis of a testbed.",
    long_about = "Walk a testbed's REST API from the root through every level (by default sites, clusters and nodes) and print how often each hardware configuration appears, most common first."
)]
pub struct Args {
    /// Root of the API. Relative links are resolved against it.
    #[arg(long, default_value = "https://api.chameleoncloud.org")]
    base_url: Url,

    /// Hierarchy levels from the root down to the node lists.
    #[arg(long, value_delimiter = ',', default_value = "root,sites,clusters,nodes")]
    levels: Vec<String>,

    /// Log more (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = <Args as clap::Parser>::parse();
    logging::init(args.verbose);

    let Some(hierarchy) = Hierarchy::new(args.levels) else {
        return ExitCode::SUCCESS;
    };

    match run(&hierarchy, &args.base_url) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(hierarchy: &Hierarchy, base_url: &Url) -> Result<String> {
    let fetcher = HttpFetcher::new()?;
    let inventory = take_inventory(&fetcher, hierarchy, base_url)?;

    tracing::info!(
        processors = inventory.processors.len(),
        network_adapters = inventory.network_adapters.len(),
        storage_devices = inventory.storage_devices.len(),
        chassis = inventory.chassis.len(),
        "distinct hardware"
    );

    report::render(&inventory)
}
