//! list-params - list configuration parameters matching a name filter

use clap::{ArgGroup, Parser};

use cloudtools::config::{ClientConfig, Credentials, DEFAULT_REGION};
use cloudtools::listing::{render_listing, ListingEntry, ParameterLister};
use cloudtools::types::NameFilter;
use cloudtools::HttpApiClient;

/// List configuration parameters
#[derive(Parser, Debug)]
#[command(name = "list-params")]
#[command(about = "List configuration parameters matching a name filter", long_about = None)]
#[command(group(ArgGroup::new("filterby").required(true).args(["beginswith", "contains"])))]
struct Cli {
    /// Show parameters *beginning with* this string
    #[arg(long)]
    beginswith: Option<String>,

    /// Show parameters *containing* this string
    #[arg(long)]
    contains: Option<String>,

    /// Backend region
    #[arg(long, default_value = DEFAULT_REGION)]
    region: String,

    /// Also show each parameter's value (secure values stay masked)
    #[arg(long)]
    showvalues: bool,
}

impl Cli {
    fn filter(&self) -> NameFilter {
        match (&self.beginswith, &self.contains) {
            (Some(value), _) => NameFilter::BeginsWith(value.clone()),
            (None, Some(value)) => NameFilter::Contains(value.clone()),
            // clap's required group guarantees one of the two is present
            (None, None) => unreachable!("filter group is required"),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let filter = cli.filter();

    let client = HttpApiClient::new(
        ClientConfig::for_region(cli.region.clone()),
        Credentials::from_env(),
    );
    let lister = ParameterLister::new(client);

    let parameters = match lister.list_all(&filter).await {
        Ok(parameters) => parameters,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut entries = Vec::with_capacity(parameters.len());
    for parameter in &parameters {
        let value = if cli.showvalues {
            match lister.resolve_value(parameter).await {
                Ok(value) => Some(value),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        } else {
            None
        };
        entries.push(ListingEntry {
            name: parameter.name.clone(),
            value,
        });
    }

    println!("{}", render_listing(&entries));
}
