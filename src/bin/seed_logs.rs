//! seed-logs - put synthetic log events into a log group stream

use clap::Parser;

use cloudtools::config::{ClientConfig, Credentials, SeedConfig, DEFAULT_REGION};
use cloudtools::generator::HttpSentenceSource;
use cloudtools::types::Destination;
use cloudtools::{Error, HttpApiClient, LogAppender};

/// Put log events into a log group stream
#[derive(Parser, Debug)]
#[command(name = "seed-logs")]
#[command(about = "Put synthetic log events into a log group stream", long_about = None)]
struct Cli {
    /// Number of log events to create
    #[arg(long, default_value_t = 5)]
    count: usize,

    /// Log group name
    #[arg(long)]
    groupname: String,

    /// Log stream name
    #[arg(long)]
    streamname: String,

    /// Backend region for the log group
    #[arg(long, default_value = DEFAULT_REGION)]
    region: String,

    /// Do not dump the generated data to stdout as well
    #[arg(long)]
    nostdout: bool,

    /// Do not create the log group/stream if it doesn't exist
    #[arg(long)]
    dontcreate: bool,
}

// The workflow is strictly sequential; one thread is all it needs.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let client = HttpApiClient::new(
        ClientConfig::for_region(cli.region),
        Credentials::from_env(),
    );
    let appender = LogAppender::new(client);
    let source = HttpSentenceSource::default();

    let mut config = SeedConfig::new(
        Destination::new(cli.groupname, cli.streamname),
        cli.count,
    );
    config.create_destination = !cli.dontcreate;

    match appender.run(&config, &source).await {
        Ok(events) => {
            if !cli.nostdout {
                match serde_json::to_string_pretty(&events) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Error: failed to render the batch: {e}");
                        std::process::exit(1);
                    }
                }
            }
        }
        Err(Error::Authentication(message)) => {
            eprintln!("Error: authentication failed when connecting to the backend.");
            eprintln!("Error: please check your credentials...");
            eprintln!("Error: message returned from the identity call: {message}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Exiting...");
            std::process::exit(1);
        }
    }
}
