use std::error::Error;
use clap::Parser;
use log::{error, info};
use indeed_jobs_lib::{get_indeed_jobs, logger, IndeedClient, RunConfig};

mod args;
use args::Args;

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RunConfig::from_file(path).map_err(|e| {
            error!("Could not load config {:?}: {}", path, e);
            e
        })?,
        None => RunConfig::default(),
    };
    if let Some(output) = &args.output {
        config = config.with_output_path(output);
    }

    if args.publisher.is_empty() {
        info!("No publisher ID given; the API will most likely return nothing.");
    }

    let client = IndeedClient::new(config.request_timeout())?;
    info!("Starting Indeed extraction into {:?}", config.output_path);

    let outcome = get_indeed_jobs(args.search_parameters(), &config, &client);
    println!("{}", outcome.message());
    Ok(())
}
