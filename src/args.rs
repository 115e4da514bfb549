use clap::Parser;
use std::path::PathBuf;
use indeed_jobs_lib::SearchParameters;

#[derive(Parser, Debug)]
#[command(name = "indeed-jobs")]
#[command(about = "Fetches job listings from the Indeed API into a CSV file")]
#[command(version)]
pub struct Args {
    /// Indeed publisher ID
    #[arg(short, long, env = "INDEED_PUBLISHER_ID", default_value = "")]
    pub publisher: String,

    /// Job search keywords
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// City or state
    #[arg(short, long, default_value = "")]
    pub location: String,

    /// Country code, e.g. us
    #[arg(short = 'c', long, default_value = "")]
    pub country: String,

    /// Sort order: date or relevance
    #[arg(short, long, default_value = "")]
    pub sort: String,

    /// Maximum posting age in days (1-7)
    #[arg(short, long)]
    pub days: Option<u32>,

    /// Output CSV file (overrides the config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON run configuration
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn search_parameters(&self) -> SearchParameters {
        SearchParameters {
            publisher: self.publisher.clone(),
            query: self.query.clone(),
            location: self.location.clone(),
            country: self.country.clone(),
            sort: self.sort.clone(),
            days: self.days,
        }
    }
}
