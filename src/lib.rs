pub mod error;
pub mod logger;
pub mod config;
pub mod delay_manager;
pub mod search_params;
pub mod api_client;
pub mod prober;
pub mod paginator;
pub mod extractor;
pub mod csv_writer;
pub mod page_fetcher;
pub mod orchestrator;

// Exporting types for convenience
pub use error::{Error, Result};
pub use config::RunConfig;
pub use search_params::SearchParameters;
pub use api_client::{ApiResponse, IndeedClient, JobApi};
pub use extractor::{Extractor, JobRecord};
pub use paginator::{PaginatedRequest, PAGE_SIZE};
pub use orchestrator::{get_indeed_jobs, RunOutcome};
