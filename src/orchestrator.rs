use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use log::{error, info, warn};
use crate::api_client::JobApi;
use crate::config::RunConfig;
use crate::csv_writer::{self, HEADING};
use crate::page_fetcher::{self, PageOutcome};
use crate::paginator;
use crate::prober;
use crate::search_params::{self, SearchParameters};

pub const FETCHED_MESSAGE: &str = "Jobs fetched successfully.";
pub const NOT_FOUND_MESSAGE: &str =
    "Jobs not found. Please use a valid Publisher Id along with query keyword or location.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every planned page was attempted. Counters are informational only.
    Fetched {
        total: u64,
        pages: usize,
        pages_failed: usize,
        records: usize,
    },
    /// The probe reported no results or failed.
    NotFound,
}

impl RunOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            RunOutcome::Fetched { .. } => FETCHED_MESSAGE,
            RunOutcome::NotFound => NOT_FOUND_MESSAGE,
        }
    }
}

fn remove_previous_output(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => info!("Removed previous output {:?}", path),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!("Could not remove previous output {:?}: {}", path, e),
    }
}

/// Runs one full extraction: probe, plan, write heading, then every page in order.
///
/// The output file is reset at the start of each call. Pages that fail are
/// logged and skipped, they never stop the run.
pub fn get_indeed_jobs(
    params: SearchParameters,
    config: &RunConfig,
    source: &dyn JobApi,
) -> RunOutcome {
    let output = config.output_path.as_path();
    remove_previous_output(output);

    let base_url = search_params::prepare_url(&config.api_base_url, params);

    let total = prober::get_total_jobs(source, &base_url);
    if total == 0 {
        warn!("No jobs reported for this search.");
        return RunOutcome::NotFound;
    }

    let links = paginator::build_api_links(&base_url, total);
    info!("Fetching {} pages into {:?}", links.len(), output);

    if let Err(e) = csv_writer::write_heading(output, &HEADING) {
        error!("Failed to write CSV heading: {}", e);
    }

    let delay = config.delay();
    let mut pages_failed = 0;
    let mut records = 0;
    for (i, link) in links.iter().enumerate() {
        info!("Page {} / {} (start={})", i + 1, links.len(), link.start);
        match page_fetcher::fetch_page(source, link, output, &delay) {
            PageOutcome::Written(n) => records += n,
            PageOutcome::Failed => pages_failed += 1,
        }
    }

    info!(
        "Finished: {} records from {} pages ({} failed)",
        records,
        links.len(),
        pages_failed
    );

    RunOutcome::Fetched {
        total,
        pages: links.len(),
        pages_failed,
        records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_fixed() {
        let fetched = RunOutcome::Fetched { total: 30, pages: 2, pages_failed: 2, records: 0 };
        assert_eq!(fetched.message(), "Jobs fetched successfully.");
        assert_eq!(
            RunOutcome::NotFound.message(),
            "Jobs not found. Please use a valid Publisher Id along with query keyword or location."
        );
    }

    #[test]
    fn test_remove_missing_output_is_quiet() {
        let path = std::env::temp_dir().join(format!("indeed_jobs_missing_{}.csv", uuid::Uuid::new_v4()));
        remove_previous_output(&path);
        assert!(!path.exists());
    }
}
