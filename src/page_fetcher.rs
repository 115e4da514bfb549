use std::path::Path;
use log::{error, info};
use crate::api_client::JobApi;
use crate::csv_writer;
use crate::delay_manager::{self, DelayRange};
use crate::error::{Error, Result};
use crate::extractor::{Extractor, JobRecord};
use crate::paginator::PaginatedRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Number of rows appended.
    Written(usize),
    Failed,
}

fn fetch_records(source: &dyn JobApi, url: &str) -> Result<Vec<JobRecord>> {
    let resp = source.get(url)?;
    if !resp.is_ok() {
        return Err(Error::HttpStatus(resp.status));
    }
    Extractor::extract_records(&resp.body)
}

/// Fetches one page, appends its rows to `output`, then sleeps for a random
/// duration from `delay` whether or not the page succeeded.
pub fn fetch_page(
    source: &dyn JobApi,
    request: &PaginatedRequest,
    output: &Path,
    delay: &DelayRange,
) -> PageOutcome {
    let outcome = match fetch_records(source, &request.url) {
        Ok(jobs) => {
            for job in &jobs {
                info!("{}", job.job_title);
            }
            match csv_writer::write_rows(output, &jobs) {
                Ok(()) => PageOutcome::Written(jobs.len()),
                Err(e) => {
                    error!("Error writing page at offset {}! {}", request.start, e);
                    PageOutcome::Failed
                }
            }
        }
        Err(e) => {
            error!("Error! page at offset {}: {}", request.start, e);
            PageOutcome::Failed
        }
    };

    delay_manager::random_page_delay(delay);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::ApiResponse;
    use crate::paginator::build_api_links;

    struct Canned(u16, &'static str);

    impl JobApi for Canned {
        fn get(&self, _url: &str) -> Result<ApiResponse> {
            Ok(ApiResponse { status: self.0, body: self.1.to_string() })
        }
    }

    const PAGE: &str = r#"{"results": [
        {"jobtitle": "A", "company": "C1", "snippet": "s", "formattedLocationFull": "Austin, TX 78701"},
        {"jobtitle": "B", "company": "C2", "snippet": "s", "formattedLocationFull": "Remote"}
    ]}"#;

    fn temp_csv(name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("indeed_jobs_page_{}_{}.csv", name, uuid::Uuid::new_v4()));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn test_page_rows_written() {
        let path = temp_csv("ok");
        let links = build_api_links("u", 1);
        let request = &links[0];

        let outcome = fetch_page(&Canned(200, PAGE), request, &path, &DelayRange::none());
        assert_eq!(outcome, PageOutcome::Written(2));

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_failed_page_writes_nothing() {
        let path = temp_csv("fail");
        let links = build_api_links("u", 1);
        let request = &links[0];

        assert_eq!(fetch_page(&Canned(500, PAGE), request, &path, &DelayRange::none()), PageOutcome::Failed);
        assert_eq!(fetch_page(&Canned(200, "{}"), request, &path, &DelayRange::none()), PageOutcome::Failed);
        assert!(!path.exists());
    }
}
