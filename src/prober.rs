use log::{error, info};
use serde::Deserialize;
use crate::api_client::JobApi;
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct ProbeBody {
    #[serde(rename = "totalResults")]
    total_results: u64,
}

fn fetch_total(source: &dyn JobApi, url: &str) -> Result<u64> {
    let resp = source.get(url)?;
    if !resp.is_ok() {
        return Err(Error::HttpStatus(resp.status));
    }
    let body: ProbeBody = serde_json::from_str(&resp.body)?;
    Ok(body.total_results)
}

/// Asks the API how many results `url` matches. Every failure counts as zero.
pub fn get_total_jobs(source: &dyn JobApi, url: &str) -> u64 {
    match fetch_total(source, url) {
        Ok(total) => {
            info!("total jobs {}", total);
            total
        }
        Err(e) => {
            error!("Error getting total jobs! {}", e);
            0
        }
    }
}
