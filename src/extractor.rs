use serde::{Deserialize, Serialize};
use crate::error::Result;

/// One output row, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub employer: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub job_title: String,
    pub job_link: String,
    pub job_date: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct ApiPage {
    results: Vec<ApiJob>,
}

#[derive(Debug, Deserialize)]
struct ApiJob {
    #[serde(default)]
    jobtitle: Option<String>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    snippet: Option<String>,
    #[serde(rename = "formattedLocationFull", default)]
    formatted_location_full: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

pub struct Extractor;

impl Extractor {
    /// Parses a page body into records. A body that is not JSON or has no
    /// `results` array fails the whole page; a null, missing or unparseable
    /// entry field only blanks its own columns.
    pub fn extract_records(body: &str) -> Result<Vec<JobRecord>> {
        let page: ApiPage = serde_json::from_str(body)?;

        let records = page
            .results
            .into_iter()
            .map(|job| {
                let location = job
                    .formatted_location_full
                    .as_deref()
                    .and_then(Self::split_location);
                let (city, state, zip_code) = match location {
                    Some(l) => (l.city, l.state, l.zip_code),
                    None => Default::default(),
                };

                JobRecord {
                    employer: job.company.unwrap_or_default(),
                    city,
                    state,
                    zip_code,
                    job_link: job.url.as_deref().map(Self::strip_tracking).unwrap_or_default(),
                    job_date: job.date.as_deref().and_then(Self::parse_date).unwrap_or_default(),
                    job_title: job.jobtitle.unwrap_or_default(),
                    description: job.snippet.unwrap_or_default(),
                }
            })
            .collect();

        Ok(records)
    }

    /// `"Austin, TX 78701"` -> Austin / TX / 78701. `None` without a comma.
    /// Only the second comma-separated segment holds state and zip.
    pub fn split_location(location: &str) -> Option<Location> {
        let mut segments = location.split(',');
        let city = segments.next()?;
        let rest = segments.next()?.trim();

        let split_at = rest.char_indices().nth(2).map(|(i, _)| i).unwrap_or(rest.len());
        let (state, zip) = rest.split_at(split_at);

        Some(Location {
            city: city.trim().to_string(),
            state: state.to_string(),
            zip_code: zip.trim().to_string(),
        })
    }

    /// Drops everything from the first `&`.
    pub fn strip_tracking(url: &str) -> String {
        url.split('&').next().unwrap_or_default().to_string()
    }

    /// `"Mon, 02 Oct 2017 14:22:01 GMT"` -> `"02 Oct 2017"`.
    pub fn parse_date(date: &str) -> Option<String> {
        let second = date.split(',').nth(1)?;
        let head: String = second.chars().take(12).collect();
        Some(head.trim().to_string())
    }
}
