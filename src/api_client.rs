use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;
use log::debug;
use crate::error::Result;
use crate::search_params;

/// Raw reply from the job search API. Status handling is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// A single blocking GET. Transport failures are errors, HTTP statuses are not.
pub trait JobApi {
    fn get(&self, url: &str) -> Result<ApiResponse>;
}

pub struct IndeedClient {
    client: Client,
}

impl IndeedClient {
    /// `timeout` of `None` keeps the client's built-in default.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(search_params::USER_AGENT));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }

        Ok(IndeedClient { client: builder.build()? })
    }
}

impl JobApi for IndeedClient {
    fn get(&self, url: &str) -> Result<ApiResponse> {
        debug!("GET {}", url);
        let resp = self.client.get(url).send()?;

        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(ApiResponse { status, body })
    }
}
