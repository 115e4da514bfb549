use log::{info, warn};

pub const DEFAULT_API_BASE: &str = "http://api.indeed.com/ads/apisearch";
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_8_2)";
pub const API_VERSION: &str = "2";
pub const RESPONSE_FORMAT: &str = "json";

/// Maximum age of postings the API will be asked for.
pub const MAX_DAYS: u32 = 7;
pub const DEFAULT_DAYS: u32 = 1;

pub const FALLBACK_LOCATION: &str = "Karachi";
pub const FALLBACK_COUNTRY: &str = "pk";

/// Search input. Empty strings mean "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParameters {
    pub publisher: String,
    pub query: String,
    pub location: String,
    pub country: String,
    pub sort: String,
    pub days: Option<u32>,
}

impl SearchParameters {
    pub fn new(publisher: &str) -> Self {
        SearchParameters {
            publisher: publisher.to_string(),
            ..Default::default()
        }
    }

    /// Applies the defaulting rules. Never rejects input.
    ///
    /// * `days` missing, zero or above [`MAX_DAYS`] becomes [`DEFAULT_DAYS`].
    /// * without a query, location and country must both be present, otherwise
    ///   both are replaced with the fallback pair.
    pub fn normalize(mut self) -> Self {
        match self.days {
            Some(d) if d > 0 && d <= MAX_DAYS => {}
            other => {
                if let Some(d) = other {
                    warn!("Recency window of {} days is out of range, using {}", d, DEFAULT_DAYS);
                }
                self.days = Some(DEFAULT_DAYS);
            }
        }

        if self.query.is_empty() && (self.location.is_empty() || self.country.is_empty()) {
            info!(
                "No query and incomplete location; falling back to {}, {}",
                FALLBACK_LOCATION, FALLBACK_COUNTRY
            );
            self.location = FALLBACK_LOCATION.to_string();
            self.country = FALLBACK_COUNTRY.to_string();
        }

        self
    }

    pub fn recency_days(&self) -> u32 {
        self.days.unwrap_or(DEFAULT_DAYS)
    }

    /// `key=value` pairs in API order joined by `&`.
    /// Values are sent as given: reserved characters are not escaped.
    pub fn to_query_string(&self) -> String {
        let days = self.recency_days().to_string();
        let pairs: [(&str, &str); 9] = [
            ("publisher", self.publisher.as_str()),
            ("q", self.query.as_str()),
            ("l", self.location.as_str()),
            ("co", self.country.as_str()),
            ("sort", self.sort.as_str()),
            ("format", RESPONSE_FORMAT),
            ("fromage", days.as_str()),
            ("v", API_VERSION),
            ("useragent", USER_AGENT),
        ];

        pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Normalizes `params` and returns the full probe URL against `api_base`.
pub fn prepare_url(api_base: &str, params: SearchParameters) -> String {
    let params = params.normalize();
    format!("{}?{}", api_base, params.to_query_string())
}
