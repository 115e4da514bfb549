/// Results requested per page.
pub const PAGE_SIZE: u64 = 25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedRequest {
    pub url: String,
    pub start: u64,
    pub limit: u64,
}

/// One request per `PAGE_SIZE` window in `0..total`, in order.
pub fn build_api_links(base_url: &str, total: u64) -> Vec<PaginatedRequest> {
    (0..total)
        .step_by(PAGE_SIZE as usize)
        .map(|start| PaginatedRequest {
            url: format!("{}&start={}&limit={}", base_url, start, PAGE_SIZE),
            start,
            limit: PAGE_SIZE,
        })
        .collect()
}
