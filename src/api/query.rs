//! List query options and response metadata.

/// Options applied to a paged list call, mirroring the upstream client's
/// query options: namespace/region scoping, prefix and filter matching,
/// page size, and the continuation token.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub namespace: Option<String>,
    pub region: Option<String>,
    pub prefix: Option<String>,
    pub filter: Option<String>,
    pub per_page: Option<u64>,
    pub next_token: Option<String>,
}

impl QueryOptions {
    pub(crate) fn apply(&self, mut req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ns) = &self.namespace {
            req = req.query(&[("namespace", ns.as_str())]);
        }
        if let Some(region) = &self.region {
            req = req.query(&[("region", region.as_str())]);
        }
        if let Some(prefix) = &self.prefix {
            req = req.query(&[("prefix", prefix.as_str())]);
        }
        if let Some(filter) = &self.filter {
            req = req.query(&[("filter", filter.as_str())]);
        }
        if let Some(per_page) = self.per_page {
            req = req.query(&[("per_page", per_page.to_string().as_str())]);
        }
        if let Some(token) = &self.next_token {
            req = req.query(&[("next_token", token.as_str())]);
        }
        req
    }
}

/// Metadata returned alongside a list page.
#[derive(Debug, Clone, Default)]
pub struct QueryMeta {
    /// Opaque cursor; present when more pages remain.
    pub next_token: Option<String>,
}
