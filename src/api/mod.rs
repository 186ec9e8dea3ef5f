//! Thin Nomad HTTP API client
//!
//! Speaks just enough of the Nomad HTTP API for the tables: paged list
//! endpoints and single-item lookups. Payloads are relayed as raw JSON; no
//! shape is enforced on what the cluster returns.
//!
//! Authentication is the `X-Nomad-Token` header; pagination rides the
//! `X-Nomad-NextToken` response header.

mod endpoints;
mod query;

pub use query::{QueryMeta, QueryOptions};

use crate::config::{ConfigError, ResolvedConnection};
use serde_json::Value;
use std::time::Duration;
use url::Url;

const NOMAD_TOKEN_HEADER: &str = "X-Nomad-Token";
const NEXT_TOKEN_HEADER: &str = "X-Nomad-NextToken";

/// Errors from the upstream API. Passed through verbatim; the connector layer
/// only ever classifies them, it never recovers from them.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Nomad API returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("request to Nomad failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode Nomad response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code, when the upstream answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }
}

/// Client for one Nomad cluster.
pub struct Client {
    http: reqwest::Client,
    address: Url,
    namespace: Option<String>,
    secret_id: Option<String>,
}

// The secret never appears in debug output.
impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("address", &self.address.as_str())
            .field("namespace", &self.namespace)
            .field("secret_id_set", &self.secret_id.is_some())
            .finish()
    }
}

impl Client {
    /// Build a client from resolved connection settings.
    pub fn new(conn: &ResolvedConnection) -> Result<Self, ConfigError> {
        let address = Url::parse(&conn.address).map_err(|source| ConfigError::InvalidAddress {
            address: conn.address.clone(),
            source,
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ConfigError::ClientBuild(e.to_string()))?;

        tracing::debug!("Created Nomad client for: {}", address);

        Ok(Self {
            http,
            address,
            namespace: conn.namespace.clone(),
            secret_id: conn.secret_id.clone(),
        })
    }

    /// Connection-level namespace, used when a query does not carry its own.
    pub fn default_namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// URL for a fixed endpoint path (may carry a baked-in query string).
    fn url_for(&self, path: &str) -> Result<Url, ApiError> {
        self.address.join(path).map_err(|e| ApiError::Http {
            status: 0,
            message: format!("invalid request path {path}: {e}"),
        })
    }

    /// URL built from raw path segments, percent-encoded so keys with
    /// reserved characters survive the join.
    fn url_with_segments(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.address.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Http {
                status: 0,
                message: format!("address {} cannot carry a path", self.address),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, url: Url, opts: &QueryOptions) -> reqwest::RequestBuilder {
        let mut req = self.http.get(url);
        if let Some(token) = &self.secret_id {
            req = req.header(NOMAD_TOKEN_HEADER, token);
        }
        if opts.namespace.is_none() {
            if let Some(ns) = &self.namespace {
                req = req.query(&[("namespace", ns.as_str())]);
            }
        }
        opts.apply(req)
    }

    pub(crate) async fn send(
        &self,
        url: Url,
        opts: &QueryOptions,
    ) -> Result<(Value, QueryMeta), ApiError> {
        tracing::debug!("GET {}", url.path());
        let resp = self.request(url, opts).send().await?;

        let status = resp.status();
        let meta = QueryMeta {
            next_token: resp
                .headers()
                .get(NEXT_TOKEN_HEADER)
                .and_then(|v| v.to_str().ok())
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        };

        let body = resp.bytes().await?;
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&body).trim().to_string(),
            });
        }

        let value = serde_json::from_slice(&body)?;
        Ok((value, meta))
    }

    /// Paged list call: expects a JSON array payload.
    pub(crate) async fn list(
        &self,
        path: &str,
        opts: &QueryOptions,
    ) -> Result<(Vec<Value>, QueryMeta), ApiError> {
        let (value, meta) = self.send(self.url_for(path)?, opts).await?;
        let items = match value {
            Value::Array(items) => items,
            Value::Null => Vec::new(),
            other => vec![other],
        };
        Ok((items, meta))
    }

    /// Single-item lookup: relays the payload object.
    pub(crate) async fn get_item(&self, segments: &[&str]) -> Result<Value, ApiError> {
        let url = self.url_with_segments(segments)?;
        let (value, _) = self.send(url, &QueryOptions::default()).await?;
        Ok(value)
    }
}
