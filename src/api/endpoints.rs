//! One method per Nomad entity endpoint.
//!
//! List methods return raw item payloads plus paging metadata; get methods
//! return the single-item payload.

use super::{ApiError, Client, QueryMeta, QueryOptions};
use serde_json::Value;

impl Client {
    pub async fn nodes(&self, opts: &QueryOptions) -> Result<(Vec<Value>, QueryMeta), ApiError> {
        self.list("/v1/nodes", opts).await
    }

    pub async fn node(&self, id: &str) -> Result<Value, ApiError> {
        self.get_item(&["v1", "node", id]).await
    }

    pub async fn jobs(&self, opts: &QueryOptions) -> Result<(Vec<Value>, QueryMeta), ApiError> {
        self.list("/v1/jobs", opts).await
    }

    pub async fn job(&self, id: &str) -> Result<Value, ApiError> {
        self.get_item(&["v1", "job", id]).await
    }

    pub async fn deployments(
        &self,
        opts: &QueryOptions,
    ) -> Result<(Vec<Value>, QueryMeta), ApiError> {
        self.list("/v1/deployments", opts).await
    }

    pub async fn deployment(&self, id: &str) -> Result<Value, ApiError> {
        self.get_item(&["v1", "deployment", id]).await
    }

    pub async fn namespaces(
        &self,
        opts: &QueryOptions,
    ) -> Result<(Vec<Value>, QueryMeta), ApiError> {
        self.list("/v1/namespaces", opts).await
    }

    pub async fn namespace(&self, name: &str) -> Result<Value, ApiError> {
        self.get_item(&["v1", "namespace", name]).await
    }

    pub async fn acl_tokens(
        &self,
        opts: &QueryOptions,
    ) -> Result<(Vec<Value>, QueryMeta), ApiError> {
        self.list("/v1/acl/tokens", opts).await
    }

    pub async fn acl_token(&self, accessor_id: &str) -> Result<Value, ApiError> {
        self.get_item(&["v1", "acl", "token", accessor_id]).await
    }

    pub async fn acl_policies(
        &self,
        opts: &QueryOptions,
    ) -> Result<(Vec<Value>, QueryMeta), ApiError> {
        self.list("/v1/acl/policies", opts).await
    }

    pub async fn acl_policy(&self, name: &str) -> Result<Value, ApiError> {
        self.get_item(&["v1", "acl", "policy", name]).await
    }

    pub async fn acl_roles(
        &self,
        opts: &QueryOptions,
    ) -> Result<(Vec<Value>, QueryMeta), ApiError> {
        self.list("/v1/acl/roles", opts).await
    }

    pub async fn acl_role(&self, id: &str) -> Result<Value, ApiError> {
        self.get_item(&["v1", "acl", "role", id]).await
    }

    pub async fn acl_auth_methods(
        &self,
        opts: &QueryOptions,
    ) -> Result<(Vec<Value>, QueryMeta), ApiError> {
        self.list("/v1/acl/auth-methods", opts).await
    }

    pub async fn acl_auth_method(&self, name: &str) -> Result<Value, ApiError> {
        self.get_item(&["v1", "acl", "auth-method", name]).await
    }

    pub async fn acl_binding_rules(
        &self,
        opts: &QueryOptions,
    ) -> Result<(Vec<Value>, QueryMeta), ApiError> {
        self.list("/v1/acl/binding-rules", opts).await
    }

    pub async fn acl_binding_rule(&self, id: &str) -> Result<Value, ApiError> {
        self.get_item(&["v1", "acl", "binding-rule", id]).await
    }

    pub async fn csi_plugins(
        &self,
        opts: &QueryOptions,
    ) -> Result<(Vec<Value>, QueryMeta), ApiError> {
        self.list("/v1/plugins?type=csi", opts).await
    }

    pub async fn csi_plugin(&self, id: &str) -> Result<Value, ApiError> {
        self.get_item(&["v1", "plugin", "csi", id]).await
    }

    pub async fn csi_volumes(
        &self,
        opts: &QueryOptions,
    ) -> Result<(Vec<Value>, QueryMeta), ApiError> {
        self.list("/v1/volumes?type=csi", opts).await
    }

    pub async fn csi_volume(&self, id: &str) -> Result<Value, ApiError> {
        self.get_item(&["v1", "volume", "csi", id]).await
    }

    /// Agent members come back as an envelope holding server identity plus a
    /// `Members` array; each member row is flattened with the server fields so
    /// columns can address both.
    pub async fn agent_members(
        &self,
        opts: &QueryOptions,
    ) -> Result<(Vec<Value>, QueryMeta), ApiError> {
        let url = self.url_for("/v1/agent/members")?;
        let (envelope, meta) = self.send(url, opts).await?;

        let server_fields = ["ServerName", "ServerRegion", "ServerDC"];
        let members = envelope
            .get("Members")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let rows = members
            .into_iter()
            .map(|mut member| {
                if let Value::Object(fields) = &mut member {
                    for name in server_fields {
                        if let Some(v) = envelope.get(name) {
                            fields.insert(name.to_string(), v.clone());
                        }
                    }
                }
                member
            })
            .collect();

        Ok((rows, meta))
    }
}
