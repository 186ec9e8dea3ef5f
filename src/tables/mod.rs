//! Entity table definitions
//!
//! One module per Nomad entity, each declaring its column set, accepted quals,
//! and the fetch functions backing the list and get paths.

pub mod acl_auth_method;
pub mod acl_binding_rule;
pub mod acl_policy;
pub mod acl_role;
pub mod acl_token;
pub mod agent_member;
pub mod csi_plugin;
pub mod csi_volume;
pub mod deployment;
pub mod job;
pub mod namespace;
pub mod node;

use crate::schema::Table;

/// Every table the connector registers.
pub fn all_tables() -> Vec<Table> {
    vec![
        acl_auth_method::table(),
        acl_binding_rule::table(),
        acl_policy::table(),
        acl_role::table(),
        acl_token::table(),
        agent_member::table(),
        deployment::table(),
        job::table(),
        namespace::table(),
        node::table(),
        csi_plugin::table(),
        csi_volume::table(),
    ]
}
