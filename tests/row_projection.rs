//! Row projection tests
//!
//! Verifies that upstream list payloads project into rows exactly as the
//! table declarations say: PascalCase fields under snake_case columns,
//! acronym overrides, nanosecond timestamps, and nulls for get-only columns
//! when the row comes from a list stub.

use nomad_tables::schema::project_row;
use nomad_tables::tables;
use serde_json::{json, Value};

#[test]
fn test_job_list_stub_projection() {
    let table = tables::job::table();
    let stub = json!({
        "ID": "web",
        "Name": "web",
        "Namespace": "default",
        "Status": "running",
        "Type": "service",
        "Priority": 50,
        "Stop": false,
        "SubmitTime": 1_678_886_400_000_000_000_i64,
        "Datacenters": ["dc1", "dc2"],
    });

    let row = project_row(&table.columns, &stub);
    assert_eq!(row.get("id"), Some(&json!("web")));
    assert_eq!(row.get("namespace"), Some(&json!("default")));
    assert_eq!(row.get("priority"), Some(&json!(50)));
    assert_eq!(row.get("datacenters"), Some(&json!(["dc1", "dc2"])));
    assert_eq!(row.get("title"), Some(&json!("web")));
    // epoch nanoseconds render as RFC 3339
    assert_eq!(
        row.get("submit_time"),
        Some(&json!("2023-03-15T13:20:00+00:00"))
    );
    // get-only columns are absent from the list stub
    assert_eq!(row.get("task_groups"), Some(&Value::Null));
    assert_eq!(row.get("version"), Some(&Value::Null));
}

#[test]
fn test_job_enriched_payload_fills_get_columns() {
    let table = tables::job::table();
    let full = json!({
        "ID": "web",
        "Name": "web",
        "Version": 4,
        "Region": "global",
        "Stable": true,
        "TaskGroups": [{"Name": "web"}],
    });

    let row = project_row(&table.columns, &full);
    assert_eq!(row.get("version"), Some(&json!(4)));
    assert_eq!(row.get("region"), Some(&json!("global")));
    assert_eq!(row.get("stable"), Some(&json!(true)));
    assert_eq!(row.get("task_groups"), Some(&json!([{"Name": "web"}])));
}

#[test]
fn test_node_acronym_id_field() {
    let table = tables::node::table();
    let stub = json!({
        "ID": "1f3f03ea-a420-b64b-c73b-51290ed7f481",
        "Name": "worker-1",
        "Status": "ready",
        "Datacenter": "dc1",
    });

    let row = project_row(&table.columns, &stub);
    assert_eq!(
        row.get("id"),
        Some(&json!("1f3f03ea-a420-b64b-c73b-51290ed7f481"))
    );
    assert_eq!(row.get("datacenter"), Some(&json!("dc1")));
    assert_eq!(row.get("title"), Some(&json!("worker-1")));
}

#[test]
fn test_acl_token_field_overrides() {
    let table = tables::acl_token::table();
    let full = json!({
        "AccessorID": "aa-11",
        "SecretID": "ss-22",
        "Name": "ci",
        "Type": "client",
        "Global": false,
        "ExpirationTTL": "8h0m0s",
    });

    let row = project_row(&table.columns, &full);
    assert_eq!(row.get("accessor_id"), Some(&json!("aa-11")));
    assert_eq!(row.get("secret_id"), Some(&json!("ss-22")));
    assert_eq!(row.get("expiration_ttl"), Some(&json!("8h0m0s")));
    assert_eq!(row.get("type"), Some(&json!("client")));
}

#[test]
fn test_agent_member_flattened_row() {
    let table = tables::agent_member::table();
    let member = json!({
        "Name": "server-1.global",
        "Addr": "10.0.0.7",
        "Port": 4648,
        "Status": "alive",
        "ProtocolCur": 2,
        "Tags": {"role": "nomad", "region": "global"},
        "ServerName": "server-1",
        "ServerRegion": "global",
        "ServerDC": "dc1",
    });

    let row = project_row(&table.columns, &member);
    assert_eq!(row.get("address"), Some(&json!("10.0.0.7")));
    assert_eq!(row.get("server_dc"), Some(&json!("dc1")));
    assert_eq!(row.get("server_name"), Some(&json!("server-1")));
    assert_eq!(row.get("port"), Some(&json!(4648)));
    assert_eq!(row.get("tags"), Some(&json!({"role": "nomad", "region": "global"})));
}

#[test]
fn test_row_serializes_in_column_order() {
    let table = tables::namespace::table();
    let row = project_row(
        &table.columns,
        &json!({"Name": "default", "Description": "Default shared namespace"}),
    );
    let rendered = serde_json::to_string(&row).unwrap();
    // name is declared first; serialization must not reorder columns
    assert!(rendered.starts_with("{\"name\":\"default\""), "{rendered}");
}
