//! Table registry tests
//!
//! Tests to ensure every entity table is registered with the connector and
//! declares the key columns its hydrates rely on.

use nomad_tables::schema::Hydrate;
use nomad_tables::Connector;

const EXPECTED_TABLES: &[&str] = &[
    "nomad_acl_auth_method",
    "nomad_acl_binding_rule",
    "nomad_acl_policy",
    "nomad_acl_role",
    "nomad_acl_token",
    "nomad_agent_member",
    "nomad_deployment",
    "nomad_job",
    "nomad_namespace",
    "nomad_node",
    "nomad_plugin",
    "nomad_volume",
];

#[test]
fn test_all_tables_are_registered() {
    let connector = Connector::new();
    assert_eq!(connector.len(), EXPECTED_TABLES.len());
    for name in EXPECTED_TABLES {
        assert!(connector.contains(name), "{name} should be registered");
    }
}

#[test]
fn test_table_names_are_sorted() {
    let connector = Connector::new();
    assert_eq!(connector.table_names(), EXPECTED_TABLES);
}

#[test]
fn test_get_key_columns() {
    let connector = Connector::new();
    let expectations = [
        ("nomad_job", "id"),
        ("nomad_deployment", "id"),
        ("nomad_node", "id"),
        ("nomad_namespace", "name"),
        ("nomad_acl_token", "accessor_id"),
        ("nomad_acl_policy", "name"),
        ("nomad_acl_role", "id"),
        ("nomad_acl_auth_method", "name"),
        ("nomad_acl_binding_rule", "id"),
        ("nomad_plugin", "id"),
        ("nomad_volume", "id"),
    ];

    for (table_name, key) in expectations {
        let table = connector.table(table_name).unwrap();
        let get = table
            .get
            .as_ref()
            .unwrap_or_else(|| panic!("{table_name} should support get"));
        assert_eq!(get.key_column, key, "{table_name} get key");
        assert!(
            table.column(get.key_column).is_some(),
            "{table_name} get key must be a declared column"
        );
    }
}

#[test]
fn test_agent_member_is_list_only() {
    let connector = Connector::new();
    let table = connector.table("nomad_agent_member").unwrap();
    assert!(table.get.is_none());
}

#[test]
fn test_job_list_quals() {
    let connector = Connector::new();
    let table = connector.table("nomad_job").unwrap();
    let quals: Vec<&str> = table.list.key_columns.iter().map(|k| k.name).collect();
    assert!(quals.contains(&"namespace"));
    assert!(quals.contains(&"name"));
    assert!(quals.contains(&"create_index"));
    assert!(table.list.key_columns.iter().all(|k| !k.required));
}

#[test]
fn test_every_table_has_a_title_column() {
    let connector = Connector::new();
    for table in connector.tables() {
        assert!(
            table.column("title").is_some(),
            "{} is missing the standard title column",
            table.name
        );
    }
}

#[test]
fn test_column_names_are_snake_case_and_unique() {
    let connector = Connector::new();
    for table in connector.tables() {
        let mut seen = std::collections::HashSet::new();
        for column in &table.columns {
            assert!(
                column
                    .name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "{}.{} is not snake_case",
                table.name,
                column.name
            );
            assert!(
                seen.insert(column.name),
                "{}.{} is declared twice",
                table.name,
                column.name
            );
        }
    }
}

#[test]
fn test_get_only_columns_imply_a_get_config() {
    let connector = Connector::new();
    for table in connector.tables() {
        let has_get_columns = table.columns.iter().any(|c| c.hydrate == Hydrate::Get);
        if has_get_columns {
            assert!(
                table.get.is_some(),
                "{} declares get-only columns but no get hydrate",
                table.name
            );
        }
    }
}
