//! Integration tests for the casemodel-core crate.

use std::sync::Arc;

use casemodel_core::{
    AttributeMap, AttributeStore, CaseAdapter, CaseConfig, ModelError, to_camel_case,
    to_snake_case,
};
use serde_json::{Value, json};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn user(config: &Arc<CaseConfig>) -> CaseAdapter<AttributeMap<Value>> {
    let mut model = CaseAdapter::new(AttributeMap::new(), Arc::clone(config));
    model
        .fill([
            ("id", json!(1)),
            ("firstName", json!("Ada")),
            ("last_login_at", json!("2024-01-15T10:30:00Z")),
            ("isEmailVerified", json!(true)),
        ])
        .unwrap();
    model
}

/// A store whose writes always fail, to check errors come through unchanged.
#[derive(Debug, Default)]
struct ReadOnlyStore {
    attributes: AttributeMap<Value>,
}

#[derive(Debug, PartialEq)]
struct ReadOnly(String);

impl std::fmt::Display for ReadOnly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "read-only attribute: {}", self.0)
    }
}

impl AttributeStore for ReadOnlyStore {
    type Value = Value;
    type Error = ReadOnly;

    fn read_attribute(&self, key: &str) -> Result<Option<&Value>, ReadOnly> {
        Ok(self.attributes.read_attribute(key).ok().flatten())
    }

    fn write_attribute(&mut self, key: String, _value: Value) -> Result<(), ReadOnly> {
        Err(ReadOnly(key))
    }

    fn export_all_attributes(&self) -> Result<indexmap::IndexMap<String, Value>, ReadOnly> {
        Err(ReadOnly("*".into()))
    }
}

// ---------------------------------------------------------------------------
// Key conversion properties
// ---------------------------------------------------------------------------

#[test]
fn test_conversion_round_trips() {
    for key in ["id", "name", "first_name", "last_login_at", "order_total_cents"] {
        assert_eq!(to_snake_case(&to_camel_case(key)), key);
    }
    for key in ["id", "firstName", "lastLoginAt", "orderTotalCents", "v2Token"] {
        assert_eq!(to_camel_case(&to_snake_case(key)), key);
    }
}

// ---------------------------------------------------------------------------
// Read/write
// ---------------------------------------------------------------------------

#[test]
fn test_storage_is_snake_case() {
    let model = user(&Arc::new(CaseConfig::default()));
    assert_eq!(
        model.store().keys().collect::<Vec<_>>(),
        vec!["id", "first_name", "last_login_at", "is_email_verified"]
    );
}

#[test]
fn test_reads_accept_either_case() {
    let model = user(&Arc::new(CaseConfig::default()));
    assert_eq!(model.get_attribute("firstName").unwrap(), Some(&json!("Ada")));
    assert_eq!(model.get_attribute("first_name").unwrap(), Some(&json!("Ada")));
    assert_eq!(model.get_attribute("isEmailVerified").unwrap(), Some(&json!(true)));
    assert!(model.has_attribute("lastLoginAt").unwrap());
    assert!(!model.has_attribute("deletedAt").unwrap());
}

#[test]
fn test_write_through_either_case_overwrites_same_slot() {
    let mut model = user(&Arc::new(CaseConfig::default()));
    model.set_attribute("first_name", json!("Grace")).unwrap();
    model.set_attribute("firstName", json!("Ada")).unwrap();

    assert_eq!(model.store().len(), 4);
    assert_eq!(model.get_attribute("first_name").unwrap(), Some(&json!("Ada")));
}

#[test]
fn test_store_errors_pass_through_unchanged() {
    let mut model = CaseAdapter::new(ReadOnlyStore::default(), Arc::new(CaseConfig::default()));

    assert_eq!(
        model.set_attribute("firstName", json!("Ada")).unwrap_err(),
        ReadOnly("first_name".into())
    );
    assert_eq!(model.export_attributes().unwrap_err(), ReadOnly("*".into()));
    assert_eq!(model.get_attribute("firstName").unwrap(), None);
}

#[test]
fn test_fill_stops_at_first_error() {
    let mut model = CaseAdapter::new(ReadOnlyStore::default(), Arc::new(CaseConfig::default()));
    let err = model
        .fill([("firstName", json!("Ada")), ("lastName", json!("Lovelace"))])
        .unwrap_err();
    assert_eq!(err, ReadOnly("first_name".into()));
}

#[test]
fn test_strict_store_reports_normalized_key() {
    let model = CaseAdapter::new(AttributeMap::<Value>::strict(), Arc::new(CaseConfig::default()));
    let err = model.get_attribute("deletedAt").unwrap_err();
    assert!(matches!(err, ModelError::MissingAttribute(ref k) if k == "deleted_at"));
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[test]
fn test_export_camel_case() {
    let model = user(&Arc::new(CaseConfig::new(true)));
    let exported = model.export_attributes().unwrap();
    assert_eq!(
        exported.keys().collect::<Vec<_>>(),
        vec!["id", "firstName", "lastLoginAt", "isEmailVerified"]
    );
    assert_eq!(exported["lastLoginAt"], json!("2024-01-15T10:30:00Z"));
}

#[test]
fn test_export_without_camel_case() {
    let model = user(&Arc::new(CaseConfig::new(false)));
    let exported = model.export_attributes().unwrap();
    assert_eq!(
        exported.keys().collect::<Vec<_>>(),
        vec!["id", "first_name", "last_login_at", "is_email_verified"]
    );
}

#[test]
fn test_serialize_matches_export() {
    let model = user(&Arc::new(CaseConfig::default()));
    let value = serde_json::to_value(&model).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 1,
            "firstName": "Ada",
            "lastLoginAt": "2024-01-15T10:30:00Z",
            "isEmailVerified": true,
        })
    );

    let text = serde_json::to_string(&model).unwrap();
    assert!(text.starts_with(r#"{"id":1,"firstName":"Ada","#));
}

#[test]
fn test_serialize_surfaces_store_error() {
    let model = CaseAdapter::new(ReadOnlyStore::default(), Arc::new(CaseConfig::default()));
    let err = serde_json::to_string(&model).unwrap_err();
    assert!(err.to_string().contains("read-only attribute: *"));
}

// ---------------------------------------------------------------------------
// Parent deference
// ---------------------------------------------------------------------------

#[test]
fn test_nested_model_follows_parent() {
    let parent_config = Arc::new(CaseConfig::new(true));
    let parent = user(&parent_config);

    let mut address = CaseAdapter::new(AttributeMap::new(), Arc::new(CaseConfig::new(false)))
        .with_parent(parent.config());
    address.set_attribute("street_name", json!("Main St")).unwrap();

    let exported = address.export_attributes().unwrap();
    assert_eq!(exported.keys().collect::<Vec<_>>(), vec!["streetName"]);
}

#[test]
fn test_child_flag_wins_over_parent_false() {
    let parent_config = Arc::new(CaseConfig::new(false));
    let mut child = CaseAdapter::new(AttributeMap::new(), Arc::new(CaseConfig::new(true)))
        .with_parent(&parent_config);
    child.set_attribute("zip_code", json!("12345")).unwrap();

    let exported = child.export_attributes().unwrap();
    assert_eq!(exported.keys().collect::<Vec<_>>(), vec!["zipCode"]);
}

#[test]
fn test_config_from_file_drives_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user.yml");
    std::fs::write(&path, "enforce_camel_case: false\n").unwrap();

    let config = Arc::new(CaseConfig::load(&path).unwrap());
    let model = user(&config);
    assert!(!model.is_camel_case());
    assert!(model.export_attributes().unwrap().contains_key("first_name"));
}
