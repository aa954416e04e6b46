//! camelCase model example.
//!
//! Writes attributes through both naming conventions, shows the snake_case
//! storage underneath, and prints the camelCase export as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p casemodel-demos --example camel_case_model
//! ```

use std::sync::Arc;

use casemodel_core::{AttributeMap, CaseAdapter, CaseConfig};
use serde_json::json;

fn main() {
    let mut user = CaseAdapter::new(AttributeMap::new(), Arc::new(CaseConfig::default()));

    // Mixed-case input lands under snake_case keys
    user.fill([
        ("id", json!(42)),
        ("firstName", json!("Ada")),
        ("last_name", json!("Lovelace")),
        ("lastLoginAt", json!("2024-01-15T10:30:00Z")),
    ])
    .unwrap();

    println!("Stored keys:");
    for key in user.store().keys() {
        println!("  {key}");
    }
    println!();

    // Reads accept either convention
    let by_camel = user.get_attribute("lastName").unwrap();
    let by_snake = user.get_attribute("last_name").unwrap();
    println!("lastName  -> {by_camel:?}");
    println!("last_name -> {by_snake:?}");
    println!();

    println!("Exported:");
    println!("{}", serde_json::to_string_pretty(&user).unwrap());

    // Same data, camelCase switched off
    let plain = CaseAdapter::new(user.into_inner(), Arc::new(CaseConfig::new(false)));
    println!();
    println!("Exported without camelCase:");
    println!("{}", serde_json::to_string_pretty(&plain).unwrap());
}
