//! Nested model example.
//!
//! A child model with camelCase switched off still exports camelCase keys
//! while its parent asks for them, and falls back to its own flag once the
//! parent configuration is gone.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p casemodel-demos --example nested_models
//! ```

use std::sync::Arc;

use casemodel_core::{AttributeMap, CaseAdapter, CaseConfig, camel_case_enabled};
use serde_json::json;

fn main() {
    let order_config = Arc::new(CaseConfig::new(true));
    let mut order = CaseAdapter::new(AttributeMap::new(), Arc::clone(&order_config));
    order.set_attribute("orderNumber", json!("A-1001")).unwrap();

    let mut line = CaseAdapter::new(AttributeMap::new(), Arc::new(CaseConfig::new(false)))
        .with_parent(order.config());
    line.fill([("unit_price", json!(1999)), ("quantity", json!(2))])
        .unwrap();

    println!("order:      {}", serde_json::to_string(&order).unwrap());
    println!("order line: {}", serde_json::to_string(&line).unwrap());
    println!();

    println!("Decision table (own, parent) -> camelCase:");
    for own in [true, false] {
        for parent in [None, Some(true), Some(false)] {
            println!("  ({own:5}, {parent:?}) -> {}", camel_case_enabled(own, parent));
        }
    }
    println!();

    drop(order);
    drop(order_config);
    println!("after parent dropped: {}", serde_json::to_string(&line).unwrap());
}
