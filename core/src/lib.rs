//! camelCase attribute access for snake_case model storage.
//!
//! This crate lets callers read and write model attributes by camelCase
//! names while the model keeps storing them under snake_case names:
//!
//! - [`CaseAdapter`] — decorator that normalizes keys on read/write and
//!   camelCases them on export.
//! - [`AttributeStore`] — the storage contract the adapter wraps, with
//!   [`AttributeMap`] as an insertion-ordered in-memory implementation.
//! - [`CaseConfig`] — the `enforce_camel_case` flag, loadable from YAML;
//!   [`camel_case_enabled`] combines a model's flag with its parent's.
//! - [`to_camel_case`] / [`to_snake_case`] — the key conversions.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use casemodel_core::*;
//!
//! let user_config = Arc::new(CaseConfig::default());
//! let mut user = CaseAdapter::new(AttributeMap::new(), Arc::clone(&user_config));
//! user.fill([("firstName", "Ada"), ("last_name", "Lovelace")]).unwrap();
//!
//! // A nested model without its own camelCase flag follows its parent.
//! let mut profile = CaseAdapter::new(AttributeMap::new(), Arc::new(CaseConfig::new(false)))
//!     .with_parent(&user_config);
//! profile.set_attribute("favourite_language", "Rust").unwrap();
//!
//! assert_eq!(user.get_attribute("first_name").unwrap(), Some(&"Ada"));
//! assert!(profile.export_attributes().unwrap().contains_key("favouriteLanguage"));
//! ```

mod adapter;
mod case;
mod config;
mod error;
mod store;

pub use adapter::CaseAdapter;
pub use case::{to_camel_case, to_snake_case};
pub use config::{CaseConfig, camel_case_enabled};
pub use error::{ModelError, Result};
pub use store::{AttributeMap, AttributeStore};
