//! camelCase access over snake_case attribute storage.
//!
//! [`CaseAdapter`] decorates any [`AttributeStore`]. Keys passed to
//! [`set_attribute`](CaseAdapter::set_attribute) and
//! [`get_attribute`](CaseAdapter::get_attribute) are normalized to
//! snake_case before they reach the store, so callers may use either case.
//! [`export_attributes`](CaseAdapter::export_attributes) renames stored keys
//! to camelCase when the model (or its parent) asks for it.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use casemodel_core::*;
//!
//! let mut user = CaseAdapter::new(AttributeMap::new(), Arc::new(CaseConfig::default()));
//! user.set_attribute("firstName", "Ada").unwrap();
//! user.set_attribute("last_login_at", "2024-01-15").unwrap();
//!
//! assert_eq!(user.get_attribute("first_name").unwrap(), Some(&"Ada"));
//! assert_eq!(user.store().keys().collect::<Vec<_>>(), ["first_name", "last_login_at"]);
//!
//! let exported = user.export_attributes().unwrap();
//! assert_eq!(exported.keys().collect::<Vec<_>>(), ["firstName", "lastLoginAt"]);
//! ```

use std::sync::{Arc, Weak};

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::ser::{Error as _, Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

use crate::case::{to_camel_case, to_snake_case};
use crate::config::{CaseConfig, camel_case_enabled};
use crate::store::AttributeStore;

/// Case-translating decorator over an attribute store.
///
/// The configuration and optional parent link are fixed at construction.
/// The parent is held weakly and only consulted for the camelCase decision;
/// once it is dropped the adapter behaves as if it had none.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use casemodel_core::*;
///
/// let parent = Arc::new(CaseConfig::new(true));
/// let mut address = CaseAdapter::new(AttributeMap::new(), Arc::new(CaseConfig::new(false)))
///     .with_parent(&parent);
/// address.set_attribute("streetName", "Main St").unwrap();
///
/// assert!(address.is_camel_case());
/// assert!(address.export_attributes().unwrap().contains_key("streetName"));
/// ```
#[derive(Debug)]
pub struct CaseAdapter<S> {
    store: S,
    config: Arc<CaseConfig>,
    parent: Option<Weak<CaseConfig>>,
}

impl<S: AttributeStore> CaseAdapter<S> {
    /// Wraps `store` with the given configuration and no parent.
    pub fn new(store: S, config: Arc<CaseConfig>) -> Self {
        Self {
            store,
            config,
            parent: None,
        }
    }

    /// Links this model to the configuration of an enclosing model.
    pub fn with_parent(mut self, parent: &Arc<CaseConfig>) -> Self {
        self.parent = Some(Arc::downgrade(parent));
        self
    }

    /// Returns this model's configuration, e.g. to link nested models to it.
    pub fn config(&self) -> &Arc<CaseConfig> {
        &self.config
    }

    /// Returns the wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwraps the adapter, returning the store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Returns `true` if exported keys are camelCased.
    pub fn is_camel_case(&self) -> bool {
        let parent = self
            .parent
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|p| p.enforce_camel_case);
        camel_case_enabled(self.config.enforce_camel_case, parent)
    }

    /// Returns the storage key for `key`.
    ///
    /// Always snake_case, whatever the configuration says.
    pub fn true_key(&self, key: &str) -> String {
        to_snake_case(key)
    }

    /// Returns the exported name for a stored key.
    ///
    /// [`export_attributes`](Self::export_attributes) renames keys the same
    /// way.
    pub fn true_key_name(&self, key: &str) -> String {
        export_key(key, self.is_camel_case())
    }

    /// Stores `value` under the snake_case form of `key`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the store reports.
    pub fn set_attribute(&mut self, key: &str, value: S::Value) -> Result<(), S::Error> {
        let true_key = self.true_key(key);
        if true_key != key {
            debug!(key, true_key = %true_key, "Normalized attribute key for write");
        }
        self.store.write_attribute(true_key, value)
    }

    /// Reads the value stored under the snake_case form of `key`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the store reports, including unknown-key errors
    /// from strict stores.
    pub fn get_attribute(&self, key: &str) -> Result<Option<&S::Value>, S::Error> {
        let true_key = self.true_key(key);
        if true_key != key {
            debug!(key, true_key = %true_key, "Normalized attribute key for read");
        }
        self.store.read_attribute(&true_key)
    }

    /// Returns `true` if the store holds a value for `key`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the store reports.
    pub fn has_attribute(&self, key: &str) -> Result<bool, S::Error> {
        Ok(self.get_attribute(key)?.is_some())
    }

    /// Sets several attributes at once, stopping at the first store error.
    ///
    /// # Errors
    ///
    /// Propagates whatever the store reports; pairs before the failing one
    /// remain written.
    pub fn fill<K, I>(&mut self, attributes: I) -> Result<(), S::Error>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, S::Value)>,
    {
        for (key, value) in attributes {
            self.set_attribute(key.as_ref(), value)?;
        }
        Ok(())
    }

    /// Exports every attribute, renaming keys to camelCase when enabled.
    ///
    /// Values and order are kept. If two stored keys map to the same
    /// exported key, the later value wins at the earlier position.
    ///
    /// # Errors
    ///
    /// Propagates whatever the store reports.
    pub fn export_attributes(&self) -> Result<IndexMap<String, S::Value>, S::Error> {
        let attributes = self.store.export_all_attributes()?;
        let camel = self.is_camel_case();
        debug!(count = attributes.len(), camel_case = camel, "Exporting attributes");

        let mut converted = IndexMap::with_capacity(attributes.len());
        for (key, value) in attributes {
            let name = export_key(&key, camel);
            match converted.entry(name) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                Entry::Occupied(mut slot) => {
                    warn!(key = %key, exported = %slot.key(), "Attribute keys collide on export");
                    slot.insert(value);
                }
            }
        }
        Ok(converted)
    }
}

fn export_key(key: &str, camel: bool) -> String {
    if camel {
        to_camel_case(key)
    } else {
        key.to_string()
    }
}

impl<S> Serialize for CaseAdapter<S>
where
    S: AttributeStore,
    S::Value: Serialize,
    S::Error: std::fmt::Display,
{
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        let attributes = self.export_attributes().map_err(Z::Error::custom)?;
        let mut map = serializer.serialize_map(Some(attributes.len()))?;
        for (key, value) in &attributes {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
