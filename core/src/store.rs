//! Attribute storage contract and an in-memory implementation.
//!
//! [`AttributeStore`] is the boundary between the case adapter and whatever
//! model it decorates. Stores key attributes by their snake_case names and
//! report them back in insertion order.

use indexmap::IndexMap;

use crate::error::{ModelError, Result};

/// Read/write/export primitives of a model's attribute storage.
///
/// Implementors use snake_case as their native key convention. Errors are
/// defined by the implementor and pass through the adapter untouched.
pub trait AttributeStore {
    /// Type of attribute values.
    type Value;
    /// Failure reported by the store.
    type Error;

    /// Returns the value stored under `key`, or `None` if the store uses a
    /// missing sentinel for unknown keys.
    fn read_attribute(
        &self,
        key: &str,
    ) -> std::result::Result<Option<&Self::Value>, Self::Error>;

    /// Stores `value` under `key`.
    fn write_attribute(
        &mut self,
        key: String,
        value: Self::Value,
    ) -> std::result::Result<(), Self::Error>;

    /// Returns every attribute in insertion order.
    fn export_all_attributes(
        &self,
    ) -> std::result::Result<IndexMap<String, Self::Value>, Self::Error>;
}

/// Insertion-ordered in-memory attribute storage.
///
/// Lenient by default: reading an unknown key yields `Ok(None)`. A store
/// built with [`strict`](AttributeMap::strict) reports unknown keys as
/// [`ModelError::MissingAttribute`] instead. Overwriting a key keeps its
/// original position.
///
/// # Examples
///
/// ```
/// use casemodel_core::{AttributeMap, AttributeStore};
///
/// let mut attrs = AttributeMap::new();
/// attrs.write_attribute("first_name".into(), "Ada").unwrap();
/// assert_eq!(attrs.read_attribute("first_name").unwrap(), Some(&"Ada"));
/// assert_eq!(attrs.read_attribute("nickname").unwrap(), None);
///
/// let strict: AttributeMap<&str> = AttributeMap::strict();
/// assert!(strict.read_attribute("nickname").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeMap<V> {
    attributes: IndexMap<String, V>,
    strict: bool,
}

impl<V> AttributeMap<V> {
    /// Creates an empty, lenient store.
    pub fn new() -> Self {
        Self {
            attributes: IndexMap::new(),
            strict: false,
        }
    }

    /// Creates an empty store that rejects reads of unknown keys.
    pub fn strict() -> Self {
        Self {
            attributes: IndexMap::new(),
            strict: true,
        }
    }

    /// Returns `true` if unknown-key reads fail.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns the number of stored attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterates over stored keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }
}

impl<V> Default for AttributeMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for AttributeMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            strict: false,
        }
    }
}

impl<V: Clone> AttributeStore for AttributeMap<V> {
    type Value = V;
    type Error = ModelError;

    fn read_attribute(&self, key: &str) -> Result<Option<&V>> {
        match self.attributes.get(key) {
            Some(value) => Ok(Some(value)),
            None if self.strict => Err(ModelError::MissingAttribute(key.to_string())),
            None => Ok(None),
        }
    }

    fn write_attribute(&mut self, key: String, value: V) -> Result<()> {
        self.attributes.insert(key, value);
        Ok(())
    }

    fn export_all_attributes(&self) -> Result<IndexMap<String, V>> {
        Ok(self.attributes.clone())
    }
}
