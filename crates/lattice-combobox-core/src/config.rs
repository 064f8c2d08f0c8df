//! Caller-supplied configuration for a combobox.
//!
//! A [`Config`] is an immutable bundle of pure functions that tell the state
//! machine how to identify items, how to display them, and which of them are
//! visible for the current model. The state machine never inspects an item's
//! structure directly; it only goes through these functions.
//!
//! # Example
//!
//! ```
//! use lattice_combobox_core::{Config, ItemId};
//!
//! #[derive(Clone)]
//! struct Fruit {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! let config = Config::builder(
//!     |fruit: &Fruit| ItemId::from(fruit.id),
//!     |fruit: &Fruit| fruit.name.to_string(),
//! )
//! .namespace("fruit-picker")
//! .build()
//! .unwrap();
//!
//! assert_eq!(config.namespace(), "fruit-picker");
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::model::Model;

/// Namespace used when the caller does not provide one.
pub const DEFAULT_NAMESPACE: &str = "combobox";

// ============================================================================
// Item Identity
// ============================================================================

/// The identity of an item, as produced by [`Config::item_id`].
///
/// Two items are the same item when their ids are equal, regardless of how
/// the rest of their data compares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ItemId {
    /// A string identity.
    Str(String),
    /// A numeric identity.
    Int(i64),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ItemId {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ItemId {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

// ============================================================================
// Function Types
// ============================================================================

/// Extracts the identity of an item.
pub type ToItemId<T> = Arc<dyn Fn(&T) -> ItemId + Send + Sync>;

/// Extracts the text shown in the input for an item.
pub type ToItemInputValue<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Computes the ordered visible subsequence of `all_items` for a model.
pub type DeterministicFilter<T> = Arc<dyn Fn(&Model<T>) -> Vec<T> + Send + Sync>;

/// Identifies the sentinel "no selection" item.
pub type IsEmptyItem<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Case-insensitive substring filter over the model's search text.
///
/// Returns every item when the model is in select-only mode or the search
/// text is empty. Custom filters can delegate to this for the common case.
pub fn substring_filter<T, F>(model: &Model<T>, to_item_input_value: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    let query = model.search_value().unwrap_or_default().trim().to_lowercase();
    if query.is_empty() {
        return model.all_items().to_vec();
    }

    model
        .all_items()
        .iter()
        .filter(|item| to_item_input_value(item).to_lowercase().contains(&query))
        .cloned()
        .collect()
}

fn default_filter<T: Clone + 'static>(to_item_input_value: ToItemInputValue<T>) -> DeterministicFilter<T> {
    Arc::new(move |model: &Model<T>| substring_filter(model, |item| to_item_input_value(item)))
}

fn validate_namespace(namespace: &str) -> Result<()> {
    if namespace.is_empty() {
        return Err(Error::invalid_namespace(namespace, "namespace must not be empty"));
    }
    if namespace.chars().any(char::is_whitespace) {
        return Err(Error::invalid_namespace(namespace, "namespace must not contain whitespace"));
    }
    Ok(())
}

// ============================================================================
// Config
// ============================================================================

/// Immutable configuration for a combobox.
///
/// All functions must be pure and deterministic. `to_item_id` must produce
/// unique ids for distinct logical items; [`check_unique_ids`](Self::check_unique_ids)
/// can verify this during development. Nothing else is checked at runtime.
///
/// Cloning a `Config` is cheap: the functions are shared.
pub struct Config<T> {
    to_item_id: ToItemId<T>,
    to_item_input_value: ToItemInputValue<T>,
    deterministic_filter: DeterministicFilter<T>,
    is_empty_item: IsEmptyItem<T>,
    namespace: String,
}

impl<T: Clone + 'static> Config<T> {
    /// Create a configuration with the default filter, no empty item, and
    /// the default namespace.
    pub fn new<I, V>(to_item_id: I, to_item_input_value: V) -> Self
    where
        I: Fn(&T) -> ItemId + Send + Sync + 'static,
        V: Fn(&T) -> String + Send + Sync + 'static,
    {
        let to_item_input_value: ToItemInputValue<T> = Arc::new(to_item_input_value);
        Self {
            to_item_id: Arc::new(to_item_id),
            deterministic_filter: default_filter(to_item_input_value.clone()),
            to_item_input_value,
            is_empty_item: Arc::new(|_| false),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    /// Start building a configuration.
    pub fn builder<I, V>(to_item_id: I, to_item_input_value: V) -> ConfigBuilder<T>
    where
        I: Fn(&T) -> ItemId + Send + Sync + 'static,
        V: Fn(&T) -> String + Send + Sync + 'static,
    {
        ConfigBuilder {
            config: Self::new(to_item_id, to_item_input_value),
        }
    }
}

impl<T> Config<T> {
    /// Get the identity of an item.
    pub fn item_id(&self, item: &T) -> ItemId {
        (self.to_item_id)(item)
    }

    /// Get the input text for an item.
    pub fn item_input_value(&self, item: &T) -> String {
        (self.to_item_input_value)(item)
    }

    /// Run the visibility filter for a model.
    pub fn filter(&self, model: &Model<T>) -> Vec<T> {
        (self.deterministic_filter)(model)
    }

    /// Check whether an item is the "no selection" sentinel.
    pub fn is_empty_item(&self, item: &T) -> bool {
        (self.is_empty_item)(item)
    }

    /// Get the element id namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Check whether two items have the same identity.
    pub fn is_same_item(&self, a: &T, b: &T) -> bool {
        self.item_id(a) == self.item_id(b)
    }

    /// Find the position of an item (by identity) in a slice.
    pub fn position_of(&self, items: &[T], item: &T) -> Option<usize> {
        let id = self.item_id(item);
        items.iter().position(|candidate| self.item_id(candidate) == id)
    }

    /// Check whether a slice contains an item (by identity).
    pub fn contains(&self, items: &[T], item: &T) -> bool {
        self.position_of(items, item).is_some()
    }

    /// Verify that every item in the slice has a distinct id.
    pub fn check_unique_ids(&self, items: &[T]) -> Result<()> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in items {
            let id = self.item_id(item);
            if !seen.insert(id.clone()) {
                crate::combobox_warn!(%id, "duplicate item id");
                return Err(Error::DuplicateItemId(id));
            }
        }
        Ok(())
    }
}

impl<T> Clone for Config<T> {
    fn clone(&self) -> Self {
        Self {
            to_item_id: self.to_item_id.clone(),
            to_item_input_value: self.to_item_input_value.clone(),
            deterministic_filter: self.deterministic_filter.clone(),
            is_empty_item: self.is_empty_item.clone(),
            namespace: self.namespace.clone(),
        }
    }
}

impl<T> fmt::Debug for Config<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Config Builder
// ============================================================================

/// Builder for [`Config`].
pub struct ConfigBuilder<T> {
    config: Config<T>,
}

impl<T: Clone + 'static> ConfigBuilder<T> {
    /// Set the element id namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.namespace = namespace.into();
        self
    }

    /// Replace the default substring filter.
    pub fn deterministic_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Model<T>) -> Vec<T> + Send + Sync + 'static,
    {
        self.config.deterministic_filter = Arc::new(filter);
        self
    }

    /// Set the "no selection" sentinel predicate.
    pub fn is_empty_item<F>(mut self, is_empty_item: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.config.is_empty_item = Arc::new(is_empty_item);
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<Config<T>> {
        validate_namespace(&self.config.namespace)?;
        crate::combobox_debug!(namespace = %self.config.namespace, "built combobox config");
        Ok(self.config)
    }
}
