//! Accessibility support for comboboxes.
//!
//! The bundles here are pure functions of `(config, model)` that produce the
//! ARIA attributes for each element of the combobox pattern. A rendering
//! layer spreads them onto its own elements; the state machine never sees
//! them.
//!
//! Element ids are derived from [`Config::namespace`]:
//!
//! | Element | Id |
//! |---|---|
//! | label | `{namespace}-label` |
//! | input | `{namespace}-input` |
//! | listbox | `{namespace}-listbox` |
//! | helper text | `{namespace}-helper-text` |
//! | item | `{namespace}-item-{id}` |
//! | selected-item chip | `{namespace}-selected-item-{id}` |
//!
//! With the default `accessibility` feature, [`node`] builds AccessKit nodes
//! for the same elements.
//!
//! # Example
//!
//! ```
//! use lattice_combobox::accessibility::{aria_input, aria_listbox};
//! use lattice_combobox::{init, Config, ItemId};
//!
//! let config = Config::<&'static str>::builder(|s| ItemId::from(*s), |s| s.to_string())
//!     .namespace("fruit")
//!     .build()
//!     .unwrap();
//! let model = init(vec!["Apple", "Banana"]);
//!
//! let input = aria_input(&config, &model);
//! assert_eq!(input.get("role"), Some("combobox"));
//! assert_eq!(input.get("aria-controls"), Some("fruit-listbox"));
//! assert_eq!(input.get("aria-expanded"), Some("false"));
//!
//! assert_eq!(aria_listbox(&config, &model).get("aria-labelledby"), Some("fruit-label"));
//! ```

#[cfg(feature = "accessibility")]
pub mod node;
mod role;

pub use role::AccessibleRole;

use std::fmt;

use lattice_combobox_core::selectors::{
    is_item_selected, is_selected_item_focused, to_highlighted_item,
};
use lattice_combobox_core::{Config, Model};

// ============================================================================
// Element Ids
// ============================================================================

/// Id of the label element.
pub fn label_id<T>(config: &Config<T>) -> String {
    format!("{}-label", config.namespace())
}

/// Id of the text input.
pub fn input_id<T>(config: &Config<T>) -> String {
    format!("{}-input", config.namespace())
}

/// Id of the listbox.
pub fn listbox_id<T>(config: &Config<T>) -> String {
    format!("{}-listbox", config.namespace())
}

/// Id of the helper text.
pub fn helper_text_id<T>(config: &Config<T>) -> String {
    format!("{}-helper-text", config.namespace())
}

/// Id of the option element for an item.
pub fn item_id<T>(config: &Config<T>, item: &T) -> String {
    format!("{}-item-{}", config.namespace(), config.item_id(item))
}

/// Id of the chip element for a selected item.
pub fn selected_item_id<T>(config: &Config<T>, item: &T) -> String {
    format!("{}-selected-item-{}", config.namespace(), config.item_id(item))
}

// ============================================================================
// Attribute Bundles
// ============================================================================

/// An ordered set of ARIA attributes for one element.
///
/// Keys are unique; inserting an existing key replaces its value in place.
/// With the `serde` feature this serializes as a string map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AriaAttributes {
    entries: Vec<(&'static str, String)>,
}

impl AriaAttributes {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute.
    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Set an attribute using builder pattern.
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get an attribute value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Check whether an attribute is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Get the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the bundle is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for AriaAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}=\"{value}\"")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AriaAttributes {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Attributes for the label element.
pub fn aria_label<T>(config: &Config<T>) -> AriaAttributes {
    AriaAttributes::new()
        .with("id", label_id(config))
        .with("for", input_id(config))
}

/// Attributes for the text input.
///
/// `aria-activedescendant` is present only while a visible item is
/// highlighted.
pub fn aria_input<T: Clone>(config: &Config<T>, model: &Model<T>) -> AriaAttributes {
    let autocomplete = if model.input_mode().is_search_mode() { "list" } else { "none" };
    let mut attrs = AriaAttributes::new()
        .with("id", input_id(config))
        .with("role", AccessibleRole::ComboBox.aria_role().unwrap_or_default())
        .with("aria-autocomplete", autocomplete)
        .with("aria-controls", listbox_id(config))
        .with("aria-haspopup", "listbox")
        .with("aria-expanded", bool_attr(model.phase().is_opened()))
        .with("aria-describedby", helper_text_id(config));

    if let Some(item) = to_highlighted_item(config, model) {
        attrs.insert("aria-activedescendant", item_id(config, &item));
    }
    attrs
}

/// Attributes for the listbox.
pub fn aria_listbox<T>(config: &Config<T>, model: &Model<T>) -> AriaAttributes {
    let mut attrs = AriaAttributes::new()
        .with("id", listbox_id(config))
        .with("role", AccessibleRole::ListBox.aria_role().unwrap_or_default())
        .with("aria-labelledby", label_id(config));
    if model.select_mode().is_multi_select() {
        attrs.insert("aria-multiselectable", "true");
    }
    attrs
}

/// Attributes for the option element of one item.
///
/// `aria-selected` is present only on selected items.
pub fn aria_item<T>(config: &Config<T>, model: &Model<T>, item: &T) -> AriaAttributes {
    let mut attrs = AriaAttributes::new()
        .with("id", item_id(config, item))
        .with("role", AccessibleRole::Option.aria_role().unwrap_or_default());
    if is_item_selected(config, model, item) {
        attrs.insert("aria-selected", "true");
    }
    attrs
}

/// Attributes for the chip of one selected item.
///
/// Chips use a roving tab index: only the focused chip is in the tab order.
pub fn aria_selected_item<T>(config: &Config<T>, model: &Model<T>, item: &T) -> AriaAttributes {
    let tab_index = if is_selected_item_focused(config, model, item) { "0" } else { "-1" };
    AriaAttributes::new()
        .with("id", selected_item_id(config, item))
        .with("role", AccessibleRole::SelectedItem.aria_role().unwrap_or_default())
        .with("tabindex", tab_index)
}

/// Attributes for the helper text.
pub fn aria_helper_text<T>(config: &Config<T>) -> AriaAttributes {
    AriaAttributes::new().with("id", helper_text_id(config))
}
