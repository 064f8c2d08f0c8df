//! AccessKit nodes for combobox elements.
//!
//! Hosts that publish an AccessKit tree can use these instead of the ARIA
//! bundles. Node ids and tree structure are the host's concern.

use accesskit::Node;

use lattice_combobox_core::selectors::{is_item_selected, to_current_input_value};
use lattice_combobox_core::{Config, Model};

use super::AccessibleRole;

/// Build the node for the text input.
pub fn input_node<T>(config: &Config<T>, model: &Model<T>) -> Node {
    let mut node = Node::new(AccessibleRole::ComboBox.into());
    node.set_value(to_current_input_value(config, model));
    node.set_expanded(model.phase().is_opened());
    node
}

/// Build the node for the listbox.
pub fn listbox_node(label: Option<&str>) -> Node {
    let mut node = Node::new(AccessibleRole::ListBox.into());
    if let Some(label) = label {
        node.set_label(label);
    }
    node
}

/// Build the node for one item's option element.
pub fn item_node<T>(config: &Config<T>, model: &Model<T>, item: &T) -> Node {
    let mut node = Node::new(AccessibleRole::Option.into());
    node.set_label(config.item_input_value(item));
    node.set_selected(is_item_selected(config, model, item));
    node
}

/// Build the node for one selected-item chip.
pub fn selected_item_node<T>(config: &Config<T>, item: &T) -> Node {
    let mut node = Node::new(AccessibleRole::SelectedItem.into());
    node.set_label(config.item_input_value(item));
    node
}
