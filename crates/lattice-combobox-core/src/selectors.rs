//! Read-only projections of a model.
//!
//! Selectors are pure functions recomputed on demand; nothing here is cached.
//! Out-of-range highlight or chip indexes read as "nothing highlighted" or
//! "nothing focused" rather than faulting.

use std::fmt;

use crate::config::Config;
use crate::logging::targets;
use crate::model::{InputMode, Model, Phase};

/// Display status of one item in the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ItemStatus {
    Unselected,
    Highlighted,
    Selected,
    SelectedAndHighlighted,
}

impl ItemStatus {
    /// The kebab-case name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unselected => "unselected",
            Self::Highlighted => "highlighted",
            Self::Selected => "selected",
            Self::SelectedAndHighlighted => "selected-and-highlighted",
        }
    }

    /// Whether the item is highlighted.
    pub fn is_highlighted(self) -> bool {
        matches!(self, Self::Highlighted | Self::SelectedAndHighlighted)
    }

    /// Whether the item is selected.
    pub fn is_selected(self) -> bool {
        matches!(self, Self::Selected | Self::SelectedAndHighlighted)
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Items
// ============================================================================

/// The items eligible for display, in order.
///
/// Select-only mode shows every item; search mode runs the configured filter.
pub fn to_visible_items<T: Clone>(config: &Config<T>, model: &Model<T>) -> Vec<T> {
    match model.input_mode() {
        InputMode::SelectOnly => model.all_items().to_vec(),
        InputMode::SearchMode { .. } => {
            let visible = config.filter(model);
            tracing::trace!(
                target: targets::SELECTORS,
                visible = visible.len(),
                total = model.all_items().len(),
                "filtered items"
            );
            visible
        }
    }
}

/// The first selected item.
pub fn to_selected_item<T>(model: &Model<T>) -> Option<&T> {
    model.selected_items().first()
}

/// All selected items, oldest first.
pub fn to_selected_items<T>(model: &Model<T>) -> &[T] {
    model.selected_items()
}

/// The text the input shows for the current selection.
///
/// Single-select shows the selected item's text, falling back to the empty
/// item's text when one exists in `all_items`. Multi-select shows chips
/// instead, so the text is always empty.
pub fn to_selected_items_input_value<T>(config: &Config<T>, model: &Model<T>) -> String {
    if model.select_mode().is_multi_select() {
        return String::new();
    }
    if let Some(item) = model.selected_items().first() {
        return config.item_input_value(item);
    }
    model
        .all_items()
        .iter()
        .find(|item| config.is_empty_item(item))
        .map(|item| config.item_input_value(item))
        .unwrap_or_default()
}

/// The text the input should currently show.
///
/// The live search text while focused in search mode; the selection's display
/// text otherwise.
pub fn to_current_input_value<T>(config: &Config<T>, model: &Model<T>) -> String {
    match (model.input_mode(), model.phase()) {
        (InputMode::SearchMode { input_value }, phase) if phase != Phase::Blurred => input_value.clone(),
        _ => to_selected_items_input_value(config, model),
    }
}

/// The live search text, if in search mode.
pub fn to_search_value<T>(model: &Model<T>) -> Option<&str> {
    model.search_value()
}

// ============================================================================
// Highlight
// ============================================================================

/// The highlight index, if it points at a visible item.
pub fn to_highlighted_index<T: Clone>(config: &Config<T>, model: &Model<T>) -> Option<usize> {
    let index = model.phase().highlight_index()?;
    (index < to_visible_items(config, model).len()).then_some(index)
}

/// The highlighted visible item.
pub fn to_highlighted_item<T: Clone>(config: &Config<T>, model: &Model<T>) -> Option<T> {
    let index = model.phase().highlight_index()?;
    to_visible_items(config, model).into_iter().nth(index)
}

/// Check whether an item is the highlighted one.
pub fn is_item_highlighted<T: Clone>(config: &Config<T>, model: &Model<T>, item: &T) -> bool {
    to_highlighted_item(config, model).is_some_and(|highlighted| config.is_same_item(&highlighted, item))
}

/// Check whether an item is selected.
pub fn is_item_selected<T>(config: &Config<T>, model: &Model<T>, item: &T) -> bool {
    config.contains(model.selected_items(), item)
}

/// Check whether an item is both selected and highlighted.
pub fn is_item_selected_and_highlighted<T: Clone>(config: &Config<T>, model: &Model<T>, item: &T) -> bool {
    is_item_selected(config, model, item) && is_item_highlighted(config, model, item)
}

/// Get the display status of an item.
pub fn to_item_status<T: Clone>(config: &Config<T>, model: &Model<T>, item: &T) -> ItemStatus {
    match (
        is_item_selected(config, model, item),
        is_item_highlighted(config, model, item),
    ) {
        (true, true) => ItemStatus::SelectedAndHighlighted,
        (true, false) => ItemStatus::Selected,
        (false, true) => ItemStatus::Highlighted,
        (false, false) => ItemStatus::Unselected,
    }
}

// ============================================================================
// Chips
// ============================================================================

/// The selected item whose chip holds focus.
pub fn to_focused_selected_item<T>(model: &Model<T>) -> Option<&T> {
    let index = model.phase().focused_index()?;
    model.selected_items().get(index)
}

/// Check whether the chip for `item` holds focus.
pub fn is_selected_item_focused<T>(config: &Config<T>, model: &Model<T>, item: &T) -> bool {
    to_focused_selected_item(model).is_some_and(|focused| config.is_same_item(focused, item))
}

// ============================================================================
// Phase predicates
// ============================================================================

/// Whether the dropdown is open.
pub fn is_opened<T>(model: &Model<T>) -> bool {
    model.phase().is_opened()
}

/// Whether the input or a chip holds focus.
pub fn is_focused<T>(model: &Model<T>) -> bool {
    model.phase().is_focused()
}

/// Whether nothing in the widget holds focus.
pub fn is_blurred<T>(model: &Model<T>) -> bool {
    model.phase() == Phase::Blurred
}

/// Whether anything is selected.
pub fn is_selected<T>(model: &Model<T>) -> bool {
    model.has_selection()
}
