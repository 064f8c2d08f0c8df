//! The combobox interaction model.
//!
//! A [`Model`] is a plain value: every call to [`update`](crate::update)
//! returns a new one and never mutates the previous model. Callers store the
//! latest model and hand it back on the next event.
//!
//! The interaction phase is a tagged union ([`Phase`]) rather than a set of
//! booleans, so combinations like "closed but highlighted" cannot be
//! represented.

use crate::msg::MsgType;

// ============================================================================
// Modes
// ============================================================================

/// Reading direction of the selected-item chip list in multi-select mode.
///
/// Determines which horizontal arrow key moves focus from the input into the
/// chip list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SelectedItemListDirection {
    /// Chips follow the input from left to right; `ArrowRight` enters them.
    #[default]
    LeftToRight,
    /// Chips follow the input from right to left; `ArrowLeft` enters them.
    RightToLeft,
}

/// Selection cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum SelectMode {
    /// At most one item is selected.
    #[default]
    SingleSelect,
    /// Any number of items are selected and shown as chips.
    MultiSelect {
        /// Layout direction of the chip list.
        selected_item_list_direction: SelectedItemListDirection,
    },
}

impl SelectMode {
    /// Multi-select with left-to-right chips.
    pub fn multi() -> Self {
        Self::MultiSelect {
            selected_item_list_direction: SelectedItemListDirection::LeftToRight,
        }
    }

    /// Multi-select with chips in the given direction.
    pub fn multi_with_direction(direction: SelectedItemListDirection) -> Self {
        Self::MultiSelect {
            selected_item_list_direction: direction,
        }
    }

    /// Check for single-select mode.
    pub fn is_single_select(&self) -> bool {
        matches!(self, Self::SingleSelect)
    }

    /// Check for multi-select mode.
    pub fn is_multi_select(&self) -> bool {
        matches!(self, Self::MultiSelect { .. })
    }

    /// The chip list direction, if in multi-select mode.
    pub fn selected_item_list_direction(&self) -> Option<SelectedItemListDirection> {
        match self {
            Self::SingleSelect => None,
            Self::MultiSelect {
                selected_item_list_direction,
            } => Some(*selected_item_list_direction),
        }
    }
}

/// Whether typing filters the items or the input mirrors the selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum InputMode {
    /// The input always shows the selection; typed text is ignored.
    SelectOnly,
    /// Typed text is kept and used to filter the items.
    SearchMode {
        /// The live text of the input.
        input_value: String,
    },
}

impl InputMode {
    /// Search mode with the given text.
    pub fn search(input_value: impl Into<String>) -> Self {
        Self::SearchMode {
            input_value: input_value.into(),
        }
    }

    /// Check for search mode.
    pub fn is_search_mode(&self) -> bool {
        matches!(self, Self::SearchMode { .. })
    }

    /// The search text, if in search mode.
    pub fn input_value(&self) -> Option<&str> {
        match self {
            Self::SelectOnly => None,
            Self::SearchMode { input_value } => Some(input_value),
        }
    }
}

impl Default for InputMode {
    fn default() -> Self {
        Self::search("")
    }
}

// ============================================================================
// Phase
// ============================================================================

/// The interaction phase of a combobox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum Phase {
    /// Input not focused, dropdown closed.
    #[default]
    Blurred,
    /// Input focused, dropdown closed.
    #[cfg_attr(feature = "serde", serde(rename = "focused__closed"))]
    FocusedClosed,
    /// Input focused, dropdown open, nothing highlighted.
    #[cfg_attr(feature = "serde", serde(rename = "focused__opened"))]
    FocusedOpened,
    /// Dropdown open with one visible item highlighted.
    #[cfg_attr(feature = "serde", serde(rename = "focused__opened__highlighted"))]
    FocusedOpenedHighlighted {
        /// Index into the visible items.
        highlight_index: usize,
    },
    /// Keyboard focus is on a selected-item chip.
    SelectedItemHighlighted {
        /// Index into the selected items.
        focused_index: usize,
    },
}

impl Phase {
    /// The phase's canonical name.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Blurred => "blurred",
            Self::FocusedClosed => "focused__closed",
            Self::FocusedOpened => "focused__opened",
            Self::FocusedOpenedHighlighted { .. } => "focused__opened__highlighted",
            Self::SelectedItemHighlighted { .. } => "selected-item-highlighted",
        }
    }

    /// Whether the dropdown is open.
    pub fn is_opened(&self) -> bool {
        matches!(self, Self::FocusedOpened | Self::FocusedOpenedHighlighted { .. })
    }

    /// Whether the text input holds focus.
    pub fn is_input_focused(&self) -> bool {
        matches!(
            self,
            Self::FocusedClosed | Self::FocusedOpened | Self::FocusedOpenedHighlighted { .. }
        )
    }

    /// Whether the widget holds focus at all (input or chip).
    pub fn is_focused(&self) -> bool {
        !matches!(self, Self::Blurred)
    }

    /// The highlight index, if an item is highlighted.
    pub fn highlight_index(&self) -> Option<usize> {
        match self {
            Self::FocusedOpenedHighlighted { highlight_index } => Some(*highlight_index),
            _ => None,
        }
    }

    /// The focused chip index, if a chip is focused.
    pub fn focused_index(&self) -> Option<usize> {
        match self {
            Self::SelectedItemHighlighted { focused_index } => Some(*focused_index),
            _ => None,
        }
    }
}

// ============================================================================
// Model
// ============================================================================

/// The full interaction state of one combobox.
///
/// Fields are read through accessors; all changes go through
/// [`update`](crate::update) so the invariants hold:
///
/// - single-select models hold at most one selected item
/// - a chip focus index always points into `selected_items`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Model<T> {
    pub(crate) all_items: Vec<T>,
    pub(crate) selected_items: Vec<T>,
    pub(crate) select_mode: SelectMode,
    pub(crate) input_mode: InputMode,
    pub(crate) skip_once: Vec<MsgType>,
    pub(crate) phase: Phase,
}

impl<T> Model<T> {
    /// Create a blurred model with no selection over the given items.
    pub fn new(all_items: Vec<T>) -> Self {
        Self {
            all_items,
            selected_items: Vec::new(),
            select_mode: SelectMode::default(),
            input_mode: InputMode::default(),
            skip_once: Vec::new(),
            phase: Phase::Blurred,
        }
    }

    /// Set the select mode using builder pattern.
    ///
    /// Switching to single-select keeps only the first selected item.
    pub fn with_select_mode(mut self, select_mode: SelectMode) -> Self {
        self.select_mode = select_mode;
        if select_mode.is_single_select() {
            self.selected_items.truncate(1);
        }
        self
    }

    /// Set the input mode using builder pattern.
    pub fn with_input_mode(mut self, input_mode: InputMode) -> Self {
        self.input_mode = input_mode;
        self
    }

    /// Set the initial selection using builder pattern.
    ///
    /// In single-select mode only the first item is kept.
    pub fn with_selected_items(mut self, selected_items: Vec<T>) -> Self {
        self.selected_items = selected_items;
        if self.select_mode.is_single_select() {
            self.selected_items.truncate(1);
        }
        self
    }

    /// All candidate items, in order.
    pub fn all_items(&self) -> &[T] {
        &self.all_items
    }

    /// The selected items, oldest first.
    pub fn selected_items(&self) -> &[T] {
        &self.selected_items
    }

    /// The select mode.
    pub fn select_mode(&self) -> SelectMode {
        self.select_mode
    }

    /// The input mode.
    pub fn input_mode(&self) -> &InputMode {
        &self.input_mode
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Event types that will be discarded on their next occurrence.
    pub fn skip_once(&self) -> &[MsgType] {
        &self.skip_once
    }

    /// The live search text, if in search mode.
    pub fn search_value(&self) -> Option<&str> {
        self.input_mode.input_value()
    }

    /// Whether anything is selected.
    pub fn has_selection(&self) -> bool {
        !self.selected_items.is_empty()
    }

    /// Whether the search text is empty (always true in select-only mode).
    pub(crate) fn is_search_empty(&self) -> bool {
        self.search_value().is_none_or(str::is_empty)
    }

    pub(crate) fn set_search_value(&mut self, text: String) {
        if let InputMode::SearchMode { input_value } = &mut self.input_mode {
            *input_value = text;
        }
    }
}

impl<T> Default for Model<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Create the initial model for a combobox.
///
/// Shorthand for [`Model::new`].
pub fn init<T>(all_items: Vec<T>) -> Model<T> {
    Model::new(all_items)
}
