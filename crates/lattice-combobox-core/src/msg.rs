//! Events accepted by the combobox state machine.

use std::fmt;

use crate::model::{InputMode, SelectMode};

/// Direction of a vertical arrow key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum VerticalDirection {
    /// `ArrowUp`.
    Up,
    /// `ArrowDown`.
    Down,
}

impl VerticalDirection {
    /// The index step for this direction.
    pub fn delta(self) -> isize {
        match self {
            Self::Up => -1,
            Self::Down => 1,
        }
    }
}

/// Direction of a horizontal arrow key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HorizontalDirection {
    /// `ArrowLeft`.
    Left,
    /// `ArrowRight`.
    Right,
}

/// A user interaction or caller-driven setter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "payload", rename_all = "kebab-case"))]
pub enum Msg<T> {
    /// The input gained focus.
    FocusedInput,
    /// The input lost focus.
    BlurredInput,
    /// The input was clicked or tapped.
    PressedInput,
    /// The input text changed.
    InputtedValue(String),
    /// An item in the dropdown was clicked.
    PressedItem(T),
    /// The pointer moved over the visible item at this index.
    HoveredOverItem(usize),
    /// `ArrowUp` or `ArrowDown`.
    PressedVerticalArrowKey(VerticalDirection),
    /// `ArrowLeft` or `ArrowRight`.
    PressedHorizontalArrowKey(HorizontalDirection),
    /// `Enter`.
    PressedEnterKey,
    /// `Escape`.
    PressedEscapeKey,
    /// `Backspace`.
    PressedBackspaceKey,
    /// Any other key, by its raw name.
    PressedKey(String),
    /// The remove button of a selected-item chip was clicked.
    PressedUnselectButton(T),
    /// The clear-all button was clicked.
    PressedUnselectAllButton,
    /// A selected-item chip gained focus.
    FocusedSelectedItem(T),
    /// A selected-item chip lost focus.
    BlurredSelectedItem(T),
    /// Replace the candidate items.
    SetAllItems(Vec<T>),
    /// Replace the selection.
    SetSelectedItems(Vec<T>),
    /// Replace the search text (search mode only).
    SetInputValue(String),
    /// Move the highlight (highlighted phase only).
    SetHighlightIndex(usize),
    /// Change the select and/or input mode.
    SetMode {
        /// New select mode, if changing.
        select_mode: Option<SelectMode>,
        /// New input mode, if changing.
        input_mode: Option<InputMode>,
    },
}

impl<T> Msg<T> {
    /// The payload-free tag of this message.
    pub fn msg_type(&self) -> MsgType {
        match self {
            Self::FocusedInput => MsgType::FocusedInput,
            Self::BlurredInput => MsgType::BlurredInput,
            Self::PressedInput => MsgType::PressedInput,
            Self::InputtedValue(_) => MsgType::InputtedValue,
            Self::PressedItem(_) => MsgType::PressedItem,
            Self::HoveredOverItem(_) => MsgType::HoveredOverItem,
            Self::PressedVerticalArrowKey(_) => MsgType::PressedVerticalArrowKey,
            Self::PressedHorizontalArrowKey(_) => MsgType::PressedHorizontalArrowKey,
            Self::PressedEnterKey => MsgType::PressedEnterKey,
            Self::PressedEscapeKey => MsgType::PressedEscapeKey,
            Self::PressedBackspaceKey => MsgType::PressedBackspaceKey,
            Self::PressedKey(_) => MsgType::PressedKey,
            Self::PressedUnselectButton(_) => MsgType::PressedUnselectButton,
            Self::PressedUnselectAllButton => MsgType::PressedUnselectAllButton,
            Self::FocusedSelectedItem(_) => MsgType::FocusedSelectedItem,
            Self::BlurredSelectedItem(_) => MsgType::BlurredSelectedItem,
            Self::SetAllItems(_) => MsgType::SetAllItems,
            Self::SetSelectedItems(_) => MsgType::SetSelectedItems,
            Self::SetInputValue(_) => MsgType::SetInputValue,
            Self::SetHighlightIndex(_) => MsgType::SetHighlightIndex,
            Self::SetMode { .. } => MsgType::SetMode,
        }
    }
}

/// The tag of a [`Msg`], used for suppression scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MsgType {
    FocusedInput,
    BlurredInput,
    PressedInput,
    InputtedValue,
    PressedItem,
    HoveredOverItem,
    PressedVerticalArrowKey,
    PressedHorizontalArrowKey,
    PressedEnterKey,
    PressedEscapeKey,
    PressedBackspaceKey,
    PressedKey,
    PressedUnselectButton,
    PressedUnselectAllButton,
    FocusedSelectedItem,
    BlurredSelectedItem,
    SetAllItems,
    SetSelectedItems,
    SetInputValue,
    SetHighlightIndex,
    SetMode,
}

impl MsgType {
    /// The kebab-case name of the event type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FocusedInput => "focused-input",
            Self::BlurredInput => "blurred-input",
            Self::PressedInput => "pressed-input",
            Self::InputtedValue => "inputted-value",
            Self::PressedItem => "pressed-item",
            Self::HoveredOverItem => "hovered-over-item",
            Self::PressedVerticalArrowKey => "pressed-vertical-arrow-key",
            Self::PressedHorizontalArrowKey => "pressed-horizontal-arrow-key",
            Self::PressedEnterKey => "pressed-enter-key",
            Self::PressedEscapeKey => "pressed-escape-key",
            Self::PressedBackspaceKey => "pressed-backspace-key",
            Self::PressedKey => "pressed-key",
            Self::PressedUnselectButton => "pressed-unselect-button",
            Self::PressedUnselectAllButton => "pressed-unselect-all-button",
            Self::FocusedSelectedItem => "focused-selected-item",
            Self::BlurredSelectedItem => "blurred-selected-item",
            Self::SetAllItems => "set-all-items",
            Self::SetSelectedItems => "set-selected-items",
            Self::SetInputValue => "set-input-value",
            Self::SetHighlightIndex => "set-highlight-index",
            Self::SetMode => "set-mode",
        }
    }
}

impl fmt::Display for MsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
