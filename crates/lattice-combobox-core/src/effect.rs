//! Side-effect requests emitted by [`update`](crate::update).
//!
//! Effects are requests, not actions: the state machine never touches a
//! rendering surface. The host executes them, in emission order, through an
//! [`EffectHandler`].
//!
//! # Example
//!
//! ```
//! use lattice_combobox_core::{run_effects, Effect, EffectCallbacks};
//!
//! let effects = vec![Effect::FocusInput, Effect::ScrollItemIntoView("apple")];
//!
//! let mut focused = false;
//! let mut scrolled = Vec::new();
//! let mut handler = EffectCallbacks::new()
//!     .on_focus_input(|| focused = true)
//!     .on_scroll_item_into_view(|item: &&str| scrolled.push(*item));
//! run_effects(&effects, &mut handler);
//! drop(handler);
//!
//! assert!(focused);
//! assert_eq!(scrolled, vec!["apple"]);
//! ```

use crate::config::Config;
use crate::signal::Signal;

/// A side-effect request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "item", rename_all = "kebab-case"))]
pub enum Effect<T> {
    /// Scroll the element for this item into view.
    ScrollItemIntoView(T),
    /// Move keyboard focus to the text input.
    FocusInput,
    /// Move keyboard focus to the chip for this selected item.
    FocusSelectedItem(T),
}

impl<T> Effect<T> {
    /// The kebab-case name of the effect.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::ScrollItemIntoView(_) => "scroll-item-into-view",
            Self::FocusInput => "focus-input",
            Self::FocusSelectedItem(_) => "focus-selected-item",
        }
    }

    /// The item this effect targets, if any.
    pub fn item(&self) -> Option<&T> {
        match self {
            Self::ScrollItemIntoView(item) | Self::FocusSelectedItem(item) => Some(item),
            Self::FocusInput => None,
        }
    }

    /// Whether this is a scroll request.
    pub fn is_scroll(&self) -> bool {
        matches!(self, Self::ScrollItemIntoView(_))
    }

    /// Compare two effects by tag and item identity.
    pub(crate) fn is_same_as(&self, other: &Self, config: &Config<T>) -> bool {
        if self.tag() != other.tag() {
            return false;
        }
        match (self.item(), other.item()) {
            (Some(a), Some(b)) => config.is_same_item(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

// ============================================================================
// Effect Handlers
// ============================================================================

/// Host-side executor for effects.
pub trait EffectHandler<T> {
    /// Scroll the element for `item` into view.
    fn scroll_item_into_view(&mut self, item: &T);

    /// Focus the text input.
    fn focus_input(&mut self);

    /// Focus the chip for the selected `item`.
    fn focus_selected_item(&mut self, item: &T);
}

/// Execute a batch of effects in emission order.
pub fn run_effects<T, H>(effects: &[Effect<T>], handler: &mut H)
where
    H: EffectHandler<T> + ?Sized,
{
    for effect in effects {
        match effect {
            Effect::ScrollItemIntoView(item) => handler.scroll_item_into_view(item),
            Effect::FocusInput => handler.focus_input(),
            Effect::FocusSelectedItem(item) => handler.focus_selected_item(item),
        }
    }
}

type ItemCallback<'a, T> = Box<dyn FnMut(&T) + 'a>;

/// An [`EffectHandler`] built from optional closures.
///
/// Effects without a registered callback are ignored.
pub struct EffectCallbacks<'a, T> {
    scroll_item_into_view: Option<ItemCallback<'a, T>>,
    focus_input: Option<Box<dyn FnMut() + 'a>>,
    focus_selected_item: Option<ItemCallback<'a, T>>,
}

impl<'a, T> EffectCallbacks<'a, T> {
    /// Create a handler with no callbacks.
    pub fn new() -> Self {
        Self {
            scroll_item_into_view: None,
            focus_input: None,
            focus_selected_item: None,
        }
    }

    /// Set the scroll callback.
    pub fn on_scroll_item_into_view(mut self, f: impl FnMut(&T) + 'a) -> Self {
        self.scroll_item_into_view = Some(Box::new(f));
        self
    }

    /// Set the input focus callback.
    pub fn on_focus_input(mut self, f: impl FnMut() + 'a) -> Self {
        self.focus_input = Some(Box::new(f));
        self
    }

    /// Set the chip focus callback.
    pub fn on_focus_selected_item(mut self, f: impl FnMut(&T) + 'a) -> Self {
        self.focus_selected_item = Some(Box::new(f));
        self
    }
}

impl<T> Default for EffectCallbacks<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EffectHandler<T> for EffectCallbacks<'_, T> {
    fn scroll_item_into_view(&mut self, item: &T) {
        if let Some(f) = &mut self.scroll_item_into_view {
            f(item);
        }
    }

    fn focus_input(&mut self) {
        if let Some(f) = &mut self.focus_input {
            f();
        }
    }

    fn focus_selected_item(&mut self, item: &T) {
        if let Some(f) = &mut self.focus_selected_item {
            f(item);
        }
    }
}

/// Signals emitted for each effect kind.
///
/// Connect host handlers to these once; pass `&mut &signals` to
/// [`run_effects`] to emit.
pub struct EffectSignals<T> {
    /// Emitted for [`Effect::ScrollItemIntoView`].
    pub scroll_item_into_view: Signal<T>,
    /// Emitted for [`Effect::FocusInput`].
    pub focus_input: Signal<()>,
    /// Emitted for [`Effect::FocusSelectedItem`].
    pub focus_selected_item: Signal<T>,
}

impl<T> EffectSignals<T> {
    /// Create signals with no connections.
    pub fn new() -> Self {
        Self {
            scroll_item_into_view: Signal::new(),
            focus_input: Signal::new(),
            focus_selected_item: Signal::new(),
        }
    }
}

impl<T> Default for EffectSignals<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> EffectHandler<T> for &EffectSignals<T> {
    fn scroll_item_into_view(&mut self, item: &T) {
        self.scroll_item_into_view.emit(item.clone());
    }

    fn focus_input(&mut self) {
        self.focus_input.emit(());
    }

    fn focus_selected_item(&mut self, item: &T) {
        self.focus_selected_item.emit(item.clone());
    }
}
