//! A stateful combobox controller.
//!
//! [`Combobox`] owns a configuration and the current model, runs
//! [`update`] for each event, and reports effects and changes through
//! signals. Hosts that prefer to own the model themselves can call
//! [`update`] directly instead.
//!
//! # Example
//!
//! ```
//! use lattice_combobox::{Combobox, Config, ItemId, Msg};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! let config = Config::<&'static str>::new(|s| ItemId::from(*s), |s| s.to_string());
//! let combobox = Combobox::with_items(config, vec!["Apple", "Banana"]);
//!
//! let opened = Arc::new(AtomicBool::new(false));
//! let flag = opened.clone();
//! combobox.opened_changed.connect(move |is_open| flag.store(*is_open, Ordering::SeqCst));
//!
//! combobox.dispatch(Msg::FocusedInput);
//! assert!(opened.load(Ordering::SeqCst));
//! assert!(combobox.handle_key("ArrowDown"));
//! assert_eq!(combobox.highlighted_item(), Some("Apple"));
//! ```

use parking_lot::RwLock;

use lattice_combobox_core::logging::span_names;
use lattice_combobox_core::selectors::{self, ItemStatus};
use lattice_combobox_core::{
    Config, Effect, EffectSignals, InputMode, ItemId, Model, Msg, Phase, SelectMode, Signal,
    run_effects, update,
};

use crate::accessibility::{self, AriaAttributes};
use crate::keyboard::key_to_msg;

/// A combobox controller holding its own model.
pub struct Combobox<T> {
    config: Config<T>,
    model: RwLock<Model<T>>,

    /// Signals for effect requests, emitted in order after each event.
    pub effect_signals: EffectSignals<T>,
    /// Emitted with the new selection when it changes.
    pub selection_changed: Signal<Vec<T>>,
    /// Emitted with the new input text when it changes.
    pub input_value_changed: Signal<String>,
    /// Emitted when the dropdown opens or closes.
    pub opened_changed: Signal<bool>,
}

impl<T: Clone> Combobox<T> {
    /// Create a controller from a configuration and an initial model.
    pub fn new(config: Config<T>, model: Model<T>) -> Self {
        Self {
            config,
            model: RwLock::new(model),
            effect_signals: EffectSignals::new(),
            selection_changed: Signal::new(),
            input_value_changed: Signal::new(),
            opened_changed: Signal::new(),
        }
    }

    /// Create a single-select, search-mode controller over the given items.
    pub fn with_items(config: Config<T>, all_items: Vec<T>) -> Self {
        Self::new(config, Model::new(all_items))
    }

    /// Get the configuration.
    pub fn config(&self) -> &Config<T> {
        &self.config
    }

    /// Get a snapshot of the current model.
    pub fn model(&self) -> Model<T> {
        self.model.read().clone()
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Process one event.
    ///
    /// Effect signals fire first, in emission order, followed by the change
    /// signals. No lock is held while signals run, so slots may read from or
    /// dispatch to this combobox.
    pub fn dispatch(&self, msg: Msg<T>) -> Vec<Effect<T>> {
        let span = tracing::trace_span!(span_names::DISPATCH, msg = %msg.msg_type());
        let _guard = span.enter();

        let (effects, selection, input_value, opened) = {
            let mut model = self.model.write();
            let before = ChangeSnapshot::capture(&self.config, &model);
            let (next, effects) = update(&self.config, &model, msg).into_parts();
            let after = ChangeSnapshot::capture(&self.config, &next);

            let selection = (before.selected_ids != after.selected_ids).then(|| next.selected_items().to_vec());
            let input_value = (before.input_value != after.input_value).then_some(after.input_value);
            let opened = (before.opened != after.opened).then_some(after.opened);

            *model = next;
            (effects, selection, input_value, opened)
        };

        run_effects(&effects, &mut &self.effect_signals);

        if let Some(selected) = selection {
            tracing::debug!(count = selected.len(), "selection changed");
            self.selection_changed.emit(selected);
        }
        if let Some(text) = input_value {
            self.input_value_changed.emit(text);
        }
        if let Some(opened) = opened {
            self.opened_changed.emit(opened);
        }

        effects
    }

    /// Process a raw key name from the input.
    ///
    /// Returns whether the host should suppress its default handling of the
    /// key. Blank key names are ignored.
    pub fn handle_key(&self, raw: &str) -> bool {
        match key_to_msg(raw) {
            Ok(mapped) => {
                self.dispatch(mapped.msg);
                mapped.should_prevent_default
            }
            Err(err) => {
                tracing::trace!(%err, "ignoring key");
                false
            }
        }
    }

    /// Replace the candidate items.
    pub fn set_all_items(&self, all_items: Vec<T>) {
        self.dispatch(Msg::SetAllItems(all_items));
    }

    /// Replace the selection.
    pub fn set_selected_items(&self, selected_items: Vec<T>) {
        self.dispatch(Msg::SetSelectedItems(selected_items));
    }

    /// Replace the search text (search mode only).
    pub fn set_input_value(&self, text: impl Into<String>) {
        self.dispatch(Msg::SetInputValue(text.into()));
    }

    /// Change the select and/or input mode.
    pub fn set_mode(&self, select_mode: Option<SelectMode>, input_mode: Option<InputMode>) {
        self.dispatch(Msg::SetMode {
            select_mode,
            input_mode,
        });
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Get the current phase.
    pub fn phase(&self) -> Phase {
        self.model.read().phase()
    }

    /// Check whether the dropdown is open.
    pub fn is_opened(&self) -> bool {
        selectors::is_opened(&self.model.read())
    }

    /// Get the items eligible for display.
    pub fn visible_items(&self) -> Vec<T> {
        selectors::to_visible_items(&self.config, &self.model.read())
    }

    /// Get the selected items, oldest first.
    pub fn selected_items(&self) -> Vec<T> {
        self.model.read().selected_items().to_vec()
    }

    /// Get the text the input should show.
    pub fn input_value(&self) -> String {
        selectors::to_current_input_value(&self.config, &self.model.read())
    }

    /// Get the highlighted item.
    pub fn highlighted_item(&self) -> Option<T> {
        selectors::to_highlighted_item(&self.config, &self.model.read())
    }

    /// Get the display status of an item.
    pub fn item_status(&self, item: &T) -> ItemStatus {
        selectors::to_item_status(&self.config, &self.model.read(), item)
    }

    /// Get the focused selected-item chip.
    pub fn focused_selected_item(&self) -> Option<T> {
        selectors::to_focused_selected_item(&self.model.read()).cloned()
    }

    // =========================================================================
    // Accessibility
    // =========================================================================

    /// ARIA attributes for the label.
    pub fn aria_label(&self) -> AriaAttributes {
        accessibility::aria_label(&self.config)
    }

    /// ARIA attributes for the input.
    pub fn aria_input(&self) -> AriaAttributes {
        accessibility::aria_input(&self.config, &self.model.read())
    }

    /// ARIA attributes for the listbox.
    pub fn aria_listbox(&self) -> AriaAttributes {
        accessibility::aria_listbox(&self.config, &self.model.read())
    }

    /// ARIA attributes for one item.
    pub fn aria_item(&self, item: &T) -> AriaAttributes {
        accessibility::aria_item(&self.config, &self.model.read(), item)
    }

    /// ARIA attributes for one selected-item chip.
    pub fn aria_selected_item(&self, item: &T) -> AriaAttributes {
        accessibility::aria_selected_item(&self.config, &self.model.read(), item)
    }

    /// ARIA attributes for the helper text.
    pub fn aria_helper_text(&self) -> AriaAttributes {
        accessibility::aria_helper_text(&self.config)
    }
}

impl<T> std::fmt::Debug for Combobox<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Combobox")
            .field("config", &self.config)
            .field("phase", &self.model.read().phase())
            .finish_non_exhaustive()
    }
}

/// The projections whose changes are reported by signals.
struct ChangeSnapshot {
    selected_ids: Vec<ItemId>,
    input_value: String,
    opened: bool,
}

impl ChangeSnapshot {
    fn capture<T>(config: &Config<T>, model: &Model<T>) -> Self {
        Self {
            selected_ids: model.selected_items().iter().map(|item| config.item_id(item)).collect(),
            input_value: selectors::to_current_input_value(config, model),
            opened: model.phase().is_opened(),
        }
    }
}

static_assertions::assert_impl_all!(Combobox<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn setup() -> Combobox<&'static str> {
        let config = Config::<&'static str>::new(|s| ItemId::from(*s), |s| s.to_string());
        Combobox::with_items(config, vec!["Apple", "Banana", "Cherry"])
    }

    #[test]
    fn test_dispatch_updates_model() {
        let combobox = setup();
        assert_eq!(combobox.phase(), Phase::Blurred);

        combobox.dispatch(Msg::FocusedInput);
        assert!(combobox.is_opened());

        combobox.dispatch(Msg::PressedItem("Banana"));
        assert_eq!(combobox.selected_items(), vec!["Banana"]);
        assert_eq!(combobox.input_value(), "Banana");
        assert_eq!(combobox.item_status(&"Banana"), ItemStatus::Selected);
    }

    #[test]
    fn test_change_signals() {
        let combobox = setup();
        let log = Arc::new(Mutex::new(Vec::new()));

        let l = log.clone();
        combobox.opened_changed.connect(move |opened| l.lock().push(format!("opened {opened}")));
        let l = log.clone();
        combobox
            .selection_changed
            .connect(move |items| l.lock().push(format!("selection {items:?}")));
        let l = log.clone();
        combobox
            .input_value_changed
            .connect(move |text| l.lock().push(format!("input {text}")));

        combobox.dispatch(Msg::FocusedInput);
        combobox.dispatch(Msg::PressedItem("Cherry"));

        assert_eq!(
            *log.lock(),
            vec![
                "opened true",
                "selection [\"Cherry\"]",
                "input Cherry",
                "opened false",
            ]
        );
    }

    #[test]
    fn test_effect_signals_fire_in_order() {
        let combobox = setup();
        let scrolled = Arc::new(Mutex::new(Vec::new()));

        let s = scrolled.clone();
        combobox
            .effect_signals
            .scroll_item_into_view
            .connect(move |item| s.lock().push(*item));

        combobox.dispatch(Msg::FocusedInput);
        combobox.handle_key("ArrowUp");
        combobox.handle_key("ArrowUp");

        // Opening seeds the highlight at the top; the second press wraps.
        assert_eq!(*scrolled.lock(), vec!["Apple", "Cherry"]);
    }

    #[test]
    fn test_handle_key() {
        let combobox = setup();
        combobox.dispatch(Msg::FocusedInput);

        assert!(combobox.handle_key("ArrowDown"));
        assert_eq!(combobox.highlighted_item(), Some("Apple"));
        assert!(combobox.handle_key("Enter"));
        assert_eq!(combobox.selected_items(), vec!["Apple"]);
        assert!(!combobox.handle_key("Escape"));
        assert!(!combobox.handle_key("  "));
    }

    #[test]
    fn test_slot_can_read_combobox() {
        let combobox = Arc::new(setup());
        let seen = Arc::new(Mutex::new(None));

        let weak = Arc::downgrade(&combobox);
        let s = seen.clone();
        combobox.opened_changed.connect(move |_| {
            if let Some(combobox) = weak.upgrade() {
                *s.lock() = Some(combobox.phase());
            }
        });

        combobox.dispatch(Msg::FocusedInput);
        assert_eq!(*seen.lock(), Some(Phase::FocusedOpened));
    }

    #[test]
    fn test_setters() {
        let combobox = setup();
        combobox.set_mode(Some(SelectMode::multi()), None);
        combobox.set_selected_items(vec!["Apple", "Cherry"]);
        assert_eq!(combobox.selected_items(), vec!["Apple", "Cherry"]);

        combobox.set_all_items(vec!["Cherry"]);
        assert_eq!(combobox.selected_items(), vec!["Cherry"]);

        combobox.set_input_value("ch");
        assert_eq!(combobox.model().search_value(), Some("ch"));
        assert_eq!(combobox.visible_items(), vec!["Cherry"]);
    }

    #[test]
    fn test_aria_accessors() {
        let combobox = setup();
        assert_eq!(combobox.aria_input().get("id"), Some("combobox-input"));
        assert_eq!(combobox.aria_listbox().get("role"), Some("listbox"));
        assert_eq!(combobox.aria_item(&"Apple").get("id"), Some("combobox-item-Apple"));
        assert_eq!(combobox.aria_label().get("id"), Some("combobox-label"));
        assert_eq!(combobox.aria_helper_text().get("id"), Some("combobox-helper-text"));
        assert_eq!(
            combobox.aria_selected_item(&"Apple").get("tabindex"),
            Some("-1")
        );
    }
}
