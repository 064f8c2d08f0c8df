//! The combobox transition function.
//!
//! [`update`] maps `(config, model, msg)` to a new model plus the effects the
//! host should perform. It runs in four steps:
//!
//! 1. If the event's type is queued in `skip_once`, consume one token and
//!    return the model otherwise unchanged.
//! 2. Apply the phase/event table, then the setter overlay.
//! 3. Derive effects from the previous and next model.
//! 4. Schedule suppression tokens for known spurious follow-up events.
//!
//! Events that do not apply to the current phase return an equal model and
//! no effects.

use crate::config::Config;
use crate::effect::Effect;
use crate::logging::targets;
use crate::model::{InputMode, Model, Phase, SelectMode, SelectedItemListDirection};
use crate::msg::{HorizontalDirection, Msg, MsgType, VerticalDirection};
use crate::selectors::{to_selected_items_input_value, to_visible_items};

/// The result of one [`update`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<T> {
    /// The next model.
    pub model: Model<T>,
    /// Effects to execute, in order.
    pub effects: Vec<Effect<T>>,
}

impl<T> Transition<T> {
    /// Split into the model and the effects.
    pub fn into_parts(self) -> (Model<T>, Vec<Effect<T>>) {
        (self.model, self.effects)
    }
}

/// Compute the next model and the effects for one event.
///
/// Never mutates `model`; the returned model is a new value.
#[tracing::instrument(
    level = "trace",
    name = "lattice_combobox::update",
    target = "lattice_combobox_core::update",
    skip_all,
    fields(msg = %msg.msg_type(), phase = model.phase().tag())
)]
pub fn update<T: Clone>(config: &Config<T>, model: &Model<T>, msg: Msg<T>) -> Transition<T> {
    let msg_type = msg.msg_type();

    if let Some(position) = model.skip_once.iter().position(|pending| *pending == msg_type) {
        let mut next = model.clone();
        next.skip_once.remove(position);
        tracing::trace!(target: targets::UPDATE, msg = %msg_type, "suppressed event");
        return Transition {
            model: next,
            effects: Vec::new(),
        };
    }

    let mut next = model.clone();
    apply_event(config, model, &mut next, msg);

    let effects = compute_effects(config, model, &next, msg_type);
    schedule_suppressions(model, &mut next, &effects, msg_type);

    if model.phase != next.phase {
        tracing::debug!(
            target: targets::UPDATE,
            from = model.phase.tag(),
            to = next.phase.tag(),
            "phase transition"
        );
    }
    if !effects.is_empty() {
        tracing::trace!(target: targets::UPDATE, effects = ?effect_tags(&effects), "emitting effects");
    }

    Transition { model: next, effects }
}

fn effect_tags<T>(effects: &[Effect<T>]) -> Vec<&'static str> {
    effects.iter().map(Effect::tag).collect()
}

// ============================================================================
// Phase × Event Table
// ============================================================================

fn apply_event<T: Clone>(config: &Config<T>, prev: &Model<T>, next: &mut Model<T>, msg: Msg<T>) {
    let phase = prev.phase;
    match msg {
        Msg::FocusedInput => match phase {
            Phase::Blurred => {
                next.phase = Phase::FocusedOpened;
                reset_input_value(config, next);
            }
            Phase::SelectedItemHighlighted { .. } => next.phase = Phase::FocusedClosed,
            _ => {}
        },
        Msg::BlurredInput => {
            if phase.is_focused() {
                next.phase = Phase::Blurred;
            }
        }
        Msg::PressedInput => match phase {
            Phase::Blurred => {
                next.phase = Phase::FocusedOpened;
                reset_input_value(config, next);
            }
            Phase::FocusedClosed | Phase::SelectedItemHighlighted { .. } => next.phase = Phase::FocusedOpened,
            Phase::FocusedOpened | Phase::FocusedOpenedHighlighted { .. } => next.phase = Phase::FocusedClosed,
        },
        Msg::InputtedValue(text) => {
            if phase.is_input_focused() && prev.input_mode.is_search_mode() {
                if text.is_empty() && prev.select_mode.is_single_select() {
                    next.selected_items.clear();
                }
                next.set_search_value(text);
                next.phase = Phase::FocusedOpened;
            }
        }
        Msg::PressedItem(item) => {
            if phase.is_opened() {
                select_item(config, next, item);
            }
        }
        Msg::PressedEnterKey => {
            if let Phase::FocusedOpenedHighlighted { highlight_index } = phase
                && let Some(item) = to_visible_items(config, prev).into_iter().nth(highlight_index)
            {
                select_item(config, next, item);
            }
        }
        Msg::HoveredOverItem(index) => {
            if phase.is_opened() {
                next.phase = Phase::FocusedOpenedHighlighted { highlight_index: index };
            }
        }
        Msg::PressedVerticalArrowKey(direction) => move_highlight(config, prev, next, direction),
        Msg::PressedHorizontalArrowKey(direction) => move_chip_focus(prev, next, direction),
        Msg::PressedEscapeKey => {
            if phase.is_opened() || phase.focused_index().is_some() {
                next.phase = Phase::FocusedClosed;
            }
        }
        Msg::PressedBackspaceKey => remove_with_backspace(prev, next),
        Msg::PressedKey(raw) => typeahead(config, prev, next, &raw),
        Msg::PressedUnselectButton(item) => unselect(config, prev, next, &item),
        Msg::PressedUnselectAllButton => {
            next.selected_items.clear();
            next.set_search_value(String::new());
            if phase.is_focused() {
                next.phase = Phase::FocusedClosed;
            }
        }
        Msg::FocusedSelectedItem(item) => {
            if prev.select_mode.is_multi_select()
                && let Some(index) = config.position_of(&prev.selected_items, &item)
            {
                next.phase = Phase::SelectedItemHighlighted { focused_index: index };
            }
        }
        Msg::BlurredSelectedItem(item) => {
            if let Phase::SelectedItemHighlighted { focused_index } = phase
                && prev
                    .selected_items
                    .get(focused_index)
                    .is_some_and(|focused| config.is_same_item(focused, &item))
            {
                next.phase = Phase::Blurred;
            }
        }
        Msg::SetAllItems(all_items) => {
            next.all_items = all_items;
            let before = next.selected_items.len();
            prune_selection(config, next);
            if next.selected_items.len() != before {
                reset_input_value(config, next);
            }
            normalize(config, next);
        }
        Msg::SetSelectedItems(selected_items) => {
            next.selected_items = selected_items;
            prune_selection(config, next);
            normalize(config, next);
            reset_input_value(config, next);
        }
        Msg::SetInputValue(text) => {
            if prev.input_mode.is_search_mode() {
                next.set_search_value(text);
                normalize(config, next);
            }
        }
        Msg::SetHighlightIndex(index) => {
            if phase.highlight_index().is_some() && index < to_visible_items(config, prev).len() {
                next.phase = Phase::FocusedOpenedHighlighted { highlight_index: index };
            }
        }
        Msg::SetMode {
            select_mode,
            input_mode,
        } => {
            if let Some(select_mode) = select_mode {
                next.select_mode = select_mode;
            }
            if let Some(input_mode) = input_mode {
                let entering_search = !prev.input_mode.is_search_mode() && input_mode.is_search_mode();
                next.input_mode = input_mode;
                if entering_search {
                    reset_input_value(config, next);
                }
            }
            normalize(config, next);
        }
    }
}

/// Toggle an item into or out of the selection and close the dropdown.
fn select_item<T: Clone>(config: &Config<T>, next: &mut Model<T>, item: T) {
    if config.is_empty_item(&item) {
        next.selected_items.clear();
    } else {
        match next.select_mode {
            SelectMode::SingleSelect => next.selected_items = vec![item],
            SelectMode::MultiSelect { .. } => match config.position_of(&next.selected_items, &item) {
                Some(position) => {
                    next.selected_items.remove(position);
                }
                None => next.selected_items.push(item),
            },
        }
    }
    next.phase = Phase::FocusedClosed;
    reset_input_value(config, next);
}

fn move_highlight<T: Clone>(config: &Config<T>, prev: &Model<T>, next: &mut Model<T>, direction: VerticalDirection) {
    match prev.phase {
        Phase::FocusedClosed | Phase::FocusedOpened => {
            let visible = to_visible_items(config, prev);
            let seed = prev
                .selected_items
                .first()
                .and_then(|selected| config.position_of(&visible, selected))
                .unwrap_or(0);
            next.phase = Phase::FocusedOpenedHighlighted { highlight_index: seed };
        }
        Phase::FocusedOpenedHighlighted { highlight_index } => {
            let len = to_visible_items(config, prev).len();
            let index = if len == 0 {
                0
            } else {
                (highlight_index as isize + direction.delta()).rem_euclid(len as isize) as usize
            };
            next.phase = Phase::FocusedOpenedHighlighted { highlight_index: index };
        }
        Phase::Blurred | Phase::SelectedItemHighlighted { .. } => {}
    }
}

fn move_chip_focus<T>(prev: &Model<T>, next: &mut Model<T>, direction: HorizontalDirection) {
    let Some(list_direction) = prev.select_mode.selected_item_list_direction() else {
        return;
    };
    let toward_chips = match list_direction {
        SelectedItemListDirection::LeftToRight => HorizontalDirection::Right,
        SelectedItemListDirection::RightToLeft => HorizontalDirection::Left,
    };

    match prev.phase {
        Phase::SelectedItemHighlighted { focused_index } => {
            let last = prev.selected_items.len().saturating_sub(1);
            next.phase = if direction == toward_chips {
                Phase::SelectedItemHighlighted {
                    focused_index: (focused_index + 1).min(last),
                }
            } else if focused_index == 0 {
                Phase::FocusedClosed
            } else {
                Phase::SelectedItemHighlighted {
                    focused_index: (focused_index - 1).min(last),
                }
            };
        }
        phase if phase.is_input_focused() => {
            if direction == toward_chips && prev.is_search_empty() && prev.has_selection() {
                next.phase = Phase::SelectedItemHighlighted { focused_index: 0 };
            }
        }
        _ => {}
    }
}

fn remove_with_backspace<T>(prev: &Model<T>, next: &mut Model<T>) {
    match prev.phase {
        Phase::SelectedItemHighlighted { focused_index } => {
            if focused_index < next.selected_items.len() {
                next.selected_items.remove(focused_index);
            }
            next.phase = Phase::FocusedClosed;
        }
        phase if phase.is_input_focused() => match (&prev.input_mode, prev.select_mode) {
            (InputMode::SelectOnly, SelectMode::SingleSelect) => next.selected_items.clear(),
            (InputMode::SearchMode { input_value }, select_mode) if input_value.is_empty() => {
                if select_mode.is_multi_select() {
                    if !next.selected_items.is_empty() {
                        next.selected_items.remove(0);
                    }
                } else {
                    next.selected_items.clear();
                }
            }
            _ => {}
        },
        _ => {}
    }
}

/// Select-only typeahead: highlight the next visible item starting with the
/// typed character.
fn typeahead<T: Clone>(config: &Config<T>, prev: &Model<T>, next: &mut Model<T>, raw: &str) {
    if prev.input_mode.is_search_mode() || !prev.phase.is_input_focused() {
        return;
    }
    let mut chars = raw.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return;
    };
    if ch.is_control() || ch.is_whitespace() {
        return;
    }

    let visible = to_visible_items(config, prev);
    let len = visible.len();
    if len == 0 {
        return;
    }
    // An out-of-range highlight reads as nothing highlighted.
    let start = prev
        .phase
        .highlight_index()
        .filter(|&index| index < len)
        .map_or(0, |index| (index + 1) % len);
    let needle: String = ch.to_lowercase().collect();

    let found = (0..len)
        .map(|offset| (start + offset) % len)
        .find(|&index| {
            config
                .item_input_value(&visible[index])
                .to_lowercase()
                .starts_with(&needle)
        });
    if let Some(index) = found {
        next.phase = Phase::FocusedOpenedHighlighted { highlight_index: index };
    }
}

fn unselect<T: Clone>(config: &Config<T>, prev: &Model<T>, next: &mut Model<T>, item: &T) {
    let Some(removed) = config.position_of(&prev.selected_items, item) else {
        return;
    };
    next.selected_items.remove(removed);

    if let Phase::SelectedItemHighlighted { focused_index } = prev.phase {
        let len = next.selected_items.len();
        next.phase = if len == 0 {
            Phase::FocusedClosed
        } else if removed < focused_index {
            Phase::SelectedItemHighlighted {
                focused_index: focused_index - 1,
            }
        } else {
            Phase::SelectedItemHighlighted {
                focused_index: focused_index.min(len - 1),
            }
        };
    }

    if prev.select_mode.is_single_select() {
        reset_input_value(config, next);
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Set the search text to the display text of the selection.
fn reset_input_value<T>(config: &Config<T>, model: &mut Model<T>) {
    let text = to_selected_items_input_value(config, model);
    model.set_search_value(text);
}

/// Keep only selected items that exist in `all_items`, once each.
fn prune_selection<T>(config: &Config<T>, model: &mut Model<T>) {
    let all_items = &model.all_items;
    let mut kept: Vec<T> = Vec::with_capacity(model.selected_items.len());
    for item in model.selected_items.drain(..) {
        if config.contains(all_items, &item) && !config.contains(&kept, &item) {
            kept.push(item);
        }
    }
    model.selected_items = kept;
}

/// Re-establish cardinality and index invariants after a setter.
fn normalize<T: Clone>(config: &Config<T>, model: &mut Model<T>) {
    if model.select_mode.is_single_select() {
        model.selected_items.truncate(1);
    }

    match model.phase {
        Phase::FocusedOpenedHighlighted { highlight_index } => {
            let len = to_visible_items(config, model).len();
            model.phase = if len == 0 {
                Phase::FocusedOpened
            } else {
                Phase::FocusedOpenedHighlighted {
                    highlight_index: highlight_index.min(len - 1),
                }
            };
        }
        Phase::SelectedItemHighlighted { focused_index } => {
            let len = model.selected_items.len();
            model.phase = if model.select_mode.is_single_select() || len == 0 {
                Phase::FocusedClosed
            } else {
                Phase::SelectedItemHighlighted {
                    focused_index: focused_index.min(len - 1),
                }
            };
        }
        _ => {}
    }
}

// ============================================================================
// Effects
// ============================================================================

fn compute_effects<T: Clone>(config: &Config<T>, prev: &Model<T>, next: &Model<T>, msg_type: MsgType) -> Vec<Effect<T>> {
    let mut effects = Vec::new();

    if msg_type == MsgType::PressedInput {
        effects.push(Effect::FocusInput);
    }

    if !prev.phase.is_opened()
        && next.phase.is_opened()
        && let Some(first) = next.selected_items.first()
    {
        effects.push(Effect::ScrollItemIntoView(first.clone()));
    }

    let keyboard_highlight = msg_type == MsgType::PressedVerticalArrowKey
        || (msg_type == MsgType::PressedKey && prev.phase != next.phase);
    if keyboard_highlight
        && let Phase::FocusedOpenedHighlighted { highlight_index } = next.phase
        && let Some(item) = to_visible_items(config, next).into_iter().nth(highlight_index)
    {
        effects.push(Effect::ScrollItemIntoView(item));
    }

    match (prev.phase, next.phase) {
        (_, Phase::SelectedItemHighlighted { focused_index }) => {
            if let Some(item) = next.selected_items.get(focused_index) {
                let chip_changed = match prev.phase {
                    Phase::SelectedItemHighlighted { focused_index: before } => prev
                        .selected_items
                        .get(before)
                        .is_none_or(|previous| !config.is_same_item(previous, item)),
                    _ => true,
                };
                if chip_changed {
                    effects.push(Effect::FocusSelectedItem(item.clone()));
                }
            }
        }
        (Phase::SelectedItemHighlighted { .. }, phase) if phase != Phase::Blurred => {
            effects.push(Effect::FocusInput);
        }
        _ => {}
    }

    if msg_type == MsgType::PressedUnselectAllButton {
        effects.push(Effect::FocusInput);
    }

    dedup_effects(config, effects)
}

fn dedup_effects<T>(config: &Config<T>, effects: Vec<Effect<T>>) -> Vec<Effect<T>> {
    let mut unique: Vec<Effect<T>> = Vec::with_capacity(effects.len());
    for effect in effects {
        if !unique.iter().any(|kept| kept.is_same_as(&effect, config)) {
            unique.push(effect);
        }
    }
    unique
}

// ============================================================================
// Suppression Scheduling
// ============================================================================

fn schedule_suppressions<T>(prev: &Model<T>, next: &mut Model<T>, effects: &[Effect<T>], msg_type: MsgType) {
    let opened = !prev.phase.is_opened() && next.phase.is_opened();
    let scrolled = effects.iter().any(Effect::is_scroll);

    // Later rules overwrite the hover count rather than adding to it.
    if opened && scrolled {
        set_pending(next, MsgType::HoveredOverItem, 2);
    } else if opened {
        set_pending(next, MsgType::HoveredOverItem, 1);
    }
    if scrolled {
        set_pending(next, MsgType::HoveredOverItem, 1);
    }

    let gained_input_focus = matches!(prev.phase, Phase::Blurred | Phase::SelectedItemHighlighted { .. })
        && next.phase.is_input_focused();
    if gained_input_focus && msg_type != MsgType::PressedInput {
        set_pending(next, MsgType::PressedInput, 1);
    } else if prev.phase.is_focused() && next.phase == Phase::Blurred {
        // A press that never followed its focus is stale once the input blurs.
        next.skip_once.retain(|pending| *pending != MsgType::PressedInput);
    }

    if next.skip_once != prev.skip_once {
        tracing::trace!(target: targets::UPDATE, skip_once = ?next.skip_once, "scheduled suppressions");
    }
}

/// Replace the pending tokens of one type with `count` tokens.
fn set_pending<T>(model: &mut Model<T>, msg_type: MsgType, count: usize) {
    model.skip_once.retain(|pending| *pending != msg_type);
    model.skip_once.extend(std::iter::repeat_n(msg_type, count));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ItemId;
    use crate::model::init;
    use crate::selectors::to_current_input_value;

    type Item = &'static str;

    fn config() -> Config<Item> {
        Config::<Item>::new(|s| ItemId::from(*s), |s| s.to_string())
    }

    fn items() -> Vec<Item> {
        vec!["Apple", "Banana", "Cherry"]
    }

    fn with_phase(mut model: Model<Item>, phase: Phase) -> Model<Item> {
        model.phase = phase;
        model
    }

    fn step(config: &Config<Item>, model: &Model<Item>, msg: Msg<Item>) -> Transition<Item> {
        update(config, model, msg)
    }

    #[test]
    fn test_focus_from_blurred_opens_and_resets_text() {
        let config = config();
        let model = init(items()).with_selected_items(vec!["Banana"]);

        let t = step(&config, &model, Msg::FocusedInput);
        assert_eq!(t.model.phase(), Phase::FocusedOpened);
        assert_eq!(t.model.search_value(), Some("Banana"));
        assert_eq!(t.effects, vec![Effect::ScrollItemIntoView("Banana")]);
        // Opened and scrolled: the scroll rule wins with a single hover token.
        assert_eq!(
            t.model.skip_once(),
            &[MsgType::HoveredOverItem, MsgType::PressedInput]
        );
    }

    #[test]
    fn test_blur_from_any_focused_phase() {
        let config = config();
        for phase in [
            Phase::FocusedClosed,
            Phase::FocusedOpened,
            Phase::FocusedOpenedHighlighted { highlight_index: 1 },
        ] {
            let t = step(&config, &with_phase(init(items()), phase), Msg::BlurredInput);
            assert_eq!(t.model.phase(), Phase::Blurred);
            assert!(t.effects.is_empty());
        }
    }

    #[test]
    fn test_pressed_input_toggles() {
        let config = config();
        let closed = with_phase(init(items()), Phase::FocusedClosed);

        let t = step(&config, &closed, Msg::PressedInput);
        assert_eq!(t.model.phase(), Phase::FocusedOpened);
        assert_eq!(t.effects, vec![Effect::FocusInput]);
        assert_eq!(t.model.skip_once(), &[MsgType::HoveredOverItem]);

        let t = step(&config, &t.model, Msg::PressedInput);
        assert_eq!(t.model.phase(), Phase::FocusedClosed);
    }

    #[test]
    fn test_pressed_input_from_blurred_does_not_schedule_press_suppression() {
        let config = config();
        let t = step(&config, &init(items()), Msg::PressedInput);
        assert_eq!(t.model.phase(), Phase::FocusedOpened);
        assert!(!t.model.skip_once().contains(&MsgType::PressedInput));
    }

    #[test]
    fn test_inputted_value_filters_and_opens() {
        let config = config();
        let model = with_phase(init(items()), Phase::FocusedClosed);

        let t = step(&config, &model, Msg::InputtedValue("an".to_string()));
        assert_eq!(t.model.phase(), Phase::FocusedOpened);
        assert_eq!(t.model.search_value(), Some("an"));
        assert_eq!(to_visible_items(&config, &t.model), vec!["Banana"]);
    }

    #[test]
    fn test_inputted_value_ignored_in_select_only() {
        let config = config();
        let model = with_phase(
            init(items()).with_input_mode(InputMode::SelectOnly),
            Phase::FocusedClosed,
        );
        let t = step(&config, &model, Msg::InputtedValue("x".to_string()));
        assert_eq!(t.model, model);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_pressed_item_single_select_replaces() {
        let config = config();
        let model = with_phase(init(items()).with_selected_items(vec!["Apple"]), Phase::FocusedOpened);

        let t = step(&config, &model, Msg::PressedItem("Cherry"));
        assert_eq!(t.model.selected_items(), &["Cherry"]);
        assert_eq!(t.model.phase(), Phase::FocusedClosed);
        assert_eq!(to_current_input_value(&config, &t.model), "Cherry");

        // Pressing the selected item keeps it selected.
        let reopened = with_phase(t.model, Phase::FocusedOpened);
        let t = step(&config, &reopened, Msg::PressedItem("Cherry"));
        assert_eq!(t.model.selected_items(), &["Cherry"]);
    }

    #[test]
    fn test_pressed_empty_item_clears_selection() {
        let config = Config::<Item>::builder(|s| ItemId::from(*s), |s| s.to_string())
            .is_empty_item(|s| *s == "None")
            .build()
            .unwrap();
        let model = with_phase(
            init(vec!["None", "Apple"]).with_selected_items(vec!["Apple"]),
            Phase::FocusedOpened,
        );

        let t = step(&config, &model, Msg::PressedItem("None"));
        assert!(t.model.selected_items().is_empty());
        assert_eq!(t.model.phase(), Phase::FocusedClosed);
        assert_eq!(t.model.search_value(), Some("None"));
    }

    #[test]
    fn test_enter_selects_highlighted() {
        let config = config();
        let model = with_phase(init(items()), Phase::FocusedOpenedHighlighted { highlight_index: 2 });

        let t = step(&config, &model, Msg::PressedEnterKey);
        assert_eq!(t.model.selected_items(), &["Cherry"]);
        assert_eq!(t.model.phase(), Phase::FocusedClosed);
    }

    #[test]
    fn test_enter_with_stale_highlight_is_noop() {
        let config = config();
        let model = with_phase(init(items()), Phase::FocusedOpenedHighlighted { highlight_index: 7 });
        let t = step(&config, &model, Msg::PressedEnterKey);
        assert_eq!(t.model, model);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_arrow_from_closed_seeds_at_selection() {
        let config = config();
        let model = with_phase(init(items()).with_selected_items(vec!["Cherry"]), Phase::FocusedClosed);

        let t = step(&config, &model, Msg::PressedVerticalArrowKey(VerticalDirection::Down));
        assert_eq!(t.model.phase(), Phase::FocusedOpenedHighlighted { highlight_index: 2 });
        assert_eq!(t.effects, vec![Effect::ScrollItemIntoView("Cherry")]);
        assert_eq!(t.model.skip_once(), &[MsgType::HoveredOverItem]);
    }

    #[test]
    fn test_arrow_wraps() {
        let config = config();
        let model = with_phase(init(items()), Phase::FocusedOpenedHighlighted { highlight_index: 0 });

        let t = step(&config, &model, Msg::PressedVerticalArrowKey(VerticalDirection::Up));
        assert_eq!(t.model.phase().highlight_index(), Some(2));
        assert_eq!(t.effects, vec![Effect::ScrollItemIntoView("Cherry")]);
    }

    #[test]
    fn test_arrow_with_no_visible_items() {
        let config = config();
        let model = with_phase(
            init(items()).with_input_mode(InputMode::search("zzz")),
            Phase::FocusedOpenedHighlighted { highlight_index: 0 },
        );
        let t = step(&config, &model, Msg::PressedVerticalArrowKey(VerticalDirection::Down));
        assert_eq!(t.model.phase().highlight_index(), Some(0));
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_hover_highlights_without_scroll() {
        let config = config();
        let model = with_phase(init(items()), Phase::FocusedOpened);
        let t = step(&config, &model, Msg::HoveredOverItem(1));
        assert_eq!(t.model.phase().highlight_index(), Some(1));
        assert!(t.effects.is_empty());
        assert!(t.model.skip_once().is_empty());
    }

    #[test]
    fn test_escape_closes() {
        let config = config();
        let model = with_phase(init(items()), Phase::FocusedOpenedHighlighted { highlight_index: 1 });
        let t = step(&config, &model, Msg::PressedEscapeKey);
        assert_eq!(t.model.phase(), Phase::FocusedClosed);
    }

    #[test]
    fn test_backspace_in_search_mode() {
        let config = config();
        let multi = with_phase(
            init(items())
                .with_select_mode(SelectMode::multi())
                .with_selected_items(vec!["Apple", "Cherry"]),
            Phase::FocusedClosed,
        );
        let t = step(&config, &multi, Msg::PressedBackspaceKey);
        assert_eq!(t.model.selected_items(), &["Cherry"]);

        let typed = multi.clone().with_input_mode(InputMode::search("ch"));
        let t = step(&config, &typed, Msg::PressedBackspaceKey);
        assert_eq!(t.model, typed);
    }

    #[test]
    fn test_backspace_select_only_single_clears() {
        let config = config();
        let model = with_phase(
            init(items())
                .with_input_mode(InputMode::SelectOnly)
                .with_selected_items(vec!["Banana"]),
            Phase::FocusedOpened,
        );
        let t = step(&config, &model, Msg::PressedBackspaceKey);
        assert!(t.model.selected_items().is_empty());
    }

    #[test]
    fn test_chip_navigation_left_to_right() {
        let config = config();
        let model = with_phase(
            init(items())
                .with_select_mode(SelectMode::multi())
                .with_selected_items(vec!["Apple", "Banana"]),
            Phase::FocusedClosed,
        );

        let left = Msg::PressedHorizontalArrowKey(HorizontalDirection::Left);
        let right = Msg::PressedHorizontalArrowKey(HorizontalDirection::Right);

        assert_eq!(step(&config, &model, left.clone()).model, model);

        let t = step(&config, &model, right.clone());
        assert_eq!(t.model.phase(), Phase::SelectedItemHighlighted { focused_index: 0 });
        assert_eq!(t.effects, vec![Effect::FocusSelectedItem("Apple")]);

        let t = step(&config, &t.model, right.clone());
        assert_eq!(t.model.phase().focused_index(), Some(1));
        assert_eq!(t.effects, vec![Effect::FocusSelectedItem("Banana")]);

        // Clamped at the end.
        let t = step(&config, &t.model, right);
        assert_eq!(t.model.phase().focused_index(), Some(1));
        assert!(t.effects.is_empty());

        let t = step(&config, &t.model, left.clone());
        let t = step(&config, &t.model, left);
        assert_eq!(t.model.phase(), Phase::FocusedClosed);
        assert_eq!(t.effects, vec![Effect::FocusInput]);
        assert_eq!(t.model.skip_once(), &[MsgType::PressedInput]);
    }

    #[test]
    fn test_chip_navigation_right_to_left() {
        let config = config();
        let model = with_phase(
            init(items())
                .with_select_mode(SelectMode::multi_with_direction(SelectedItemListDirection::RightToLeft))
                .with_selected_items(vec!["Apple"]),
            Phase::FocusedOpened,
        );
        let t = step(&config, &model, Msg::PressedHorizontalArrowKey(HorizontalDirection::Left));
        assert_eq!(t.model.phase(), Phase::SelectedItemHighlighted { focused_index: 0 });
    }

    #[test]
    fn test_horizontal_arrow_ignored_in_single_select() {
        let config = config();
        let model = with_phase(init(items()).with_selected_items(vec!["Apple"]), Phase::FocusedClosed);
        let t = step(&config, &model, Msg::PressedHorizontalArrowKey(HorizontalDirection::Right));
        assert_eq!(t.model, model);
    }

    #[test]
    fn test_unselect_before_focused_chip_keeps_focus() {
        let config = config();
        let model = with_phase(
            init(items())
                .with_select_mode(SelectMode::multi())
                .with_selected_items(vec!["Apple", "Banana", "Cherry"]),
            Phase::SelectedItemHighlighted { focused_index: 2 },
        );

        let t = step(&config, &model, Msg::PressedUnselectButton("Apple"));
        assert_eq!(t.model.selected_items(), &["Banana", "Cherry"]);
        assert_eq!(t.model.phase().focused_index(), Some(1));
        assert!(t.effects.is_empty());

        let t = step(&config, &t.model, Msg::PressedUnselectButton("Cherry"));
        assert_eq!(t.model.phase().focused_index(), Some(0));
        assert_eq!(t.effects, vec![Effect::FocusSelectedItem("Banana")]);

        let t = step(&config, &t.model, Msg::PressedUnselectButton("Banana"));
        assert_eq!(t.model.phase(), Phase::FocusedClosed);
        assert_eq!(t.effects, vec![Effect::FocusInput]);
        assert_eq!(t.model.skip_once(), &[MsgType::PressedInput]);
    }

    #[test]
    fn test_unselect_all() {
        let config = config();
        let model = with_phase(
            init(items())
                .with_select_mode(SelectMode::multi())
                .with_selected_items(vec!["Apple", "Banana"])
                .with_input_mode(InputMode::search("b")),
            Phase::FocusedOpened,
        );
        let t = step(&config, &model, Msg::PressedUnselectAllButton);
        assert!(t.model.selected_items().is_empty());
        assert_eq!(t.model.phase(), Phase::FocusedClosed);
        assert_eq!(t.model.search_value(), Some(""));
        assert_eq!(t.effects, vec![Effect::FocusInput]);

        let blurred = init(items()).with_selected_items(vec!["Apple"]);
        let t = step(&config, &blurred, Msg::PressedUnselectAllButton);
        assert_eq!(t.model.phase(), Phase::Blurred);
    }

    #[test]
    fn test_chip_focus_events() {
        let config = config();
        let model = init(items())
            .with_select_mode(SelectMode::multi())
            .with_selected_items(vec!["Apple", "Banana"]);

        let t = step(&config, &model, Msg::FocusedSelectedItem("Banana"));
        assert_eq!(t.model.phase(), Phase::SelectedItemHighlighted { focused_index: 1 });

        let unrelated = step(&config, &t.model, Msg::BlurredSelectedItem("Apple"));
        assert_eq!(unrelated.model, t.model);

        let back = step(&config, &t.model, Msg::FocusedInput);
        assert_eq!(back.model.phase(), Phase::FocusedClosed);
        assert_eq!(back.effects, vec![Effect::FocusInput]);
        assert_eq!(back.model.skip_once(), &[MsgType::PressedInput]);

        let t = step(&config, &t.model, Msg::BlurredSelectedItem("Banana"));
        assert_eq!(t.model.phase(), Phase::Blurred);
    }

    #[test]
    fn test_repeated_focus_keeps_one_press_suppression() {
        let config = config();
        let mut model = init(items());
        for _ in 0..3 {
            model = step(&config, &model, Msg::FocusedInput).model;
            model = step(&config, &model, Msg::BlurredInput).model;
            assert!(!model.skip_once().contains(&MsgType::PressedInput));
        }

        let model = step(&config, &model, Msg::FocusedInput).model;
        let pending = model
            .skip_once()
            .iter()
            .filter(|pending| **pending == MsgType::PressedInput)
            .count();
        assert_eq!(pending, 1);

        // The press that accompanies the focus is absorbed, the next one toggles.
        let t = step(&config, &model, Msg::PressedInput);
        assert_eq!(t.model.phase(), Phase::FocusedOpened);
        assert!(t.effects.is_empty());

        let t = step(&config, &t.model, Msg::PressedInput);
        assert_eq!(t.model.phase(), Phase::FocusedClosed);
        assert_eq!(t.effects, vec![Effect::FocusInput]);
    }

    #[test]
    fn test_typeahead_select_only() {
        let config = config();
        let model = with_phase(
            init(vec!["Apple", "Banana", "Blueberry", "Cherry"]).with_input_mode(InputMode::SelectOnly),
            Phase::FocusedClosed,
        );

        let t = step(&config, &model, Msg::PressedKey("b".to_string()));
        assert_eq!(t.model.phase().highlight_index(), Some(1));
        assert_eq!(t.effects, vec![Effect::ScrollItemIntoView("Banana")]);

        let t = step(&config, &t.model, Msg::PressedKey("B".to_string()));
        assert_eq!(t.model.phase().highlight_index(), Some(2));

        let t = step(&config, &t.model, Msg::PressedKey("b".to_string()));
        assert_eq!(t.model.phase().highlight_index(), Some(1));

        let none = step(&config, &t.model, Msg::PressedKey("z".to_string()));
        assert_eq!(none.model, t.model);
        assert!(none.effects.is_empty());

        let named = step(&config, &t.model, Msg::PressedKey("Shift".to_string()));
        assert_eq!(named.model, t.model);
    }

    #[test]
    fn test_typeahead_with_out_of_range_highlight() {
        let config = config();
        let model = with_phase(
            init(vec!["Apple", "Banana", "Blueberry", "Cherry"]).with_input_mode(InputMode::SelectOnly),
            Phase::FocusedOpened,
        );

        let t = step(&config, &model, Msg::HoveredOverItem(usize::MAX));
        assert_eq!(t.model.phase().highlight_index(), Some(usize::MAX));

        let t = step(&config, &t.model, Msg::PressedKey("b".to_string()));
        assert_eq!(t.model.phase().highlight_index(), Some(1));
        assert_eq!(t.effects, vec![Effect::ScrollItemIntoView("Banana")]);

        // Searching after the last item wraps to the front.
        let last = with_phase(t.model, Phase::FocusedOpenedHighlighted { highlight_index: 3 });
        let t = step(&config, &last, Msg::PressedKey("a".to_string()));
        assert_eq!(t.model.phase().highlight_index(), Some(0));
    }

    #[test]
    fn test_typeahead_with_no_visible_items() {
        let config = config();
        let model = with_phase(
            init(Vec::<Item>::new()).with_input_mode(InputMode::SelectOnly),
            Phase::FocusedClosed,
        );
        let t = step(&config, &model, Msg::PressedKey("a".to_string()));
        assert_eq!(t.model, model);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_set_all_items_prunes_selection() {
        let config = config();
        let model = with_phase(
            init(items()).with_selected_items(vec!["Banana"]),
            Phase::FocusedClosed,
        );
        let model = step(&config, &model, Msg::InputtedValue("Banana".to_string())).model;

        let t = step(&config, &model, Msg::SetAllItems(vec!["Apple"]));
        assert!(t.model.selected_items().is_empty());
        assert_eq!(t.model.search_value(), Some(""));
    }

    #[test]
    fn test_set_all_items_clamps_highlight() {
        let config = config();
        let model = with_phase(init(items()), Phase::FocusedOpenedHighlighted { highlight_index: 2 });

        let t = step(&config, &model, Msg::SetAllItems(vec!["Apple"]));
        assert_eq!(t.model.phase().highlight_index(), Some(0));

        let t = step(&config, &t.model, Msg::SetAllItems(Vec::new()));
        assert_eq!(t.model.phase(), Phase::FocusedOpened);
    }

    #[test]
    fn test_set_selected_items_truncates_in_single_select() {
        let config = config();
        let t = step(&config, &init(items()), Msg::SetSelectedItems(vec!["Banana", "Cherry"]));
        assert_eq!(t.model.selected_items(), &["Banana"]);
        assert_eq!(t.model.search_value(), Some("Banana"));
    }

    #[test]
    fn test_set_input_value_only_in_search_mode() {
        let config = config();
        let t = step(&config, &init(items()), Msg::SetInputValue("che".to_string()));
        assert_eq!(t.model.search_value(), Some("che"));

        let select_only = init(items()).with_input_mode(InputMode::SelectOnly);
        let t = step(&config, &select_only, Msg::SetInputValue("che".to_string()));
        assert_eq!(t.model, select_only);
    }

    #[test]
    fn test_set_highlight_index() {
        let config = config();
        let highlighted = with_phase(init(items()), Phase::FocusedOpenedHighlighted { highlight_index: 0 });

        let t = step(&config, &highlighted, Msg::SetHighlightIndex(2));
        assert_eq!(t.model.phase().highlight_index(), Some(2));

        let t = step(&config, &highlighted, Msg::SetHighlightIndex(3));
        assert_eq!(t.model, highlighted);

        let opened = with_phase(init(items()), Phase::FocusedOpened);
        assert_eq!(step(&config, &opened, Msg::SetHighlightIndex(1)).model, opened);
    }

    #[test]
    fn test_set_mode_to_single_select_leaves_chip() {
        let config = config();
        let model = with_phase(
            init(items())
                .with_select_mode(SelectMode::multi())
                .with_selected_items(vec!["Apple", "Banana"]),
            Phase::SelectedItemHighlighted { focused_index: 1 },
        );
        let t = step(
            &config,
            &model,
            Msg::SetMode {
                select_mode: Some(SelectMode::SingleSelect),
                input_mode: None,
            },
        );
        assert_eq!(t.model.selected_items(), &["Apple"]);
        assert_eq!(t.model.phase(), Phase::FocusedClosed);
        assert_eq!(t.effects, vec![Effect::FocusInput]);
    }

    #[test]
    fn test_set_mode_entering_search_shows_selection() {
        let config = config();
        let model = init(items())
            .with_input_mode(InputMode::SelectOnly)
            .with_selected_items(vec!["Cherry"]);
        let t = step(
            &config,
            &model,
            Msg::SetMode {
                select_mode: None,
                input_mode: Some(InputMode::search("")),
            },
        );
        assert_eq!(t.model.search_value(), Some("Cherry"));
    }

    #[test]
    fn test_update_does_not_mutate_input_model() {
        let config = config();
        let model = init(items());
        let before = model.clone();
        let _ = step(&config, &model, Msg::FocusedInput);
        assert_eq!(model, before);
    }
}
