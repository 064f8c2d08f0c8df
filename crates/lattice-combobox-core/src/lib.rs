//! Core state machine for Lattice comboboxes.
//!
//! This crate is the framework-agnostic heart of an autocomplete/combobox
//! control. It never renders anything and never touches a host UI; it only
//! computes state:
//!
//! - **Config**: caller-supplied identity, display, filter and empty-item functions
//! - **Model**: the interaction state, with phases as a tagged union
//! - **Update**: the pure transition `(config, model, msg) -> (model, effects)`
//! - **Selectors**: read-only projections such as visible items and input text
//! - **Effects**: focus and scroll requests, executed by the host
//! - **Signals**: a small signal/slot type for host notifications
//!
//! # Example
//!
//! ```
//! use lattice_combobox_core::{init, selectors, update, Config, Effect, ItemId, Msg, Phase};
//!
//! let config = Config::<&'static str>::new(|s| ItemId::from(*s), |s| s.to_string());
//! let model = init(vec!["Apple", "Banana", "Cherry"]);
//!
//! // The host reports focus; the dropdown opens.
//! let model = update(&config, &model, Msg::FocusedInput).model;
//! assert_eq!(model.phase(), Phase::FocusedOpened);
//!
//! // Selecting an item closes it and shows the item's text.
//! let transition = update(&config, &model, Msg::PressedItem("Banana"));
//! assert!(transition.effects.is_empty());
//! assert_eq!(selectors::to_current_input_value(&config, &transition.model), "Banana");
//! ```

mod config;
mod effect;
mod error;
pub mod logging;
mod model;
mod msg;
pub mod selectors;
pub mod signal;
mod update;

pub use config::{
    Config, ConfigBuilder, DEFAULT_NAMESPACE, DeterministicFilter, IsEmptyItem, ItemId, ToItemId,
    ToItemInputValue, substring_filter,
};
pub use effect::{Effect, EffectCallbacks, EffectHandler, EffectSignals, run_effects};
pub use error::{Error, Result};
pub use logging::{DebugFormatOptions, DebugStyle, ModelDebug};
pub use model::{InputMode, Model, Phase, SelectMode, SelectedItemListDirection, init};
pub use msg::{HorizontalDirection, Msg, MsgType, VerticalDirection};
pub use selectors::ItemStatus;
pub use signal::{ConnectionId, Signal};
pub use update::{Transition, update};

static_assertions::assert_impl_all!(Config<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Model<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(EffectSignals<String>: Send, Sync);
