//! Lattice Combobox - a headless combobox/autocomplete state manager.
//!
//! This is the umbrella crate. It re-exports the state machine from
//! `lattice-combobox-core` and adds the pieces a host needs to wire it up:
//!
//! - **Accessibility**: ARIA attribute bundles and AccessKit nodes
//! - **Keyboard**: raw key names mapped to events
//! - **Controller**: [`Combobox`], which owns a model and reports through signals
//!
//! # Example
//!
//! ```
//! use lattice_combobox::prelude::*;
//!
//! let config = Config::<&'static str>::new(|s| ItemId::from(*s), |s| s.to_string());
//! let mut model = init(vec!["Apple", "Banana", "Cherry"]);
//!
//! for msg in [Msg::FocusedInput, Msg::InputtedValue("ch".to_string())] {
//!     let (next, effects) = update(&config, &model, msg).into_parts();
//!     run_effects(&effects, &mut EffectCallbacks::new());
//!     model = next;
//! }
//!
//! assert_eq!(selectors::to_visible_items(&config, &model), vec!["Cherry"]);
//! ```

pub use lattice_combobox_core::*;

pub mod accessibility;
mod combobox;
pub mod keyboard;
pub mod prelude;

pub use accessibility::{AccessibleRole, AriaAttributes};
pub use combobox::Combobox;
pub use keyboard::{Key, KeyParseError, KeyboardMsg, key_to_msg};
