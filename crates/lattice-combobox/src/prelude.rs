//! Prelude module for Lattice Combobox.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use lattice_combobox::prelude::*;
//! ```

// ============================================================================
// State Machine
// ============================================================================

pub use crate::{
    Config, ConfigBuilder, InputMode, ItemId, Model, Msg, Phase, SelectMode,
    SelectedItemListDirection, Transition, init, update,
};
pub use crate::{HorizontalDirection, VerticalDirection};

// ============================================================================
// Selectors and Effects
// ============================================================================

pub use crate::selectors::{self, ItemStatus};
pub use crate::{Effect, EffectCallbacks, EffectHandler, EffectSignals, run_effects};

// ============================================================================
// Host Wiring
// ============================================================================

pub use crate::accessibility::{AccessibleRole, AriaAttributes};
pub use crate::keyboard::{KeyboardMsg, key_to_msg};
pub use crate::signal::{ConnectionId, Signal};
pub use crate::Combobox;
