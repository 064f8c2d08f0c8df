//! Logging and debugging facilities for combobox state.
//!
//! This module provides:
//! - Target and span names for filtering `tracing` output by subsystem
//! - Wrapper macros with consistent target naming
//! - [`ModelDebug`], a human-readable listing of a model for debug logs
//!
//! # Tracing Integration
//!
//! The state machine is instrumented with the `tracing` crate. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("lattice_combobox_core::update=trace")
//!     .init();
//! ```
//!
//! # Debug Visualization
//!
//! ```
//! use lattice_combobox_core::{init, Config, ItemId};
//! use lattice_combobox_core::logging::ModelDebug;
//!
//! let config = Config::<&'static str>::new(|s| ItemId::from(*s), |s| s.to_string());
//! let model = init(vec!["Apple", "Banana"]);
//!
//! let listing = ModelDebug::new(&config, &model).to_string();
//! assert!(listing.contains("blurred"));
//! assert!(listing.contains("Banana"));
//! ```

use std::fmt;

use crate::config::Config;
use crate::model::Model;
use crate::selectors::{self, ItemStatus};

/// Span names for spans opened outside `#[instrument]`.
pub mod span_names {
    /// Controller dispatch.
    pub const DISPATCH: &str = "lattice_combobox::dispatch";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "lattice_combobox_core";
    /// State transition target.
    pub const UPDATE: &str = "lattice_combobox_core::update";
    /// Signal/slot target.
    pub const SIGNAL: &str = "lattice_combobox_core::signal";
    /// Selector target.
    pub const SELECTORS: &str = "lattice_combobox_core::selectors";
}

/// Style options for model listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebugStyle {
    /// ASCII status markers.
    Ascii,
    /// Unicode status markers.
    #[default]
    Unicode,
    /// Single-line summary without the item listing.
    Compact,
}

/// Configuration for [`ModelDebug`] output.
#[derive(Debug, Clone)]
pub struct DebugFormatOptions {
    /// The listing style.
    pub style: DebugStyle,
    /// Whether to show item ids next to item text.
    pub show_ids: bool,
    /// Whether to show the pending skip-once queue.
    pub show_skip_once: bool,
    /// Maximum number of visible items to list (None for unlimited).
    pub max_items: Option<usize>,
}

impl Default for DebugFormatOptions {
    fn default() -> Self {
        Self {
            style: DebugStyle::default(),
            show_ids: true,
            show_skip_once: true,
            max_items: None,
        }
    }
}

impl DebugFormatOptions {
    /// Create options for a one-line summary.
    pub fn compact() -> Self {
        Self {
            style: DebugStyle::Compact,
            show_ids: false,
            ..Default::default()
        }
    }

    /// Create options for minimal output.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_skip_once: false,
            ..Default::default()
        }
    }
}

/// Debug utility that renders a model as a readable listing.
///
/// Intended for logs and test failure output, never for rendering a widget.
pub struct ModelDebug<'a, T> {
    config: &'a Config<T>,
    model: &'a Model<T>,
    options: DebugFormatOptions,
}

impl<'a, T> ModelDebug<'a, T> {
    /// Create a listing with default options.
    pub fn new(config: &'a Config<T>, model: &'a Model<T>) -> Self {
        Self {
            config,
            model,
            options: DebugFormatOptions::default(),
        }
    }

    /// Create a listing with custom options.
    pub fn with_options(config: &'a Config<T>, model: &'a Model<T>, options: DebugFormatOptions) -> Self {
        Self { config, model, options }
    }

    fn marker(&self, status: ItemStatus) -> &'static str {
        match (self.options.style, status) {
            (DebugStyle::Unicode, ItemStatus::Unselected) => "  ",
            (DebugStyle::Unicode, ItemStatus::Highlighted) => "\u{25b8} ",
            (DebugStyle::Unicode, ItemStatus::Selected) => "\u{2713} ",
            (DebugStyle::Unicode, ItemStatus::SelectedAndHighlighted) => "\u{25b8}\u{2713}",
            (_, ItemStatus::Unselected) => "  ",
            (_, ItemStatus::Highlighted) => "> ",
            (_, ItemStatus::Selected) => "* ",
            (_, ItemStatus::SelectedAndHighlighted) => ">*",
        }
    }
}

impl<T: Clone> ModelDebug<'_, T> {
    fn fmt_compact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible = selectors::to_visible_items(self.config, self.model);
        write!(
            f,
            "{} input={:?} selected={} visible={}",
            self.model.phase().tag(),
            selectors::to_current_input_value(self.config, self.model),
            self.model.selected_items().len(),
            visible.len(),
        )?;
        if self.options.show_skip_once && !self.model.skip_once().is_empty() {
            write!(f, " skip={:?}", self.model.skip_once())?;
        }
        Ok(())
    }
}

impl<T: Clone> fmt::Display for ModelDebug<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.style == DebugStyle::Compact {
            return self.fmt_compact(f);
        }

        let model = self.model;
        let phase = model.phase();
        write!(f, "Combobox [{}]", phase.tag())?;
        if let Some(index) = phase.highlight_index() {
            write!(f, " highlight={index}")?;
        }
        if let Some(index) = phase.focused_index() {
            write!(f, " focused={index}")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "  input: {:?}",
            selectors::to_current_input_value(self.config, model)
        )?;

        let selected: Vec<String> = model
            .selected_items()
            .iter()
            .map(|item| self.config.item_input_value(item))
            .collect();
        writeln!(f, "  selected: {selected:?}")?;

        if self.options.show_skip_once && !model.skip_once().is_empty() {
            let pending: Vec<&str> = model.skip_once().iter().map(|t| t.as_str()).collect();
            writeln!(f, "  skip-once: {pending:?}")?;
        }

        let visible = selectors::to_visible_items(self.config, model);
        writeln!(f, "  items ({} visible of {}):", visible.len(), model.all_items().len())?;
        let limit = self.options.max_items.unwrap_or(usize::MAX);
        for item in visible.iter().take(limit) {
            let status = selectors::to_item_status(self.config, model, item);
            write!(f, "    {} {}", self.marker(status), self.config.item_input_value(item))?;
            if self.options.show_ids {
                write!(f, " [{}]", self.config.item_id(item))?;
            }
            writeln!(f)?;
        }
        if visible.len() > limit {
            writeln!(f, "    ... {} more", visible.len() - limit)?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for ModelDebug<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelDebug")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros bound to the core
/// target.
#[macro_export]
macro_rules! combobox_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! combobox_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}
