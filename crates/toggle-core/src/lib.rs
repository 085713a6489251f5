//! Toggles Core Library
//!
//! Feature toggles gated on the build identity (debug or release) the
//! process was compiled as.
//!
//! # Modules
//!
//! - [`build_identity`] — `BuildIdentity` and `resolve_current()`
//! - [`toggle`]         — `ToggleType` capability, `Toggle`, `FixedToggle`
//! - [`catalog`]        — named toggles loaded from JSON
//! - [`presenter`]      — headless work-in-progress screen consuming a toggle
//! - [`error`]          — `ToggleError` / `Result`

pub mod build_identity;
pub mod catalog;
pub mod error;
pub mod obs;
pub mod presenter;
pub mod telemetry;
pub mod toggle;

pub use build_identity::{resolve_current, BuildIdentity};
pub use catalog::{ToggleCatalog, ToggleDefinition, SHOW_WORK_IN_PROGRESS};
pub use error::{Result, ToggleError};
pub use obs::{emit_build_resolved, emit_catalog_loaded, emit_toggle_evaluated};
pub use presenter::{Notice, Visibility, WorkInProgress};
pub use telemetry::init_tracing;
pub use toggle::{FixedToggle, Toggle, ToggleType};
