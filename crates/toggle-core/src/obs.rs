//! Structured observability hooks for toggle resolution.
//!
//! Identity resolution and catalog loads are emitted at `info!` level;
//! individual toggle evaluations at `debug!` because they are frequent.

use std::path::Path;

use tracing::{debug, info};

use crate::build_identity::BuildIdentity;

/// Emit event: the build identity was resolved for this process.
pub fn emit_build_resolved(identity: BuildIdentity) {
    info!(event = "build.resolved", identity = %identity);
}

/// Emit event: a toggle was evaluated against an identity.
pub fn emit_toggle_evaluated(identity: BuildIdentity, enabled: bool) {
    debug!(event = "toggle.evaluated", identity = %identity, enabled = enabled);
}

/// Emit event: a toggle catalog was loaded from disk.
pub fn emit_catalog_loaded(path: &Path, toggles: usize) {
    info!(event = "catalog.loaded", path = %path.display(), toggles = toggles);
}
