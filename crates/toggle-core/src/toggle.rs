//! Toggle evaluation and the `ToggleType` capability.
//!
//! A [`Toggle`] is decided once, at construction, by checking whether the
//! build identity belongs to the toggle's activation set. Consumers depend on
//! [`ToggleType`] only, so any value exposing `enabled` can stand in for a
//! real toggle.

use std::sync::Arc;

use crate::build_identity::{resolve_current, BuildIdentity};
use crate::obs;

/// Anything that can answer "is this feature enabled?".
pub trait ToggleType {
    fn enabled(&self) -> bool;
}

/// A toggle evaluated against a single build identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    enabled: bool,
    identity: BuildIdentity,
}

impl Toggle {
    /// Evaluate `activation` against an explicit build identity.
    ///
    /// Duplicates and ordering in `activation` do not matter; an empty set
    /// disables the toggle everywhere.
    pub fn new<I>(activation: I, identity: BuildIdentity) -> Self
    where
        I: IntoIterator<Item = BuildIdentity>,
    {
        let enabled = activation.into_iter().any(|candidate| candidate == identity);
        obs::emit_toggle_evaluated(identity, enabled);
        Self { enabled, identity }
    }

    /// Evaluate `activation` against the running build's identity.
    pub fn for_active<I>(activation: I) -> Self
    where
        I: IntoIterator<Item = BuildIdentity>,
    {
        Self::new(activation, resolve_current())
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The build identity this toggle was evaluated against.
    pub fn identity(&self) -> BuildIdentity {
        self.identity
    }
}

impl ToggleType for Toggle {
    fn enabled(&self) -> bool {
        self.enabled
    }
}

/// A toggle with a preset value, independent of any build identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedToggle {
    pub enabled: bool,
}

impl FixedToggle {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn on() -> Self {
        Self::new(true)
    }

    pub fn off() -> Self {
        Self::new(false)
    }
}

impl ToggleType for FixedToggle {
    fn enabled(&self) -> bool {
        self.enabled
    }
}

impl<T: ToggleType + ?Sized> ToggleType for &T {
    fn enabled(&self) -> bool {
        (**self).enabled()
    }
}

impl<T: ToggleType + ?Sized> ToggleType for Box<T> {
    fn enabled(&self) -> bool {
        (**self).enabled()
    }
}

impl<T: ToggleType + ?Sized> ToggleType for Arc<T> {
    fn enabled(&self) -> bool {
        (**self).enabled()
    }
}
