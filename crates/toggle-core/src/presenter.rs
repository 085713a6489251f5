//! Headless model of the screen that gates unfinished work behind a toggle.
//!
//! The screen reads its toggle when it appears to decide whether the
//! work-in-progress control is shown. Activating the control produces a
//! single notice telling the user the feature isn't finished.

use serde::{Deserialize, Serialize};

use crate::catalog::{ToggleCatalog, SHOW_WORK_IN_PROGRESS};
use crate::error::Result;
use crate::toggle::{Toggle, ToggleType};

/// Whether the gated control is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    pub fn is_hidden(&self) -> bool {
        matches!(self, Visibility::Hidden)
    }
}

/// Alert shown when the work-in-progress control is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub actions: Vec<String>,
}

impl Notice {
    fn unfinished() -> Self {
        Self {
            title: "Shhh...".to_string(),
            message: "This isn't finished yet".to_string(),
            actions: vec!["Ok".to_string()],
        }
    }
}

/// Screen state for the toggled work-in-progress control.
#[derive(Debug, Clone)]
pub struct WorkInProgress<T: ToggleType> {
    toggle: T,
    visibility: Option<Visibility>,
}

impl WorkInProgress<Toggle> {
    /// Build the screen from the catalog's `show_work_in_progress` toggle,
    /// evaluated for the running build.
    pub fn from_catalog(catalog: &ToggleCatalog) -> Result<Self> {
        Ok(Self::with_toggle(
            catalog.toggle_for_active(SHOW_WORK_IN_PROGRESS)?,
        ))
    }
}

impl<T: ToggleType> WorkInProgress<T> {
    pub fn with_toggle(toggle: T) -> Self {
        Self {
            toggle,
            visibility: None,
        }
    }

    /// Read the toggle and settle the control's visibility.
    pub fn on_appear(&mut self) -> Visibility {
        let visibility = if self.toggle.enabled() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        self.visibility = Some(visibility);
        visibility
    }

    /// Visibility from the last `on_appear`, `None` before the screen appeared.
    pub fn visibility(&self) -> Option<Visibility> {
        self.visibility
    }

    /// Handle activation of the control.
    pub fn activate(&self) -> Notice {
        Notice::unfinished()
    }
}
