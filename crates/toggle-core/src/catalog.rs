//! Named toggle catalog.
//!
//! A catalog maps toggle names to the build identities they are enabled in.
//! It is read from JSON of the form:
//!
//! ```json
//! {
//!   "toggles": {
//!     "show_work_in_progress": {
//!       "enabled_in": ["debug"],
//!       "description": "Unfinished button on the home screen"
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::build_identity::{resolve_current, BuildIdentity};
use crate::error::{Result, ToggleError};
use crate::obs;
use crate::toggle::Toggle;

/// Name of the toggle gating unfinished work, shipped in [`ToggleCatalog::builtin`].
pub const SHOW_WORK_IN_PROGRESS: &str = "show_work_in_progress";

/// Declaration of one named toggle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ToggleDefinition {
    /// Build identities in which the toggle is enabled.
    #[serde(default)]
    pub enabled_in: Vec<BuildIdentity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ToggleDefinition {
    pub fn new(enabled_in: impl IntoIterator<Item = BuildIdentity>) -> Self {
        Self {
            enabled_in: enabled_in.into_iter().collect(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Evaluate this definition against `identity`.
    pub fn evaluate(&self, identity: BuildIdentity) -> Toggle {
        Toggle::new(self.enabled_in.iter().copied(), identity)
    }
}

/// A set of named toggles, ordered by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ToggleCatalog {
    #[serde(default)]
    pub toggles: BTreeMap<String, ToggleDefinition>,
}

impl ToggleCatalog {
    /// The toggles shipped with the application.
    pub fn builtin() -> Self {
        Self::default().with_definition(
            SHOW_WORK_IN_PROGRESS,
            ToggleDefinition::new([BuildIdentity::Debug])
                .with_description("Reveal work that isn't finished yet"),
        )
    }

    /// Add a toggle enabled in `enabled_in` (builder pattern).
    pub fn with_toggle(
        self,
        name: impl Into<String>,
        enabled_in: impl IntoIterator<Item = BuildIdentity>,
    ) -> Self {
        self.with_definition(name, ToggleDefinition::new(enabled_in))
    }

    pub fn with_definition(mut self, name: impl Into<String>, definition: ToggleDefinition) -> Self {
        self.toggles.insert(name.into(), definition);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ToggleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        obs::emit_catalog_loaded(path, catalog.len());
        Ok(catalog)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn get(&self, name: &str) -> Option<&ToggleDefinition> {
        self.toggles.get(name)
    }

    /// Evaluate the named toggle against `identity`.
    pub fn toggle(&self, name: &str, identity: BuildIdentity) -> Result<Toggle> {
        self.get(name)
            .map(|definition| definition.evaluate(identity))
            .ok_or_else(|| ToggleError::UnknownToggle(name.to_string()))
    }

    /// Evaluate the named toggle against the running build's identity.
    pub fn toggle_for_active(&self, name: &str) -> Result<Toggle> {
        self.toggle(name, resolve_current())
    }

    /// Evaluate every toggle against `identity`, keyed by name.
    pub fn evaluate_all(&self, identity: BuildIdentity) -> BTreeMap<String, bool> {
        self.toggles
            .iter()
            .map(|(name, definition)| (name.clone(), definition.evaluate(identity).enabled()))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.toggles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BuildIdentity::{Debug, Release};

    #[test]
    fn test_builtin_shows_work_in_progress_only_in_debug() {
        let catalog = ToggleCatalog::builtin();
        assert!(catalog.toggle(SHOW_WORK_IN_PROGRESS, Debug).unwrap().enabled());
        assert!(!catalog.toggle(SHOW_WORK_IN_PROGRESS, Release).unwrap().enabled());
    }

    #[test]
    fn test_unknown_toggle_is_an_error() {
        let err = ToggleCatalog::builtin().toggle("nope", Debug).unwrap_err();
        assert!(matches!(err, ToggleError::UnknownToggle(ref name) if name == "nope"));
    }

    #[test]
    fn test_parse_minimal_json() {
        let catalog = ToggleCatalog::from_json_str(
            r#"{"toggles": {"beta": {"enabled_in": ["debug", "release", "debug"]}}}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.toggle("beta", Release).unwrap().enabled());
    }

    #[test]
    fn test_missing_enabled_in_means_disabled() {
        let catalog = ToggleCatalog::from_json_str(r#"{"toggles": {"off": {}}}"#).unwrap();
        assert_eq!(
            catalog.evaluate_all(Debug),
            BTreeMap::from([("off".to_string(), false)])
        );
    }

    #[test]
    fn test_rejects_unknown_fields_and_identities() {
        assert!(matches!(
            ToggleCatalog::from_json_str(r#"{"toggles": {}, "extra": 1}"#),
            Err(ToggleError::Parse(_))
        ));
        assert!(matches!(
            ToggleCatalog::from_json_str(r#"{"toggles": {"x": {"enabled_in": ["staging"]}}}"#),
            Err(ToggleError::Parse(_))
        ));
    }

    #[test]
    fn test_evaluate_all_is_ordered_by_name() {
        let catalog = ToggleCatalog::default()
            .with_toggle("zeta", [Release])
            .with_toggle("alpha", [Debug]);
        let names: Vec<_> = catalog.evaluate_all(Release).into_keys().collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_description_is_optional_in_json() {
        let json = ToggleCatalog::default()
            .with_toggle("plain", [Debug])
            .to_json_pretty()
            .unwrap();
        assert!(!json.contains("description"));
    }
}
