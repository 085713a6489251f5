//! Build identity: which build configuration this process is running under.

use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::ToggleError;
use crate::obs;

/// The build configuration a toggle is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildIdentity {
    Debug,
    Release,
}

static ACTIVE: OnceLock<BuildIdentity> = OnceLock::new();

impl BuildIdentity {
    /// Every build identity, in declaration order.
    pub const ALL: [BuildIdentity; 2] = [BuildIdentity::Debug, BuildIdentity::Release];

    /// The identity of the running build.
    ///
    /// Read from the compiler's `debug_assertions` signal on first use and
    /// cached for the rest of the process. Without that signal the build is
    /// treated as `Release`.
    pub fn active() -> BuildIdentity {
        *ACTIVE.get_or_init(|| {
            let identity = Self::from_debug_assertions(cfg!(debug_assertions));
            obs::emit_build_resolved(identity);
            identity
        })
    }

    fn from_debug_assertions(debug: bool) -> BuildIdentity {
        if debug {
            BuildIdentity::Debug
        } else {
            BuildIdentity::Release
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildIdentity::Debug => "debug",
            BuildIdentity::Release => "release",
        }
    }
}

/// Resolve the identity of the running build. See [`BuildIdentity::active`].
pub fn resolve_current() -> BuildIdentity {
    BuildIdentity::active()
}

impl std::fmt::Display for BuildIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildIdentity {
    type Err = ToggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        BuildIdentity::ALL
            .into_iter()
            .find(|identity| identity.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ToggleError::UnknownIdentity(name.to_string()))
    }
}
