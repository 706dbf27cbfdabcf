use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a patch or patch element.
///
/// - upgrade: moves the identity to `resulting_version`
/// - one-off: leaves the identity version unchanged
///
/// The resulting version lives inside the `Upgrade` variant, so switching to
/// `OneOff` drops it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PatchType {
    Upgrade { resulting_version: String },
    OneOff,
}

impl PatchType {
    pub fn upgrade(resulting_version: impl Into<String>) -> Self {
        PatchType::Upgrade {
            resulting_version: resulting_version.into(),
        }
    }

    pub fn is_upgrade(&self) -> bool {
        matches!(self, PatchType::Upgrade { .. })
    }

    pub fn is_one_off(&self) -> bool {
        matches!(self, PatchType::OneOff)
    }

    pub fn resulting_version(&self) -> Option<&str> {
        match self {
            PatchType::Upgrade { resulting_version } => Some(resulting_version),
            PatchType::OneOff => None,
        }
    }
}

impl fmt::Display for PatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchType::Upgrade { .. } => f.write_str("upgrade"),
            PatchType::OneOff => f.write_str("one-off"),
        }
    }
}
