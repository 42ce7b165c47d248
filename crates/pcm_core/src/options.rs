//! Import options exposed to hosts.
//!
//! Both options are kept for compatibility with host file dialogs and do
//! not change how meshes are built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named import variant selectable in the host dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportVariant {
    #[default]
    #[serde(rename = "OPT_A")]
    OptA,

    #[serde(rename = "OPT_B")]
    OptB,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown import variant '{0}', expected OPT_A or OPT_B")]
pub struct UnknownVariant(pub String);

impl FromStr for ImportVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OPT_A" | "A" => Ok(ImportVariant::OptA),
            "OPT_B" | "B" => Ok(ImportVariant::OptB),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for ImportVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportVariant::OptA => write!(f, "OPT_A"),
            ImportVariant::OptB => write!(f, "OPT_B"),
        }
    }
}

/// Host-facing import settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Reserved flag, currently unused
    pub use_setting: bool,

    /// Reserved variant selector, currently unused
    #[serde(rename = "type")]
    pub variant: ImportVariant,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            use_setting: true,
            variant: ImportVariant::OptA,
        }
    }
}
