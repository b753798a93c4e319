use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::TetherError;

/// The two host-provided surfaces a session can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ContainerKind {
    Sidebar,
    Panel,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 2] = [ContainerKind::Sidebar, ContainerKind::Panel];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::Sidebar => "sidebar",
            ContainerKind::Panel => "panel",
        }
    }

    /// The other container kind.
    pub fn other(&self) -> ContainerKind {
        match self {
            ContainerKind::Sidebar => ContainerKind::Panel,
            ContainerKind::Panel => ContainerKind::Sidebar,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerKind {
    type Err = TetherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sidebar" => Ok(ContainerKind::Sidebar),
            "panel" => Ok(ContainerKind::Panel),
            other => Err(TetherError::UnknownContainerKind(other.to_string())),
        }
    }
}
