use std::fmt;

use serde::{Deserialize, Serialize};

/// Swappable teleport behaviour held by a warrior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeleportStrategy {
    Succeeds,
    Fails,
}

impl TeleportStrategy {
    pub fn teleport(self) -> TeleportOutcome {
        match self {
            TeleportStrategy::Succeeds => TeleportOutcome::Succeeded,
            TeleportStrategy::Fails => TeleportOutcome::Failed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeleportOutcome {
    Succeeded,
    Failed,
}

impl TeleportOutcome {
    pub fn label(self) -> &'static str {
        match self {
            TeleportOutcome::Succeeded => "Teleports Away",
            TeleportOutcome::Failed => "Fails at Teleporting",
        }
    }
}

impl fmt::Display for TeleportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
