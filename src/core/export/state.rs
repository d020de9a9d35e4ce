//! Export state machine
//!
//! `Idle → Fetching → Building → Delivering → Idle`, or `→ Failed → Idle`
//! when a stage errors.

use std::fmt;

/// Stage of the export currently in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportState {
    #[default]
    Idle,
    Fetching,
    Building,
    Delivering,
    Failed,
}

impl ExportState {
    /// Whether a new export may start
    pub fn is_idle(&self) -> bool {
        matches!(self, ExportState::Idle)
    }
}

impl fmt::Display for ExportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportState::Idle => "idle",
            ExportState::Fetching => "fetching",
            ExportState::Building => "building",
            ExportState::Delivering => "delivering",
            ExportState::Failed => "failed",
        };
        f.write_str(name)
    }
}
