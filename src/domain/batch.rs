// src/domain/batch.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle of a batch. Progress only moves forward in practice, but the
/// record accepts any status an editor submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Fermenting,
    Harvested,
    Ready,
}

impl BatchStatus {
    /// Lifecycle order, used for the admin status select.
    pub const ALL: [BatchStatus; 3] = [
        BatchStatus::Fermenting,
        BatchStatus::Harvested,
        BatchStatus::Ready,
    ];

    /// Wire/form value.
    pub fn as_str(self) -> &'static str {
        match self {
            BatchStatus::Fermenting => "fermenting",
            BatchStatus::Harvested => "harvested",
            BatchStatus::Ready => "ready",
        }
    }

    /// Human label for badges and select options.
    pub fn label(self) -> &'static str {
        match self {
            BatchStatus::Fermenting => "Fermenting",
            BatchStatus::Harvested => "Harvested",
            BatchStatus::Ready => "Ready to Enjoy",
        }
    }

    pub fn is_harvested(self) -> bool {
        matches!(self, BatchStatus::Harvested | BatchStatus::Ready)
    }

    pub fn is_ready(self) -> bool {
        self == BatchStatus::Ready
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown batch status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for BatchStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BatchStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// The single batch shown by the tracker and edited by the admin form.
///
/// Date fields are display text and are never parsed; `status` alone decides
/// which checkpoints count as reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRecord {
    pub batch_code: String,
    pub fermentation_started: String,
    pub harvest_date: String,
    pub best_before: String,
    pub status: BatchStatus,
}

impl Default for BatchRecord {
    fn default() -> Self {
        Self {
            batch_code: "OBL-2026-001".to_string(),
            fermentation_started: "18 Jan 2026 | 10:00 PM".to_string(),
            harvest_date: "21 Jan 2026 | 11:00 AM".to_string(),
            best_before: "21 Feb 2026".to_string(),
            status: BatchStatus::Ready,
        }
    }
}
