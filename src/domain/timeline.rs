// src/domain/timeline.rs

use crate::domain::batch::BatchRecord;

/// One dated milestone on the brewing timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    pub title: &'static str,
    /// Copied verbatim from the record.
    pub date: String,
    pub completed: bool,
}

/// Derive the three checkpoints for a batch, in lifecycle order.
///
/// Fermentation is always reached once a record exists. Harvest is reached
/// from `harvested` onwards and "Best Before" only when the batch is `ready`.
pub fn timeline(record: &BatchRecord) -> [Checkpoint; 3] {
    [
        Checkpoint {
            title: "Fermentation Started",
            date: record.fermentation_started.clone(),
            completed: true,
        },
        Checkpoint {
            title: "Harvest Date",
            date: record.harvest_date.clone(),
            completed: record.status.is_harvested(),
        },
        Checkpoint {
            title: "Best Before",
            date: record.best_before.clone(),
            completed: record.status.is_ready(),
        },
    ]
}
