//! boundary contracts toward the persistence collaborator. the engine
//! only ever reads trip/period snapshots and performs a single field
//! update (the period status flip); everything else about storage is the
//! collaborator's business.

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDateTime;
use tpass_core::model::{Period, PeriodStatus, Trip};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Storage backend failure: {0}")]
    Backend(String),
}

/// period records: point lookup by id plus lookup of the single active
/// record. at most one period is active at a time, enforced by the
/// collaborator.
pub trait PeriodStore {
    fn period(&self, id: &str) -> Result<Option<Period>, StoreError>;

    fn active_period(&self) -> Result<Option<Period>, StoreError>;

    /// flips a period's status and stamps `updated_at`. the one mutation
    /// this core ever asks for.
    fn set_status(
        &mut self,
        id: &str,
        status: PeriodStatus,
        updated_at: NaiveDateTime,
    ) -> Result<(), StoreError>;
}

/// trip records, queryable by owning period. order of the returned
/// collection is unspecified; the statistics engine is order-independent.
pub trait TripStore {
    fn trips_for_period(&self, period_id: &str) -> Result<Vec<Trip>, StoreError>;
}
