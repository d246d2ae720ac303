use chrono::NaiveDateTime;
use tpass_core::model::{Period, PeriodStatus, Trip};

use super::{PeriodStore, StoreError, TripStore};

/// simple vector-backed store. stands in for the real persistence
/// collaborator in tests and small embedding callers.
#[derive(Default)]
pub struct MemoryStore {
    periods: Vec<Period>,
    trips: Vec<Trip>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub fn insert_period(&mut self, period: Period) {
        self.periods.push(period);
    }

    pub fn insert_trip(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }
}

impl PeriodStore for MemoryStore {
    fn period(&self, id: &str) -> Result<Option<Period>, StoreError> {
        Ok(self.periods.iter().find(|period| period.id == id).cloned())
    }

    fn active_period(&self) -> Result<Option<Period>, StoreError> {
        Ok(self.periods.iter().find(|period| period.is_active()).cloned())
    }

    fn set_status(
        &mut self,
        id: &str,
        status: PeriodStatus,
        updated_at: NaiveDateTime,
    ) -> Result<(), StoreError> {
        let period = self
            .periods
            .iter_mut()
            .find(|period| period.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("period {}", id)))?;
        period.status = status;
        period.updated_at = updated_at;
        Ok(())
    }
}

impl TripStore for MemoryStore {
    fn trips_for_period(&self, period_id: &str) -> Result<Vec<Trip>, StoreError> {
        Ok(self
            .trips
            .iter()
            .filter(|trip| trip.period_id == period_id)
            .cloned()
            .collect())
    }
}
