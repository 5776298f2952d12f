use super::RecordStore;
use crate::errors::AppResult;
use crate::models::FillUp;

/// Volatile store, handy as a test double for the session flow.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<FillUp>,
    persist_count: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<FillUp>) -> Self {
        Self {
            records,
            persist_count: 0,
        }
    }

    /// How many times the sequence has been written.
    pub fn persist_count(&self) -> usize {
        self.persist_count
    }

    pub fn records(&self) -> &[FillUp] {
        &self.records
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> AppResult<Vec<FillUp>> {
        Ok(self.records.clone())
    }

    fn persist(&mut self, records: &[FillUp]) -> AppResult<()> {
        self.records = records.to_vec();
        self.persist_count += 1;
        Ok(())
    }
}
