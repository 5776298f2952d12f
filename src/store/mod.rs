//! Persistence boundary for fill-up records.
//!
//! Every pass reloads from the store; nothing is cached between calls.

mod json_file;
mod memory;
pub mod oplog;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::errors::AppResult;
use crate::models::FillUp;

/// Durable home of the whole record sequence.
pub trait RecordStore {
    /// Read every stored record. A store that was never written is empty.
    fn load(&self) -> AppResult<Vec<FillUp>>;

    /// Replace the stored sequence with `records`.
    fn persist(&mut self, records: &[FillUp]) -> AppResult<()>;
}

/// In-memory, append-only view of the records of one pass.
#[derive(Debug, Default, Clone)]
pub struct Journal {
    records: Vec<FillUp>,
}

impl Journal {
    pub fn load<S: RecordStore + ?Sized>(store: &S) -> AppResult<Self> {
        Ok(Self {
            records: store.load()?,
        })
    }

    pub fn append(&mut self, record: FillUp) {
        self.records.push(record);
    }

    pub fn persist<S: RecordStore + ?Sized>(&self, store: &mut S) -> AppResult<()> {
        store.persist(&self.records)
    }

    pub fn records(&self) -> &[FillUp] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
