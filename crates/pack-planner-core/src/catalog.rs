//! Pack-size catalog storage.
//!
//! Stores hand out [`Catalog`] snapshots taken under a read lock, so a request always
//! plans against one consistent set of sizes even while sizes are being edited.

use crate::error::{PlannerError, Result};
use crate::model::Catalog;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// A stored pack size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackSizeRecord {
    pub id: Uuid,
    pub size: u32,
}

impl PackSizeRecord {
    pub fn new(size: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            size,
        }
    }
}

/// Source of the pack sizes current at the time of a request.
///
/// Implementations must reject zero sizes and keep sizes unique.
pub trait PackSizeRepository {
    fn list_pack_sizes(&self) -> Result<Vec<PackSizeRecord>>;
    fn create_pack_size(&self, record: PackSizeRecord) -> Result<PackSizeRecord>;
    /// Replaces the size of the record with `record.id`.
    fn update_pack_size(&self, record: PackSizeRecord) -> Result<PackSizeRecord>;
}

/// Takes a validated catalog snapshot from `repo`.
pub fn snapshot<R: PackSizeRepository + ?Sized>(repo: &R) -> Result<Catalog> {
    let records = repo.list_pack_sizes()?;
    Catalog::new(records.into_iter().map(|r| r.size))
}

#[derive(Debug, Default)]
pub struct InMemoryPackSizeRepository {
    records: RwLock<Vec<PackSizeRecord>>,
}

impl InMemoryPackSizeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a repository with one record per size.
    pub fn with_sizes(sizes: impl IntoIterator<Item = u32>) -> Result<Self> {
        let repo = Self::new();
        for size in sizes {
            repo.create_pack_size(PackSizeRecord::new(size))?;
        }
        Ok(repo)
    }

    /// Restores previously stored records, applying the same checks as
    /// [`PackSizeRepository::create_pack_size`].
    pub fn from_records(records: impl IntoIterator<Item = PackSizeRecord>) -> Result<Self> {
        let repo = Self::new();
        for record in records {
            repo.create_pack_size(record)?;
        }
        Ok(repo)
    }

    pub fn into_records(self) -> Vec<PackSizeRecord> {
        self.records.into_inner()
    }

    pub fn clear(&self) {
        self.records.write().clear();
    }
}

impl PackSizeRepository for InMemoryPackSizeRepository {
    fn list_pack_sizes(&self) -> Result<Vec<PackSizeRecord>> {
        Ok(self.records.read().clone())
    }

    fn create_pack_size(&self, record: PackSizeRecord) -> Result<PackSizeRecord> {
        if record.size == 0 {
            return Err(PlannerError::InvalidPackSize(0));
        }
        let mut records = self.records.write();
        if records.iter().any(|r| r.size == record.size) {
            return Err(PlannerError::DuplicatePackSize(record.size));
        }
        records.push(record);
        debug!(id = %record.id, size = record.size, "pack size created");
        Ok(record)
    }

    fn update_pack_size(&self, record: PackSizeRecord) -> Result<PackSizeRecord> {
        if record.size == 0 {
            return Err(PlannerError::InvalidPackSize(0));
        }
        let mut records = self.records.write();
        if records
            .iter()
            .any(|r| r.size == record.size && r.id != record.id)
        {
            return Err(PlannerError::DuplicatePackSize(record.size));
        }
        let slot = records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(PlannerError::PackSizeNotFound(record.id))?;
        slot.size = record.size;
        debug!(id = %record.id, size = record.size, "pack size updated");
        Ok(*slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_sorted_regardless_of_insert_order() {
        let repo = InMemoryPackSizeRepository::with_sizes([1000, 250, 500]).unwrap();
        let catalog = snapshot(&repo).unwrap();
        assert_eq!(catalog.sizes(), &[250, 500, 1000]);
    }

    #[test]
    fn snapshot_of_empty_repo_is_an_error() {
        let repo = InMemoryPackSizeRepository::new();
        assert!(matches!(snapshot(&repo), Err(PlannerError::EmptyCatalog)));
    }

    #[test]
    fn from_records_keeps_ids_and_rejects_duplicates() {
        let a = PackSizeRecord::new(250);
        let b = PackSizeRecord::new(500);
        let repo = InMemoryPackSizeRepository::from_records([a, b]).unwrap();
        assert_eq!(repo.into_records(), vec![a, b]);

        let dup = PackSizeRecord::new(250);
        assert!(matches!(
            InMemoryPackSizeRepository::from_records([a, dup]),
            Err(PlannerError::DuplicatePackSize(250))
        ));
    }

    #[test]
    fn snapshot_is_unaffected_by_later_updates() {
        let repo = InMemoryPackSizeRepository::with_sizes([250, 500]).unwrap();
        let before = snapshot(&repo).unwrap();
        let first = repo.list_pack_sizes().unwrap()[0];
        repo.update_pack_size(PackSizeRecord {
            id: first.id,
            size: 300,
        })
        .unwrap();
        assert_eq!(before.sizes(), &[250, 500]);
        assert_eq!(snapshot(&repo).unwrap().sizes(), &[300, 500]);
    }
}
