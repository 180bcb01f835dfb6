use std::collections::BTreeMap;

use anyhow::Result;

use crate::entities::{Entity, EntityKind, Record};

/// Single-key lookups into persisted entities.
pub trait ReadRepository {
    fn load(&self, kind: EntityKind, id: &str) -> Result<Option<Record>>;
}

/// Persistence capability handed to every mapper operation.
pub trait Repository: ReadRepository {
    /// Inserts or replaces the record stored under its kind and id.
    fn save(&mut self, record: Record) -> Result<()>;

    /// Deletes a record. Removing a missing record is not an error.
    fn remove(&mut self, kind: EntityKind, id: &str) -> Result<()>;
}

/// Typed helpers on top of [`ReadRepository`].
pub trait ReadRepositoryExt: ReadRepository {
    fn get<E: Entity>(&self, id: &str) -> Result<Option<E>> {
        Ok(self
            .load(E::KIND, id)?
            .and_then(E::from_record))
    }
}

impl<T: ReadRepository + ?Sized> ReadRepositoryExt for T {}

impl<T: ReadRepository + ?Sized> ReadRepository for &T {
    fn load(&self, kind: EntityKind, id: &str) -> Result<Option<Record>> {
        (**self).load(kind, id)
    }
}

impl<T: ReadRepository + ?Sized> ReadRepository for &mut T {
    fn load(&self, kind: EntityKind, id: &str) -> Result<Option<Record>> {
        (**self).load(kind, id)
    }
}

impl<T: Repository + ?Sized> Repository for &mut T {
    fn save(&mut self, record: Record) -> Result<()> {
        (**self).save(record)
    }

    fn remove(&mut self, kind: EntityKind, id: &str) -> Result<()> {
        (**self).remove(kind, id)
    }
}

/// Repository kept entirely in memory. Used when the mapper runs outside a substreams host
/// and as the pending-write overlay of the entity changes repository.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    records: BTreeMap<(EntityKind, String), Record>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records of the given kind.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.records
            .keys()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    /// All stored records, ordered by kind then id.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

impl ReadRepository for InMemoryRepository {
    fn load(&self, kind: EntityKind, id: &str) -> Result<Option<Record>> {
        Ok(self
            .records
            .get(&(kind, id.to_string()))
            .cloned())
    }
}

impl Repository for InMemoryRepository {
    fn save(&mut self, record: Record) -> Result<()> {
        self.records
            .insert((record.kind(), record.id().to_string()), record);
        Ok(())
    }

    fn remove(&mut self, kind: EntityKind, id: &str) -> Result<()> {
        self.records.remove(&(kind, id.to_string()));
        Ok(())
    }
}
