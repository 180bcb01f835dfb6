use std::collections::BTreeSet;

use anyhow::Result;
use substreams::scalar::BigInt;
use substreams_entity_change::{
    pb::entity::EntityChanges,
    tables::{Row, Tables},
};

use crate::{
    entities::{to_big_int, EntityKind, Record},
    repository::{InMemoryRepository, ReadRepository, Repository},
};

/// Repository that turns the writes of a block into entity changes for the graph sink.
///
/// Reads fall through pending writes of the current block to `base`, a snapshot of what was
/// persisted before the block. Rows are only emitted by [`Self::to_entity_changes`], one per
/// touched entity, holding its final state for the block.
pub struct EntityChangesRepository<B> {
    base: B,
    pending: InMemoryRepository,
    removed: BTreeSet<(EntityKind, String)>,
}

impl<B: ReadRepository> EntityChangesRepository<B> {
    pub fn new(base: B) -> Self {
        Self { base, pending: InMemoryRepository::new(), removed: BTreeSet::new() }
    }

    pub fn to_entity_changes(self) -> Result<EntityChanges> {
        let mut tables = Tables::new();

        for (kind, id) in &self.removed {
            tables.delete_row(kind.name(), id.as_str());
        }

        for record in self.pending.iter() {
            let (kind, id) = (record.kind(), record.id());
            let row = if self.base.load(kind, id)?.is_some() {
                tables.update_row(kind.name(), id)
            } else {
                tables.create_row(kind.name(), id)
            };
            set_columns(row, record);
        }

        Ok(tables.to_entity_changes())
    }
}

impl<B: ReadRepository> ReadRepository for EntityChangesRepository<B> {
    fn load(&self, kind: EntityKind, id: &str) -> Result<Option<Record>> {
        if self
            .removed
            .contains(&(kind, id.to_string()))
        {
            return Ok(None);
        }
        match self.pending.load(kind, id)? {
            Some(record) => Ok(Some(record)),
            None => self.base.load(kind, id),
        }
    }
}

impl<B: ReadRepository> Repository for EntityChangesRepository<B> {
    fn save(&mut self, record: Record) -> Result<()> {
        self.removed
            .remove(&(record.kind(), record.id().to_string()));
        self.pending.save(record)
    }

    // Positions are not tracked by the host stores, so the deletion is emitted even when the
    // base does not know the record.
    fn remove(&mut self, kind: EntityKind, id: &str) -> Result<()> {
        self.pending.remove(kind, id)?;
        self.removed.insert((kind, id.to_string()));
        Ok(())
    }
}

fn set_columns(row: &mut Row, record: &Record) {
    match record {
        Record::PoolCounter(counter) => {
            row.set("count", BigInt::from(counter.count));
        }
        Record::Pool(pool) => {
            row.set("tokenAddress", &pool.token_address)
                .set("rewardAddress", &pool.reward_address)
                .set("rewardMultiplier", to_big_int(&pool.reward_multiplier))
                .set("rewardDivider", to_big_int(&pool.reward_divider))
                .set("totalStakeAmount", to_big_int(&pool.total_stake_amount))
                .set("item", to_big_int(&pool.item))
                .set("name", &pool.name);
        }
        Record::Account(_) => {}
        Record::StakeDetail(position) => {
            row.set("pool", &position.pool)
                .set("account", &position.account)
                .set("amount", to_big_int(&position.amount))
                .set("timestamp", BigInt::from(position.timestamp));
        }
        Record::StakeEvent(event) => {
            row.set("pool", &event.pool)
                .set("account", &event.account)
                .set("amount", to_big_int(&event.amount))
                .set("timestamp", BigInt::from(event.timestamp));
        }
        Record::UnstakeEvent(event) => {
            row.set("pool", &event.pool)
                .set("account", &event.account)
                .set("amount", to_big_int(&event.amount))
                .set("timestamp", BigInt::from(event.timestamp));
        }
        Record::HarvestEvent(event) => {
            row.set("pool", &event.pool)
                .set("account", &event.account)
                .set("amount", to_big_int(&event.amount))
                .set("timestamp", BigInt::from(event.timestamp));
        }
    }
}
