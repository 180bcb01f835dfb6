use substreams::store::{StoreGet, StoreGetInt64, StoreGetProto};
use substreams_entity_change::pb::entity::EntityChanges;

use crate::{
    entity_changes::EntityChangesRepository,
    host::HostSnapshot,
    mapper::EventMapper,
    pb::xdc::staking::v1::{Pool, StakingEvents},
};

#[substreams::handlers::map]
pub fn graph_out(
    events: StakingEvents,
    pools: StoreGetProto<Pool>,
    pool_count: StoreGetInt64,
    accounts: StoreGetInt64,
) -> Result<EntityChanges, substreams::errors::Error> {
    block_entity_changes(&events, &pools, &pool_count, &accounts)
}

/// Runs the mapper over the block and emits every write as an entity change.
///
/// State from previous blocks is read from the stores as they were at the start of the block,
/// so each event only sees the writes of the events before it.
pub fn block_entity_changes<P, C, A>(
    events: &StakingEvents,
    pools: &P,
    pool_count: &C,
    accounts: &A,
) -> anyhow::Result<EntityChanges>
where
    P: StoreGet<Pool>,
    C: StoreGet<i64>,
    A: StoreGet<i64>,
{
    let snapshot = HostSnapshot::new(pools, pool_count, accounts);
    let mut mapper = EventMapper::resume(EntityChangesRepository::new(snapshot))?;

    mapper.handle_events(&events.events)?;

    mapper
        .into_repository()
        .to_entity_changes()
}
