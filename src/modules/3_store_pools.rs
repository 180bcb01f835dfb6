use substreams::store::{StoreGet, StoreGetInt64, StoreNew, StoreSet, StoreSetProto};

use crate::{
    entities::{EntityKind, POOL_COUNTER_ID},
    mapper::build_pool,
    pb::xdc::staking::v1::{staking_event::Event, Pool, StakingEvents},
};

#[substreams::handlers::store]
pub fn store_pools(events: StakingEvents, pool_count: StoreGetInt64, store: StoreSetProto<Pool>) {
    for (ordinal, key, pool) in registered_pools(&events, &pool_count) {
        store.set(ordinal, key, &pool);
    }
}

/// Pools registered in the block with their store key. Each pool takes its id from the
/// counter as of its registration ordinal.
pub fn registered_pools<C: StoreGet<i64>>(
    events: &StakingEvents,
    pool_count: &C,
) -> Vec<(u64, String, Pool)> {
    let counter_key = EntityKind::PoolCounter.store_key(POOL_COUNTER_ID);
    events
        .events
        .iter()
        .filter_map(|event| match &event.event {
            Some(Event::PoolRegistered(registration)) => Some((event.ordinal, registration)),
            _ => None,
        })
        .map(|(ordinal, registration)| {
            let id = pool_count
                .get_at(ordinal, &counter_key)
                .and_then(|count| u64::try_from(count).ok())
                .unwrap_or_else(|| panic!("pool counter missing at ordinal {}", ordinal));
            let pool = build_pool(id, registration);
            (ordinal, EntityKind::Pool.store_key(&pool.id), pool)
        })
        .collect()
}
