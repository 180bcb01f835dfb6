use substreams::store::{StoreAdd, StoreAddInt64, StoreNew};

use crate::{
    entities::{EntityKind, POOL_COUNTER_ID},
    pb::xdc::staking::v1::{staking_event::Event, StakingEvents},
};

/// Counts registered pools. The count at a registration's ordinal is the id of that pool.
#[substreams::handlers::store]
pub fn store_pool_count(events: StakingEvents, store: StoreAddInt64) {
    let key = EntityKind::PoolCounter.store_key(POOL_COUNTER_ID);
    for ordinal in registration_ordinals(&events) {
        store.add(ordinal, &key, 1);
    }
}

/// Ordinals of the pool registrations of the block.
pub fn registration_ordinals(events: &StakingEvents) -> Vec<u64> {
    events
        .events
        .iter()
        .filter(|event| matches!(event.event, Some(Event::PoolRegistered(_))))
        .map(|event| event.ordinal)
        .collect()
}
