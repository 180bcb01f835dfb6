use substreams::store::{
    StoreGet, StoreGetProto, StoreNew, StoreSetIfNotExists, StoreSetIfNotExistsInt64,
};

use crate::{
    address::canonical_address,
    entities::{decimal, EntityKind},
    pb::xdc::staking::v1::{staking_event::Event, Pool, StakingEvents},
};

/// Remembers every account that staked, unstaked or harvested in an existing pool.
#[substreams::handlers::store]
pub fn store_accounts(
    events: StakingEvents,
    pools: StoreGetProto<Pool>,
    store: StoreSetIfNotExistsInt64,
) {
    for (ordinal, key) in account_keys(&events, &pools) {
        store.set_if_not_exists(ordinal, key, &1);
    }
}

/// Account keys of the position events whose pool exists at the event's ordinal.
pub fn account_keys<P: StoreGet<Pool>>(events: &StakingEvents, pools: &P) -> Vec<(u64, String)> {
    events
        .events
        .iter()
        .filter_map(|event| match &event.event {
            Some(Event::Staked(position)) |
            Some(Event::Unstaked(position)) |
            Some(Event::Harvested(position)) => Some((event.ordinal, position)),
            Some(Event::PoolRegistered(_)) | None => None,
        })
        .filter(|(ordinal, position)| {
            pools.has_at(*ordinal, EntityKind::Pool.store_key(&decimal(&position.pool_id)))
        })
        .map(|(ordinal, position)| {
            (ordinal, EntityKind::Account.store_key(&canonical_address(&position.user)))
        })
        .collect()
}
