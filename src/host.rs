use anyhow::{anyhow, Result};
use substreams::store::StoreGet;

use crate::{
    entities::{EntityKind, Record},
    pb::xdc::staking::v1::{Account, Pool},
    repository::ReadRepository,
    sequence::pool_counter,
};

/// Read-only view of the host stores as they were at the beginning of the block.
///
/// Only the entities the mapper ever loads are backed by a store: the pool counter, pools and
/// the set of known accounts. Positions and logs are write-only from the mapper's point of
/// view and always resolve to `None`.
pub struct HostSnapshot<'a, P, C, A> {
    pools: &'a P,
    pool_count: &'a C,
    accounts: &'a A,
}

impl<'a, P, C, A> HostSnapshot<'a, P, C, A>
where
    P: StoreGet<Pool>,
    C: StoreGet<i64>,
    A: StoreGet<i64>,
{
    pub fn new(pools: &'a P, pool_count: &'a C, accounts: &'a A) -> Self {
        Self { pools, pool_count, accounts }
    }
}

impl<P, C, A> ReadRepository for HostSnapshot<'_, P, C, A>
where
    P: StoreGet<Pool>,
    C: StoreGet<i64>,
    A: StoreGet<i64>,
{
    fn load(&self, kind: EntityKind, id: &str) -> Result<Option<Record>> {
        let key = kind.store_key(id);
        match kind {
            EntityKind::PoolCounter => self
                .pool_count
                .get_first(&key)
                .map(|count| {
                    u64::try_from(count)
                        .map(|count| pool_counter(count).into())
                        .map_err(|_| anyhow!("Negative pool count {} under {}", count, key))
                })
                .transpose(),
            EntityKind::Pool => Ok(self
                .pools
                .get_first(&key)
                .map(Record::Pool)),
            EntityKind::Account => Ok(self
                .accounts
                .has_first(&key)
                .then(|| Account { id: id.to_string() }.into())),
            EntityKind::StakeDetail |
            EntityKind::StakeEvent |
            EntityKind::UnstakeEvent |
            EntityKind::HarvestEvent => Ok(None),
        }
    }
}
