use anyhow::Result;

use crate::{
    entities::{position_event_id, stake_detail_id, EntityKind},
    error::MappingError,
    pb::xdc::staking::v1::{Account, HarvestEvent, Pool, StakeDetail, StakeEvent, UnstakeEvent},
    repository::{ReadRepository, ReadRepositoryExt, Repository},
};

/// A change to the position of `account` in `pool`, which must already exist.
#[derive(Clone, Copy, Debug)]
pub struct PositionUpdate<'a> {
    pub pool: &'a Pool,
    pub account: &'a Account,
    /// uint256 as big-endian signed bytes.
    pub amount: &'a [u8],
    pub timestamp: u64,
    pub tx_hash: &'a [u8],
}

impl PositionUpdate<'_> {
    fn event_id(&self) -> String {
        position_event_id(self.tx_hash, &self.pool.id, &self.account.id)
    }

    fn stake_detail_id(&self) -> String {
        stake_detail_id(&self.pool.id, &self.account.id)
    }
}

/// Loads the pool or fails with [`MappingError::PoolNotFound`].
pub fn require_pool<R: ReadRepository + ?Sized>(repository: &R, pool_id: &str) -> Result<Pool> {
    repository
        .get::<Pool>(pool_id)?
        .ok_or_else(|| MappingError::PoolNotFound { pool_id: pool_id.to_string() }.into())
}

/// Replaces the current position with the staked amount and logs a `StakeEvent`.
pub fn record_stake<R: Repository + ?Sized>(
    repository: &mut R,
    update: &PositionUpdate<'_>,
) -> Result<()> {
    repository.save(
        StakeDetail {
            id: update.stake_detail_id(),
            pool: update.pool.id.clone(),
            account: update.account.id.clone(),
            amount: update.amount.to_vec(),
            timestamp: update.timestamp,
        }
        .into(),
    )?;

    repository.save(
        StakeEvent {
            id: update.event_id(),
            pool: update.pool.id.clone(),
            account: update.account.id.clone(),
            amount: update.amount.to_vec(),
            timestamp: update.timestamp,
        }
        .into(),
    )
}

/// Drops the current position, if any, and logs an `UnstakeEvent`.
pub fn record_unstake<R: Repository + ?Sized>(
    repository: &mut R,
    update: &PositionUpdate<'_>,
) -> Result<()> {
    repository.remove(EntityKind::StakeDetail, &update.stake_detail_id())?;

    repository.save(
        UnstakeEvent {
            id: update.event_id(),
            pool: update.pool.id.clone(),
            account: update.account.id.clone(),
            amount: update.amount.to_vec(),
            timestamp: update.timestamp,
        }
        .into(),
    )
}

/// Logs a `HarvestEvent`. The position is left untouched.
pub fn record_harvest<R: Repository + ?Sized>(
    repository: &mut R,
    update: &PositionUpdate<'_>,
) -> Result<()> {
    repository.save(
        HarvestEvent {
            id: update.event_id(),
            pool: update.pool.id.clone(),
            account: update.account.id.clone(),
            amount: update.amount.to_vec(),
            timestamp: update.timestamp,
        }
        .into(),
    )
}
