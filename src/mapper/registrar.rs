use anyhow::Result;
use substreams::{log, scalar::BigInt};

use crate::{
    address::canonical_address,
    pb::xdc::staking::v1::{Pool, PoolRegistered},
    repository::Repository,
    sequence::{pool_counter, Sequence},
};

/// Builds the `Pool` record for a registration that was assigned `id`.
///
/// `total_stake_amount` starts at zero and is never updated by any handler.
pub fn build_pool(id: u64, registration: &PoolRegistered) -> Pool {
    Pool {
        id: id.to_string(),
        token_address: canonical_address(&registration.token_address),
        reward_address: canonical_address(&registration.reward_address),
        reward_multiplier: registration.reward_multiplier.clone(),
        reward_divider: registration.reward_divider.clone(),
        total_stake_amount: BigInt::zero().to_signed_bytes_be(),
        item: registration.item.clone(),
        name: registration.name.clone(),
    }
}

/// Allocates the next pool id, persists the counter and the new pool.
pub fn register_pool<R: Repository + ?Sized, S: Sequence + ?Sized>(
    repository: &mut R,
    sequence: &mut S,
    registration: &PoolRegistered,
) -> Result<Pool> {
    let id = sequence.next();
    repository.save(pool_counter(sequence.current()).into())?;

    let pool = build_pool(id, registration);
    repository.save(pool.clone().into())?;

    log::debug!("Registered pool {} ({}) for token {}", pool.id, pool.name, pool.token_address);
    Ok(pool)
}
