use anyhow::{anyhow, Result};
use substreams::scalar::BigInt;
use substreams_ethereum::{pb::eth::v2::Log, Event as AbiEvent};

use crate::{
    abi::staking_contract::events as abi,
    pb::xdc::staking::v1::{staking_event::Event, PoolRegistered, PositionChanged},
};

/// Decodes a staking contract log.
///
/// Returns `Ok(None)` for logs that do not have the shape of a staking event, and an error when
/// a log matches an event but its payload cannot be decoded.
pub fn decode_log(log: &Log) -> Result<Option<Event>> {
    let event = if abi::Pool::match_log(log) {
        Event::PoolRegistered(decode::<abi::Pool>(log)?.into())
    } else if abi::Stake::match_log(log) {
        let ev = decode::<abi::Stake>(log)?;
        Event::Staked(position_changed(ev.u_user, ev.u_amount, ev.u_pool, ev.u_time))
    } else if abi::UnStake::match_log(log) {
        let ev = decode::<abi::UnStake>(log)?;
        Event::Unstaked(position_changed(ev.u_user, ev.u_amount, ev.u_pool, ev.u_time))
    } else if abi::Harvested::match_log(log) {
        let ev = decode::<abi::Harvested>(log)?;
        Event::Harvested(position_changed(ev.u_user, ev.u_amount, ev.u_pool, ev.u_time))
    } else {
        return Ok(None);
    };

    Ok(Some(event))
}

fn decode<E: AbiEvent>(log: &Log) -> Result<E> {
    E::decode(log).map_err(|e| anyhow!("Failed to decode {} event: {}", E::NAME, e))
}

impl From<abi::Pool> for PoolRegistered {
    fn from(ev: abi::Pool) -> Self {
        PoolRegistered {
            token_address: ev.u_tokenaddress,
            reward_address: ev.u_reward_address,
            reward_multiplier: ev.u_reward_multiplier.to_signed_bytes_be(),
            reward_divider: ev.u_reward_divider.to_signed_bytes_be(),
            item: ev.u_item.to_signed_bytes_be(),
            name: ev.u_name,
        }
    }
}

// uint256 values travel as big-endian signed bytes, the encoding of `BigInt` across the package.
fn position_changed(user: Vec<u8>, amount: BigInt, pool: BigInt, time: BigInt) -> PositionChanged {
    PositionChanged {
        user,
        amount: amount.to_signed_bytes_be(),
        pool_id: pool.to_signed_bytes_be(),
        time: time.to_signed_bytes_be(),
    }
}
