use itertools::Itertools;
use substreams::log;
use substreams_ethereum::{block_view::LogView, pb::eth::v2 as eth};

use crate::{
    events::decode_log,
    params::Params,
    pb::xdc::staking::v1::{staking_event::Event, StakingEvent, StakingEvents},
};

/// Decodes every staking event emitted by the configured contract, in block order.
#[substreams::handlers::map]
pub fn map_events(params: String, block: eth::Block) -> Result<StakingEvents, substreams::errors::Error> {
    let params = Params::parse(&params)?;
    let events = extract_events(&block, block.timestamp_seconds(), &params.staking_contract)?;

    if !events.is_empty() {
        let summary = events
            .iter()
            .filter_map(|event| event.event.as_ref())
            .map(event_name)
            .counts()
            .into_iter()
            .sorted()
            .map(|(name, count)| format!("{name}={count}"))
            .join(", ");
        log::info!("Block {}: {}", block.number, summary);
    }

    Ok(StakingEvents { events })
}

/// Staking events of the successful transactions of `block` whose logs were emitted by
/// `contract`.
pub fn extract_events(
    block: &eth::Block,
    block_timestamp: u64,
    contract: &[u8],
) -> anyhow::Result<Vec<StakingEvent>> {
    block
        .logs()
        .filter(|log| log.address() == contract)
        .filter_map(|log| {
            decode_log(log.log)
                .map(|event| {
                    event.map(|event| StakingEvent {
                        tx_hash: log.receipt.transaction.hash.clone(),
                        ordinal: log.log.ordinal,
                        block_number: block.number,
                        block_timestamp,
                        event: Some(event),
                    })
                })
                .map_err(|e| with_location(e, &log, block.number))
                .transpose()
        })
        .collect()
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::PoolRegistered(_) => "Pool",
        Event::Staked(_) => "Stake",
        Event::Unstaked(_) => "UnStake",
        Event::Harvested(_) => "Harvested",
    }
}

fn with_location(error: anyhow::Error, log: &LogView, block_number: u64) -> anyhow::Error {
    error.context(format!(
        "log {} of tx 0x{} in block {}",
        log.log.index,
        hex::encode(&log.receipt.transaction.hash),
        block_number
    ))
}
