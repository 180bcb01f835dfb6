use anyhow::Result;

use crate::{
    entities::POOL_COUNTER_ID,
    pb::xdc::staking::v1::PoolCounter,
    repository::{ReadRepository, ReadRepositoryExt},
};

/// Hands out unique, increasing integer ids.
pub trait Sequence {
    /// Allocates the next id.
    fn next(&mut self) -> u64;

    /// Last allocated id, `0` before the first allocation.
    fn current(&self) -> u64;
}

/// Sequence behind pool ids. Its state is the `count` of the `PoolCounter` singleton.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolCounterSequence {
    count: u64,
}

impl PoolCounterSequence {
    pub fn starting_after(count: u64) -> Self {
        Self { count }
    }

    /// Resumes from the persisted counter, or from zero if no pool was ever registered.
    pub fn resume<R: ReadRepository + ?Sized>(repository: &R) -> Result<Self> {
        let count = repository
            .get::<PoolCounter>(POOL_COUNTER_ID)?
            .map(|counter| counter.count)
            .unwrap_or_default();
        Ok(Self { count })
    }
}

/// The `PoolCounter` singleton holding `count`.
pub fn pool_counter(count: u64) -> PoolCounter {
    PoolCounter { id: POOL_COUNTER_ID.to_string(), count }
}

impl Sequence for PoolCounterSequence {
    fn next(&mut self) -> u64 {
        self.count += 1;
        self.count
    }

    fn current(&self) -> u64 {
        self.count
    }
}
