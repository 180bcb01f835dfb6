//! Maps decoded staking contract events onto entity records.
//!
//! Every handler is a linear validate, resolve, mutate sequence against a [`Repository`]:
//! pool registrations allocate the next pool id, position events require an existing pool,
//! upsert the account and then update the position and append a log record.

use anyhow::{Context, Result};

use crate::{
    entities::decimal,
    pb::xdc::staking::v1::{
        staking_event::Event, Account, Pool, PoolRegistered, PositionChanged, StakingEvent,
    },
    repository::Repository,
    sequence::{PoolCounterSequence, Sequence},
};

pub mod accounts;
pub mod positions;
pub mod registrar;

pub use accounts::get_or_create_account;
pub use positions::{record_harvest, record_stake, record_unstake, require_pool, PositionUpdate};
pub use registrar::{build_pool, register_pool};

/// Delivery metadata of an event.
#[derive(Clone, Copy, Debug)]
pub struct Envelope<'a> {
    pub tx_hash: &'a [u8],
    pub block_timestamp: u64,
}

impl<'a> From<&'a StakingEvent> for Envelope<'a> {
    fn from(event: &'a StakingEvent) -> Self {
        Envelope { tx_hash: &event.tx_hash, block_timestamp: event.block_timestamp }
    }
}

pub struct EventMapper<R, S = PoolCounterSequence> {
    repository: R,
    sequence: S,
}

impl<R: Repository> EventMapper<R, PoolCounterSequence> {
    /// Creates a mapper whose pool ids continue from the counter persisted in `repository`.
    pub fn resume(repository: R) -> Result<Self> {
        let sequence = PoolCounterSequence::resume(&repository)?;
        Ok(Self::new(repository, sequence))
    }
}

impl<R: Repository, S: Sequence> EventMapper<R, S> {
    pub fn new(repository: R, sequence: S) -> Self {
        Self { repository, sequence }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn sequence(&self) -> &S {
        &self.sequence
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    /// Handles `events` in order, stopping at the first failure.
    pub fn handle_events<'a, I>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a StakingEvent>,
    {
        events.into_iter().try_for_each(|event| {
            self.handle_event(event).with_context(|| {
                format!("event at ordinal {} of block {}", event.ordinal, event.block_number)
            })
        })
    }

    pub fn handle_event(&mut self, event: &StakingEvent) -> Result<()> {
        let envelope = Envelope::from(event);
        match &event.event {
            Some(Event::PoolRegistered(registration)) => self
                .handle_pool_registered(registration)
                .map(|_| ()),
            Some(Event::Staked(staked)) => self.handle_staked(envelope, staked),
            Some(Event::Unstaked(unstaked)) => self.handle_unstaked(envelope, unstaked),
            Some(Event::Harvested(harvested)) => self.handle_harvested(envelope, harvested),
            None => Ok(()),
        }
    }

    pub fn handle_pool_registered(&mut self, registration: &PoolRegistered) -> Result<Pool> {
        register_pool(&mut self.repository, &mut self.sequence, registration)
    }

    pub fn handle_staked(&mut self, envelope: Envelope<'_>, staked: &PositionChanged) -> Result<()> {
        let (pool, account) = self.resolve(staked)?;
        record_stake(&mut self.repository, &position_update(envelope, staked, &pool, &account))
    }

    pub fn handle_unstaked(
        &mut self,
        envelope: Envelope<'_>,
        unstaked: &PositionChanged,
    ) -> Result<()> {
        let (pool, account) = self.resolve(unstaked)?;
        record_unstake(&mut self.repository, &position_update(envelope, unstaked, &pool, &account))
    }

    pub fn handle_harvested(
        &mut self,
        envelope: Envelope<'_>,
        harvested: &PositionChanged,
    ) -> Result<()> {
        let (pool, account) = self.resolve(harvested)?;
        record_harvest(&mut self.repository, &position_update(envelope, harvested, &pool, &account))
    }

    // The pool check runs before the account upsert so that a bad pool id writes nothing.
    fn resolve(&mut self, change: &PositionChanged) -> Result<(Pool, Account)> {
        let pool = require_pool(&self.repository, &decimal(&change.pool_id))?;
        let account = get_or_create_account(&mut self.repository, &change.user)?;
        Ok((pool, account))
    }
}

fn position_update<'a>(
    envelope: Envelope<'a>,
    change: &'a PositionChanged,
    pool: &'a Pool,
    account: &'a Account,
) -> PositionUpdate<'a> {
    PositionUpdate {
        pool,
        account,
        amount: &change.amount,
        timestamp: envelope.block_timestamp,
        tx_hash: envelope.tx_hash,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::{EntityKind, Record, POOL_COUNTER_ID},
        error::MappingError,
        pb::xdc::staking::v1::{
            HarvestEvent, PoolCounter, StakeDetail, StakeEvent, UnstakeEvent,
        },
        repository::{InMemoryRepository, ReadRepository, ReadRepositoryExt},
    };
    use hex_literal::hex;
    use std::cell::Cell;
    use substreams::scalar::BigInt;

    const TOKEN: [u8; 20] = hex!("1111111111111111111111111111111111111111");
    const REWARD: [u8; 20] = hex!("2222222222222222222222222222222222222222");
    const USER: [u8; 20] = hex!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
    const USER_ID: &str = "xdcaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    fn uint(value: u64) -> Vec<u8> {
        BigInt::from(value).to_signed_bytes_be()
    }

    fn registration(name: &str) -> PoolRegistered {
        PoolRegistered {
            token_address: TOKEN.to_vec(),
            reward_address: REWARD.to_vec(),
            reward_multiplier: uint(3),
            reward_divider: uint(100),
            item: uint(9),
            name: name.to_string(),
        }
    }

    fn position(pool_id: u64, amount: u64) -> PositionChanged {
        PositionChanged {
            user: USER.to_vec(),
            amount: uint(amount),
            pool_id: uint(pool_id),
            time: uint(1_700_000_000),
        }
    }

    fn envelope(tx_hash: &[u8], block_timestamp: u64) -> Envelope<'_> {
        Envelope { tx_hash, block_timestamp }
    }

    fn event(tx_hash: u8, block_timestamp: u64, event: Event) -> StakingEvent {
        StakingEvent {
            tx_hash: vec![tx_hash],
            ordinal: 0,
            block_number: 1,
            block_timestamp,
            event: Some(event),
        }
    }

    fn mapper() -> EventMapper<InMemoryRepository> {
        EventMapper::resume(InMemoryRepository::new()).unwrap()
    }

    fn pool_not_found(err: &anyhow::Error) -> Option<&MappingError> {
        err.downcast_ref::<MappingError>()
    }

    #[test]
    fn pool_ids_are_sequential_from_one() {
        let mut mapper = mapper();

        let ids = (0..5)
            .map(|i| {
                mapper
                    .handle_pool_registered(&registration(&format!("pool {i}")))
                    .unwrap()
                    .id
            })
            .collect::<Vec<_>>();

        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        let counter: PoolCounter = mapper
            .repository()
            .get(POOL_COUNTER_ID)
            .unwrap()
            .unwrap();
        assert_eq!(counter.count, 5);
        assert_eq!(mapper.repository().count(EntityKind::PoolCounter), 1);
        assert_eq!(mapper.repository().count(EntityKind::Pool), 5);
    }

    #[test]
    fn pool_ids_continue_after_resume() {
        let mut first = mapper();
        first
            .handle_pool_registered(&registration("a"))
            .unwrap();
        first
            .handle_pool_registered(&registration("b"))
            .unwrap();

        let mut resumed = EventMapper::resume(first.into_repository()).unwrap();
        let pool = resumed
            .handle_pool_registered(&registration("c"))
            .unwrap();
        assert_eq!(pool.id, "3");
    }

    #[test]
    fn registered_pool_uses_canonical_addresses() {
        let mut mapper = mapper();
        let pool = mapper
            .handle_pool_registered(&registration("Gold"))
            .unwrap();

        assert_eq!(
            pool,
            Pool {
                id: "1".to_string(),
                token_address: "xdc1111111111111111111111111111111111111111".to_string(),
                reward_address: "xdc2222222222222222222222222222222222222222".to_string(),
                reward_multiplier: uint(3),
                reward_divider: uint(100),
                total_stake_amount: BigInt::zero().to_signed_bytes_be(),
                item: uint(9),
                name: "Gold".to_string(),
            }
        );
        assert_eq!(mapper.repository().get::<Pool>("1").unwrap(), Some(pool));
    }

    #[test]
    fn custom_sequence_is_used_for_pool_ids() {
        let mut mapper =
            EventMapper::new(InMemoryRepository::new(), PoolCounterSequence::starting_after(41));
        let pool = mapper
            .handle_pool_registered(&registration("late"))
            .unwrap();

        assert_eq!(pool.id, "42");
        assert_eq!(mapper.sequence().current(), 42);
    }

    #[test]
    fn account_upsert_is_idempotent() {
        let mut repository = InMemoryRepository::new();

        let first = get_or_create_account(&mut repository, &USER).unwrap();
        let second = get_or_create_account(&mut repository, &USER).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.id, USER_ID);
        assert_eq!(repository.count(EntityKind::Account), 1);
    }

    #[test]
    fn repeated_stake_overwrites_position() {
        let mut mapper = mapper();
        mapper
            .handle_pool_registered(&registration("a"))
            .unwrap();

        mapper
            .handle_staked(envelope(&[0x01], 100), &position(1, 50))
            .unwrap();
        mapper
            .handle_staked(envelope(&[0x02], 200), &position(1, 75))
            .unwrap();

        let detail: StakeDetail = mapper
            .repository()
            .get(&format!("1-{USER_ID}"))
            .unwrap()
            .unwrap();
        assert_eq!(detail.amount, uint(75));
        assert_eq!(detail.timestamp, 200);
        assert_eq!(mapper.repository().count(EntityKind::StakeDetail), 1);
        assert_eq!(mapper.repository().count(EntityKind::StakeEvent), 2);
    }

    #[test]
    fn unstake_without_position_succeeds() {
        let mut mapper = mapper();
        mapper
            .handle_pool_registered(&registration("a"))
            .unwrap();

        mapper
            .handle_unstaked(envelope(&[0x05], 10), &position(1, 10))
            .unwrap();

        assert_eq!(mapper.repository().count(EntityKind::StakeDetail), 0);
        assert_eq!(mapper.repository().count(EntityKind::UnstakeEvent), 1);
    }

    #[test]
    fn position_events_against_missing_pool_write_nothing() {
        let mut mapper = mapper();
        let change = position(7, 10);

        for kind in ["stake", "unstake", "harvest"] {
            let result = match kind {
                "stake" => mapper.handle_staked(envelope(&[0x01], 1), &change),
                "unstake" => mapper.handle_unstaked(envelope(&[0x01], 1), &change),
                _ => mapper.handle_harvested(envelope(&[0x01], 1), &change),
            };
            let err = result.unwrap_err();
            assert_eq!(
                pool_not_found(&err),
                Some(&MappingError::PoolNotFound { pool_id: "7".to_string() })
            );
        }

        assert!(mapper.repository().is_empty());
    }

    #[test]
    fn missing_pool_error_message() {
        let mut mapper = mapper();
        let err = mapper
            .handle_staked(envelope(&[0x01], 1), &position(3, 10))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid pool id: 3");
    }

    #[test]
    fn stake_unstake_harvest_scenario() {
        let mut mapper = mapper();
        let events = vec![
            event(0x00, 10, Event::PoolRegistered(registration("main"))),
            event(0x01, 11, Event::Staked(position(1, 100))),
        ];
        mapper.handle_events(&events).unwrap();

        let detail_id = format!("1-{USER_ID}");
        let detail: StakeDetail = mapper
            .repository()
            .get(&detail_id)
            .unwrap()
            .unwrap();
        assert_eq!(
            detail,
            StakeDetail {
                id: detail_id.clone(),
                pool: "1".to_string(),
                account: USER_ID.to_string(),
                amount: uint(100),
                timestamp: 11,
            }
        );
        let stake: StakeEvent = mapper
            .repository()
            .get(&format!("0x01-1-{USER_ID}"))
            .unwrap()
            .unwrap();
        assert_eq!(stake.amount, uint(100));

        mapper
            .handle_event(&event(0x02, 12, Event::Unstaked(position(1, 100))))
            .unwrap();
        assert!(mapper
            .repository()
            .get::<StakeDetail>(&detail_id)
            .unwrap()
            .is_none());
        let unstake: Option<UnstakeEvent> = mapper
            .repository()
            .get(&format!("0x02-1-{USER_ID}"))
            .unwrap();
        assert_eq!(unstake.map(|e| e.timestamp), Some(12));

        mapper
            .handle_event(&event(0x03, 13, Event::Harvested(position(1, 5))))
            .unwrap();
        let harvest: HarvestEvent = mapper
            .repository()
            .get(&format!("0x03-1-{USER_ID}"))
            .unwrap()
            .unwrap();
        assert_eq!(harvest.amount, uint(5));
        assert_eq!(harvest.account, USER_ID);
        assert_eq!(mapper.repository().count(EntityKind::StakeDetail), 0);

        let repository = mapper.repository();
        assert_eq!(repository.count(EntityKind::Account), 1);
        assert_eq!(repository.count(EntityKind::StakeEvent), 1);
        assert_eq!(repository.count(EntityKind::UnstakeEvent), 1);
        assert_eq!(repository.count(EntityKind::HarvestEvent), 1);
    }

    #[test]
    fn handle_events_stops_at_first_failure() {
        let mut mapper = mapper();
        let events = vec![
            event(0x01, 1, Event::Staked(position(1, 10))),
            event(0x02, 2, Event::PoolRegistered(registration("never"))),
        ];

        let err = mapper.handle_events(&events).unwrap_err();
        assert_eq!(err.to_string(), "event at ordinal 0 of block 1");
        assert_eq!(
            pool_not_found(&err),
            Some(&MappingError::PoolNotFound { pool_id: "1".to_string() })
        );
        assert!(mapper.repository().is_empty());
    }

    /// Counts pool loads on top of an in-memory repository.
    struct CountingRepository {
        inner: InMemoryRepository,
        pool_loads: Cell<usize>,
    }

    impl ReadRepository for CountingRepository {
        fn load(&self, kind: EntityKind, id: &str) -> Result<Option<Record>> {
            if kind == EntityKind::Pool {
                self.pool_loads.set(self.pool_loads.get() + 1);
            }
            self.inner.load(kind, id)
        }
    }

    impl Repository for CountingRepository {
        fn save(&mut self, record: Record) -> Result<()> {
            self.inner.save(record)
        }

        fn remove(&mut self, kind: EntityKind, id: &str) -> Result<()> {
            self.inner.remove(kind, id)
        }
    }

    #[test]
    fn position_events_load_the_pool_once() {
        let repository =
            CountingRepository { inner: InMemoryRepository::new(), pool_loads: Cell::new(0) };
        let mut mapper = EventMapper::resume(repository).unwrap();
        mapper
            .handle_pool_registered(&registration("a"))
            .unwrap();

        for (i, kind) in ["stake", "unstake", "harvest"].into_iter().enumerate() {
            let tx_hash = [i as u8];
            let before = mapper.repository().pool_loads.get();
            match kind {
                "stake" => mapper.handle_staked(envelope(&tx_hash, 1), &position(1, 10)),
                "unstake" => mapper.handle_unstaked(envelope(&tx_hash, 1), &position(1, 10)),
                _ => mapper.handle_harvested(envelope(&tx_hash, 1), &position(1, 10)),
            }
            .unwrap();
            assert_eq!(mapper.repository().pool_loads.get() - before, 1, "{kind}");
        }
    }

    #[test]
    fn recorded_position_refers_to_the_given_pool() {
        let mut repository = InMemoryRepository::new();
        let pool = Pool { id: "4".to_string(), ..Default::default() };
        let account = Account { id: USER_ID.to_string() };
        let amount = uint(30);

        record_stake(
            &mut repository,
            &PositionUpdate {
                pool: &pool,
                account: &account,
                amount: &amount,
                timestamp: 5,
                tx_hash: &[0x0a],
            },
        )
        .unwrap();

        let detail: StakeDetail = repository
            .get(&format!("4-{USER_ID}"))
            .unwrap()
            .unwrap();
        assert_eq!(detail.pool, "4");
        assert_eq!(detail.amount, amount);
        assert!(repository
            .get::<StakeEvent>(&format!("0x0a-4-{USER_ID}"))
            .unwrap()
            .is_some());
    }

    #[test]
    fn event_without_payload_is_ignored() {
        let mut mapper = mapper();
        let empty = StakingEvent { event: None, ..event(0x01, 1, Event::Staked(position(1, 1))) };

        mapper.handle_event(&empty).unwrap();
        assert!(mapper.repository().is_empty());
    }
}
