use std::fmt;

use substreams::scalar::BigInt;

use crate::pb::xdc::staking::v1::{
    Account, HarvestEvent, Pool, PoolCounter, StakeDetail, StakeEvent, UnstakeEvent,
};

/// Id of the `PoolCounter` singleton.
pub const POOL_COUNTER_ID: &str = "1";

/// Entity types persisted by the mapper. The name doubles as the sink table name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    PoolCounter,
    Pool,
    Account,
    StakeDetail,
    StakeEvent,
    UnstakeEvent,
    HarvestEvent,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::PoolCounter => "PoolCounter",
            EntityKind::Pool => "Pool",
            EntityKind::Account => "Account",
            EntityKind::StakeDetail => "StakeDetail",
            EntityKind::StakeEvent => "StakeEvent",
            EntityKind::UnstakeEvent => "UnstakeEvent",
            EntityKind::HarvestEvent => "HarvestEvent",
        }
    }

    /// Key of an entity inside a substreams store, e.g. `Pool:1`.
    pub fn store_key(&self, id: &str) -> String {
        format!("{}:{}", self.name(), id)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A persisted record of any entity type.
#[derive(Clone, Debug, PartialEq)]
pub enum Record {
    PoolCounter(PoolCounter),
    Pool(Pool),
    Account(Account),
    StakeDetail(StakeDetail),
    StakeEvent(StakeEvent),
    UnstakeEvent(UnstakeEvent),
    HarvestEvent(HarvestEvent),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::PoolCounter(_) => EntityKind::PoolCounter,
            Record::Pool(_) => EntityKind::Pool,
            Record::Account(_) => EntityKind::Account,
            Record::StakeDetail(_) => EntityKind::StakeDetail,
            Record::StakeEvent(_) => EntityKind::StakeEvent,
            Record::UnstakeEvent(_) => EntityKind::UnstakeEvent,
            Record::HarvestEvent(_) => EntityKind::HarvestEvent,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Record::PoolCounter(e) => &e.id,
            Record::Pool(e) => &e.id,
            Record::Account(e) => &e.id,
            Record::StakeDetail(e) => &e.id,
            Record::StakeEvent(e) => &e.id,
            Record::UnstakeEvent(e) => &e.id,
            Record::HarvestEvent(e) => &e.id,
        }
    }
}

/// Typed access to one variant of [`Record`].
pub trait Entity: Sized + Into<Record> {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn from_record(record: Record) -> Option<Self>;
}

macro_rules! impl_entity {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Entity for $ty {
                const KIND: EntityKind = EntityKind::$ty;

                fn id(&self) -> &str {
                    &self.id
                }

                fn from_record(record: Record) -> Option<Self> {
                    match record {
                        Record::$ty(entity) => Some(entity),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Record {
                fn from(entity: $ty) -> Self {
                    Record::$ty(entity)
                }
            }
        )*
    };
}

impl_entity!(PoolCounter, Pool, Account, StakeDetail, StakeEvent, UnstakeEvent, HarvestEvent);

/// `StakeDetail` id: one live position per pool and account.
pub fn stake_detail_id(pool_id: &str, account_id: &str) -> String {
    format!("{pool_id}-{account_id}")
}

/// Id shared by the stake, unstake and harvest logs.
pub fn position_event_id(tx_hash: &[u8], pool_id: &str, account_id: &str) -> String {
    format!("0x{}-{pool_id}-{account_id}", hex::encode(tx_hash))
}

/// Decimal rendering of a uint256 carried as big-endian signed bytes.
pub fn decimal(value: &[u8]) -> String {
    to_big_int(value).to_string()
}

pub fn to_big_int(value: &[u8]) -> BigInt {
    if value.is_empty() {
        BigInt::zero()
    } else {
        BigInt::from_signed_bytes_be(value)
    }
}
