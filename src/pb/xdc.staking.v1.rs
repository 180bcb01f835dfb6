// @generated
/// All decoded staking contract events of a block, in log order.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StakingEvents {
    #[prost(message, repeated, tag="1")]
    pub events: ::prost::alloc::vec::Vec<StakingEvent>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StakingEvent {
    /// Hash of the emitting transaction.
    #[prost(bytes="vec", tag="1")]
    pub tx_hash: ::prost::alloc::vec::Vec<u8>,
    /// Ordinal of the log within the block.
    #[prost(uint64, tag="2")]
    pub ordinal: u64,
    #[prost(uint64, tag="3")]
    pub block_number: u64,
    /// Block timestamp in seconds.
    #[prost(uint64, tag="4")]
    pub block_timestamp: u64,
    #[prost(oneof="staking_event::Event", tags="10, 11, 12, 13")]
    pub event: ::core::option::Option<staking_event::Event>,
}
/// Nested message and enum types in `StakingEvent`.
pub mod staking_event {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Event {
        #[prost(message, tag="10")]
        PoolRegistered(super::PoolRegistered),
        #[prost(message, tag="11")]
        Staked(super::PositionChanged),
        #[prost(message, tag="12")]
        Unstaked(super::PositionChanged),
        #[prost(message, tag="13")]
        Harvested(super::PositionChanged),
    }
}
/// Payload of `Pool(address,address,uint256,uint256,uint256,string)`.
/// uint256 values are big-endian signed bytes.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolRegistered {
    #[prost(bytes="vec", tag="1")]
    pub token_address: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="2")]
    pub reward_address: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="3")]
    pub reward_multiplier: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="4")]
    pub reward_divider: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="5")]
    pub item: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag="6")]
    pub name: ::prost::alloc::string::String,
}
/// Payload shared by `Stake`, `UnStake` and `Harvested`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PositionChanged {
    #[prost(bytes="vec", tag="1")]
    pub user: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="2")]
    pub amount: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="3")]
    pub pool_id: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="4")]
    pub time: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoolCounter {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(uint64, tag="2")]
    pub count: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Pool {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub token_address: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub reward_address: ::prost::alloc::string::String,
    #[prost(bytes="vec", tag="4")]
    pub reward_multiplier: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="5")]
    pub reward_divider: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="6")]
    pub total_stake_amount: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes="vec", tag="7")]
    pub item: ::prost::alloc::vec::Vec<u8>,
    #[prost(string, tag="8")]
    pub name: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Account {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StakeDetail {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub pool: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub account: ::prost::alloc::string::String,
    #[prost(bytes="vec", tag="4")]
    pub amount: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag="5")]
    pub timestamp: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StakeEvent {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub pool: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub account: ::prost::alloc::string::String,
    #[prost(bytes="vec", tag="4")]
    pub amount: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag="5")]
    pub timestamp: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnstakeEvent {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub pool: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub account: ::prost::alloc::string::String,
    #[prost(bytes="vec", tag="4")]
    pub amount: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag="5")]
    pub timestamp: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HarvestEvent {
    #[prost(string, tag="1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub pool: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub account: ::prost::alloc::string::String,
    #[prost(bytes="vec", tag="4")]
    pub amount: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag="5")]
    pub timestamp: u64,
}
// @@protoc_insertion_point(module)
