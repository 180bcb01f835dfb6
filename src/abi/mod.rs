#![allow(clippy::all)]

pub mod staking_contract;
