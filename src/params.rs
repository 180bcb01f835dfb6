use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::address::parse_address;

/// Module parameters, passed as a query string, e.g.
/// `staking_contract=xdc0123456789abcdef0123456789abcdef01234567`.
#[derive(Debug, Deserialize)]
struct RawParams {
    staking_contract: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// Address of the staking contract whose logs are indexed.
    pub staking_contract: [u8; 20],
}

impl Params {
    pub fn parse(params: &str) -> Result<Self> {
        let raw: RawParams = serde_qs::from_str(params)
            .map_err(|e| anyhow!("Failed to parse params {:?}: {}", params, e))?;
        Ok(Params { staking_contract: parse_address(&raw.staking_contract)? })
    }
}
