use anyhow::{anyhow, bail, Result};

/// Prefix XDC explorers and wallets use in place of `0x`.
pub const ADDRESS_PREFIX: &str = "xdc";

/// Canonical string form of an address: `xdc` followed by the lowercase hex body.
///
/// This is the storage key of an `Account` and the representation of every address column.
pub fn canonical_address(address: &[u8]) -> String {
    format!("{ADDRESS_PREFIX}{}", hex::encode(address))
}

/// Parses a 20 byte address written with a `0x`, `xdc` or no prefix, in any case.
pub fn parse_address(address: &str) -> Result<[u8; 20]> {
    let trimmed = address.trim();
    let lowered = trimmed.to_ascii_lowercase();
    let body = lowered
        .strip_prefix("0x")
        .or_else(|| lowered.strip_prefix(ADDRESS_PREFIX))
        .unwrap_or(&lowered);

    let bytes =
        hex::decode(body).map_err(|e| anyhow!("Failed to decode address {}: {}", trimmed, e))?;
    if bytes.len() != 20 {
        bail!("Invalid address length for {}: expected 20 bytes, got {}", trimmed, bytes.len());
    }

    let mut out = [0u8; 20];
    out.copy_from_slice(&bytes);
    Ok(out)
}
