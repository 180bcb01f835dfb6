use anyhow::{Ok, Result};
use regex::Regex;
use std::fs;
use substreams_ethereum::Abigen;

fn main() -> Result<(), anyhow::Error> {
    let contents = fs::read_to_string("abi/staking_contract.abi.json")?;

    // sanitize fields and attributes starting with an underscore
    let regex = Regex::new(r#"("\w+"\s?:\s?")_(\w+")"#)?;
    let sanitized_abi_file = regex.replace_all(contents.as_str(), "${1}u_${2}");

    Abigen::from_bytes("StakingContract", sanitized_abi_file.as_bytes())?
        .generate()?
        .write_to_file("src/abi/staking_contract.rs")?;

    Ok(())
}
