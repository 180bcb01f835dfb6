use anyhow::Result;

use crate::{
    address::canonical_address,
    pb::xdc::staking::v1::Account,
    repository::{ReadRepositoryExt, Repository},
};

/// Returns the account of `address`, creating it on first sight.
pub fn get_or_create_account<R: Repository + ?Sized>(
    repository: &mut R,
    address: &[u8],
) -> Result<Account> {
    let id = canonical_address(address);
    if let Some(account) = repository.get::<Account>(&id)? {
        return Ok(account);
    }

    let account = Account { id };
    repository.save(account.clone().into())?;
    Ok(account)
}
