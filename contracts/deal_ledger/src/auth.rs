use crate::error::Error;
use crate::storage::Storage;
use crate::types::Config;
use soroban_sdk::{Address, Env};

pub struct Guard;

impl Guard {
    /// Authenticate `caller` and check it is the configured administrator.
    ///
    /// Returns the configuration so callers don't read it twice.
    ///
    /// # Errors
    /// - `NotInitialized`: No configuration record
    /// - `Unauthorized`: Caller is not the admin
    pub fn require_admin(env: &Env, caller: &Address) -> Result<Config, Error> {
        let config = Storage::get_config(env)?;
        caller.require_auth();

        if *caller != config.admin {
            return Err(Error::Unauthorized);
        }
        Ok(config)
    }

    pub fn require_not_paused(env: &Env) -> Result<(), Error> {
        if Storage::is_paused(env) {
            return Err(Error::ContractPaused);
        }
        Ok(())
    }
}
