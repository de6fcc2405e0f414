//! Typed access to the two storage tiers.
//!
//! Instance storage holds the configuration record, the pause flag and both ID
//! counters. Deals, investments and the per-deal investment index are
//! persistent entries with their own TTL.

use crate::error::Error;
use crate::types::{Config, Deal, Investment};
use soroban_sdk::{contracttype, Env, Vec};

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Paused,
    DealCounter,
    InvestmentCounter,
    Deal(u64),            // deal_id -> Deal
    Investment(u64),      // investment_id -> Investment
    DealInvestments(u64), // deal_id -> Vec<investment_id>
}

pub struct Storage;

impl Storage {
    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    fn bump_persistent(env: &Env, key: &DataKey) {
        env.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }

    // Config
    pub fn has_config(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Config)
    }

    pub fn get_config(env: &Env) -> Result<Config, Error> {
        let config = env
            .storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)?;
        Self::bump_instance(env);
        Ok(config)
    }

    pub fn set_config(env: &Env, config: &Config) {
        env.storage().instance().set(&DataKey::Config, config);
        Self::bump_instance(env);
    }

    // Pause flag
    pub fn is_paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false)
    }

    pub fn set_paused(env: &Env, paused: bool) {
        env.storage().instance().set(&DataKey::Paused, &paused);
    }

    // Counters
    pub fn deal_count(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::DealCounter)
            .unwrap_or(0)
    }

    pub fn investment_count(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::InvestmentCounter)
            .unwrap_or(0)
    }

    pub fn reset_counters(env: &Env) {
        env.storage().instance().set(&DataKey::DealCounter, &0u64);
        env.storage()
            .instance()
            .set(&DataKey::InvestmentCounter, &0u64);
    }

    /// Advances the deal counter and returns the new value as the next ID.
    pub fn next_deal_id(env: &Env) -> Result<u64, Error> {
        let id = Self::deal_count(env)
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?;
        env.storage().instance().set(&DataKey::DealCounter, &id);
        Ok(id)
    }

    /// Same as [`Storage::next_deal_id`] for investments. IDs are never reused.
    pub fn next_investment_id(env: &Env) -> Result<u64, Error> {
        let id = Self::investment_count(env)
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?;
        env.storage()
            .instance()
            .set(&DataKey::InvestmentCounter, &id);
        Ok(id)
    }

    // Deals
    pub fn get_deal(env: &Env, deal_id: u64) -> Result<Deal, Error> {
        let key = DataKey::Deal(deal_id);
        let deal = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(Error::NoSuchDeal)?;
        Self::bump_persistent(env, &key);
        Ok(deal)
    }

    pub fn set_deal(env: &Env, deal: &Deal) {
        let key = DataKey::Deal(deal.id);
        env.storage().persistent().set(&key, deal);
        Self::bump_persistent(env, &key);
    }

    // Investments
    pub fn get_investment(env: &Env, investment_id: u64) -> Option<Investment> {
        let key = DataKey::Investment(investment_id);
        let investment = env.storage().persistent().get(&key)?;
        Self::bump_persistent(env, &key);
        Some(investment)
    }

    /// Stores a new investment and appends it to its deal's index.
    pub fn insert_investment(env: &Env, investment: &Investment) {
        let key = DataKey::Investment(investment.id);
        env.storage().persistent().set(&key, investment);
        Self::bump_persistent(env, &key);

        let mut index = Self::deal_investments(env, investment.deal_id);
        index.push_back(investment.id);
        Self::set_deal_investments(env, investment.deal_id, &index);
    }

    /// Hard-deletes an investment record without touching the index.
    pub fn delete_investment(env: &Env, investment_id: u64) {
        env.storage()
            .persistent()
            .remove(&DataKey::Investment(investment_id));
    }

    /// Hard-deletes an investment and drops it from its deal's index.
    pub fn remove_investment(env: &Env, investment: &Investment) {
        Self::delete_investment(env, investment.id);

        let mut index = Self::deal_investments(env, investment.deal_id);
        if let Some(pos) = index.first_index_of(investment.id) {
            index.remove(pos);
        }
        Self::set_deal_investments(env, investment.deal_id, &index);
    }

    // Per-deal index
    pub fn deal_investments(env: &Env, deal_id: u64) -> Vec<u64> {
        let key = DataKey::DealInvestments(deal_id);
        match env.storage().persistent().get(&key) {
            Some(index) => {
                Self::bump_persistent(env, &key);
                index
            }
            None => Vec::new(env),
        }
    }

    /// Replaces a deal's index in one write; an empty index drops the key.
    pub fn set_deal_investments(env: &Env, deal_id: u64, index: &Vec<u64>) {
        let key = DataKey::DealInvestments(deal_id);
        if index.is_empty() {
            env.storage().persistent().remove(&key);
        } else {
            env.storage().persistent().set(&key, index);
            Self::bump_persistent(env, &key);
        }
    }
}
