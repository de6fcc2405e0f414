#![no_std]

//! # Deal Ledger
//!
//! Fundraising ledger: an administrator opens deals with a target, a funding
//! window and a promised rate, contributions are recorded against each deal's
//! remaining capacity, and the administrator settles every deal by paying the
//! raised capital out or unwinding its investments.
//!
//! | Phase      | Entry point(s)                                  |
//! |------------|-------------------------------------------------|
//! | Bootstrap  | `initialize`, `set_policy`, `pause`, `unpause`  |
//! | Deals      | `create_deal`                                   |
//! | Funding    | `add_investment`                                |
//! | Settlement | `decide_deal`, `unwind_deal`, `refund_investment` |
//! | Queries    | `get_deal`, `deal_status`, `get_investment`, ... |

mod auth;
mod error;
mod events;
mod interest;
mod ledger;
mod registry;
mod settlement;
mod storage;
mod types;
mod validation;


pub use error::Error;
pub use events::*;
pub use types::{
    Config, Deal, DealStatus, Investment, RejectionPayout, SettlementPolicy, TimingMode,
    SECONDS_PER_YEAR,
};

use auth::Guard;
use ledger::InvestmentLedger;
use registry::DealRegistry;
use settlement::SettlementEngine;
use storage::Storage;

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

#[contract]
pub struct DealLedger;

#[contractimpl]
impl DealLedger {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the ledger
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(
        env: Env,
        admin: Address,
        currency: Address,
        policy: SettlementPolicy,
    ) -> Result<(), Error> {
        if Storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        Storage::set_config(&env, &Config {
            admin,
            currency,
            policy,
        });
        Storage::reset_counters(&env);
        Storage::set_paused(&env, false);

        Ok(())
    }

    /// Replace the settlement policy (Admin only)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    pub fn set_policy(env: Env, caller: Address, policy: SettlementPolicy) -> Result<(), Error> {
        let mut config = Guard::require_admin(&env, &caller)?;
        config.policy = policy;
        Storage::set_config(&env, &config);
        Ok(())
    }

    /// Pause deal creation and funding (Admin only)
    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        Guard::require_admin(&env, &caller)?;
        Storage::set_paused(&env, true);
        Ok(())
    }

    /// Resume deal creation and funding (Admin only)
    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        Guard::require_admin(&env, &caller)?;
        Storage::set_paused(&env, false);
        Ok(())
    }

    // ============================================
    // DEALS & FUNDING
    // ============================================

    /// Create a deal and return its ID (Admin only)
    #[allow(clippy::too_many_arguments)]
    pub fn create_deal(
        env: Env,
        caller: Address,
        min_contribution: i128,
        target: i128,
        freeze_start: u64,
        maturity: u64,
        asset_id: u64,
        interest_rate: u32,
        beneficiary: Address,
    ) -> Result<u64, Error> {
        DealRegistry::create_deal(
            &env,
            &caller,
            min_contribution,
            target,
            freeze_start,
            maturity,
            asset_id,
            interest_rate,
            &beneficiary,
        )
    }

    /// Record a contribution and return the investment ID
    pub fn add_investment(
        env: Env,
        caller: Address,
        deal_id: u64,
        investor: Address,
        amount: i128,
    ) -> Result<u64, Error> {
        InvestmentLedger::add_investment(&env, &caller, deal_id, &investor, amount)
    }

    // ============================================
    // SETTLEMENT
    // ============================================

    /// Pay the flat maturity payout to every investor of a deal (Admin only)
    pub fn unwind_deal(env: Env, caller: Address, deal_id: u64) -> Result<(), Error> {
        SettlementEngine::unwind_deal(&env, &caller, deal_id)
    }

    /// Return a single investment to its investor (Admin only)
    pub fn refund_investment(env: Env, caller: Address, investment_id: u64) -> Result<(), Error> {
        SettlementEngine::refund_investment(&env, &caller, investment_id)
    }

    /// Accept or reject a deal (Admin only)
    pub fn decide_deal(
        env: Env,
        caller: Address,
        deal_id: u64,
        approved: bool,
    ) -> Result<(), Error> {
        SettlementEngine::decide_deal(&env, &caller, deal_id, approved)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn get_config(env: Env) -> Result<Config, Error> {
        Storage::get_config(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        Storage::is_paused(&env)
    }

    pub fn get_deal(env: Env, deal_id: u64) -> Result<Deal, Error> {
        Storage::get_deal(&env, deal_id)
    }

    /// Deal status at the current ledger time, including `AwaitingDecision`
    pub fn deal_status(env: Env, deal_id: u64) -> Result<DealStatus, Error> {
        let deal = Storage::get_deal(&env, deal_id)?;
        Ok(deal.status_at(env.ledger().timestamp()))
    }

    pub fn get_investment(env: Env, investment_id: u64) -> Result<Investment, Error> {
        Storage::get_investment(&env, investment_id).ok_or(Error::NoSuchInvestment)
    }

    /// IDs of the active investments of a deal, oldest first
    pub fn deal_investments(env: Env, deal_id: u64) -> Vec<u64> {
        Storage::deal_investments(&env, deal_id)
    }

    pub fn deal_count(env: Env) -> u64 {
        Storage::deal_count(&env)
    }

    pub fn investment_count(env: Env) -> u64 {
        Storage::investment_count(&env)
    }

    /// Per-investor payout `unwind_deal` would transfer for this deal
    pub fn quote_interest(env: Env, deal_id: u64) -> Result<i128, Error> {
        let deal = Storage::get_deal(&env, deal_id)?;
        interest::deal_payout(&deal).ok_or(Error::ArithmeticOverflow)
    }
}
