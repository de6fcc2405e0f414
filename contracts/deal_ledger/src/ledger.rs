use crate::auth::Guard;
use crate::error::Error;
use crate::events::InvestedEvent;
use crate::storage::Storage;
use crate::types::{DealStatus, Investment, TimingMode};
use crate::validation::Validator;
use soroban_sdk::{token, Address, Env, Symbol};

pub struct InvestmentLedger;

impl InvestmentLedger {
    /// Record a contribution against a deal
    ///
    /// `caller` pays `amount` of the configured currency to `investor`; the
    /// record is then written under `investor`. Returns the new investment ID.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `ContractPaused`: Contract is paused
    /// - `NoSuchDeal`: Deal doesn't exist
    /// - `DealAlreadyDecided`: Deal was accepted or rejected
    /// - `FundingWindowClosed`: Freeze start reached (strict timing)
    /// - `CapacityExceeded`: Overshoots the target or breaks the minimum / exact-fill rule
    pub fn add_investment(
        env: &Env,
        caller: &Address,
        deal_id: u64,
        investor: &Address,
        amount: i128,
    ) -> Result<u64, Error> {
        let config = Storage::get_config(env)?;
        Guard::require_not_paused(env)?;

        caller.require_auth();

        let mut deal = Storage::get_deal(env, deal_id)?;

        if deal.status.is_decided() {
            return Err(Error::DealAlreadyDecided);
        }

        if config.policy.timing == TimingMode::Strict
            && env.ledger().timestamp() >= deal.freeze_start
        {
            return Err(Error::FundingWindowClosed);
        }

        Validator::validate_contribution(deal.target, deal.raised, deal.min_contribution, amount)?;

        let currency = token::Client::new(env, &config.currency);
        currency.transfer(caller, investor, &amount);

        let investment_id = Storage::next_investment_id(env)?;
        let investment = Investment {
            id: investment_id,
            deal_id,
            investor: investor.clone(),
            amount,
        };
        Storage::insert_investment(env, &investment);

        deal.raised = deal
            .raised
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        if deal.raised == deal.target {
            deal.status = DealStatus::Funded;
        }
        Storage::set_deal(env, &deal);

        env.events().publish(
            (Symbol::new(env, "invested"), deal_id),
            InvestedEvent {
                deal_id,
                investment_id,
                investor: investor.clone(),
                amount,
                raised: deal.raised,
            },
        );

        Ok(investment_id)
    }
}
