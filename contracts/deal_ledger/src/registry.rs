use crate::auth::Guard;
use crate::error::Error;
use crate::events::DealCreatedEvent;
use crate::storage::Storage;
use crate::types::{Deal, DealStatus};
use crate::validation::Validator;
use soroban_sdk::{Address, Env, Symbol};

pub struct DealRegistry;

impl DealRegistry {
    /// Create a new deal (Admin only)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `ContractPaused`: Contract is paused
    /// - `InvalidTargetAmount`: Target must be positive
    /// - `InvalidMaturityTimestamp`: Maturity must be after freeze start
    /// - `InvalidMinContribution`: Minimum contribution must be positive
    /// - `TargetBelowMinContribution`: Target must be ≥ minimum contribution
    #[allow(clippy::too_many_arguments)]
    pub fn create_deal(
        env: &Env,
        caller: &Address,
        min_contribution: i128,
        target: i128,
        freeze_start: u64,
        maturity: u64,
        asset_id: u64,
        interest_rate: u32,
        beneficiary: &Address,
    ) -> Result<u64, Error> {
        Guard::require_admin(env, caller)?;
        Guard::require_not_paused(env)?;

        Validator::validate_deal_terms(min_contribution, target, freeze_start, maturity)?;

        let deal_id = Storage::next_deal_id(env)?;

        let deal = Deal {
            id: deal_id,
            min_contribution,
            target,
            freeze_start,
            maturity,
            asset_id,
            interest_rate,
            beneficiary: beneficiary.clone(),
            raised: 0,
            status: DealStatus::Open,
        };
        Storage::set_deal(env, &deal);

        env.events().publish(
            (Symbol::new(env, "deal_created"), deal_id),
            DealCreatedEvent {
                deal_id,
                min_contribution,
                target,
                freeze_start,
                maturity,
                asset_id,
                interest_rate,
                beneficiary: beneficiary.clone(),
            },
        );

        Ok(deal_id)
    }
}
