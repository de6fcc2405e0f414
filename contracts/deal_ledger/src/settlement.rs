//! Deal-level payout and unwind.
//!
//! Every transfer here is paid from the administrator's account in the
//! configured currency. Each entry point re-reads the deal and its investments;
//! nothing is cached between calls.

use crate::auth::Guard;
use crate::error::Error;
use crate::events::{DealAcceptedEvent, DealRejectedEvent, RefundedEvent, UnwoundEvent};
use crate::interest;
use crate::storage::Storage;
use crate::types::{DealStatus, Investment, RejectionPayout, TimingMode};
use soroban_sdk::{token, Address, Env, Symbol, Vec};

pub struct SettlementEngine;

/// How much each unwound investment receives.
#[derive(Clone, Copy)]
enum Payout {
    /// Same amount for every investor
    Flat(i128),
    /// Each investor's own amount
    Principal,
}

impl SettlementEngine {
    /// Pay every remaining investor of a deal its maturity payout (Admin only)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `NoSuchDeal`: Deal doesn't exist
    /// - `NotMaturedYet`: Maturity not reached (strict timing)
    /// - `ArithmeticOverflow`: Payout overflowed
    pub fn unwind_deal(env: &Env, caller: &Address, deal_id: u64) -> Result<(), Error> {
        let config = Guard::require_admin(env, caller)?;
        let deal = Storage::get_deal(env, deal_id)?;

        if config.policy.timing == TimingMode::Strict && env.ledger().timestamp() < deal.maturity
        {
            return Err(Error::NotMaturedYet);
        }

        let payout_each = interest::deal_payout(&deal).ok_or(Error::ArithmeticOverflow)?;
        let currency = token::Client::new(env, &config.currency);
        let (investors_paid, _) =
            Self::unwind_investments(env, &currency, caller, deal_id, Payout::Flat(payout_each))?;

        env.events().publish(
            (Symbol::new(env, "unwound"), deal_id),
            UnwoundEvent {
                deal_id,
                investors_paid,
                payout_each,
            },
        );

        Ok(())
    }

    /// Return one investment's amount to its investor and delete it (Admin only)
    ///
    /// The deal's raised amount only goes down when the policy sets
    /// `refund_releases_capacity`.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `NoSuchDeal`: Investment doesn't exist
    /// - `CapacityExceeded`: Investment amount is not positive
    pub fn refund_investment(
        env: &Env,
        caller: &Address,
        investment_id: u64,
    ) -> Result<(), Error> {
        let config = Guard::require_admin(env, caller)?;

        let investment = Storage::get_investment(env, investment_id).ok_or(Error::NoSuchDeal)?;
        if investment.amount <= 0 {
            return Err(Error::CapacityExceeded);
        }

        let currency = token::Client::new(env, &config.currency);
        currency.transfer(caller, &investment.investor, &investment.amount);
        Storage::remove_investment(env, &investment);

        if config.policy.refund_releases_capacity {
            let mut deal = Storage::get_deal(env, investment.deal_id)?;
            deal.raised = deal
                .raised
                .checked_sub(investment.amount)
                .ok_or(Error::ArithmeticOverflow)?;
            if deal.status == DealStatus::Funded {
                deal.status = DealStatus::Open;
            }
            Storage::set_deal(env, &deal);
        }

        env.events().publish(
            (Symbol::new(env, "refunded"), investment_id),
            RefundedEvent {
                investment_id,
                deal_id: investment.deal_id,
                investor: investment.investor.clone(),
                amount: investment.amount,
            },
        );

        Ok(())
    }

    /// Accept or reject a deal (Admin only)
    ///
    /// A fully raised deal is accepted whatever `approved` says. Acceptance pays
    /// the raised amount to the beneficiary. Rejection unwinds every investment
    /// with the payout chosen by the rejection policy; the deal terms are kept.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `NoSuchDeal`: Deal doesn't exist
    /// - `DealAlreadyDecided`: Deal already accepted or rejected
    /// - `NotMaturedYet`: Funding window still open (strict timing)
    pub fn decide_deal(
        env: &Env,
        caller: &Address,
        deal_id: u64,
        approved: bool,
    ) -> Result<(), Error> {
        let config = Guard::require_admin(env, caller)?;
        let mut deal = Storage::get_deal(env, deal_id)?;

        if deal.status.is_decided() {
            return Err(Error::DealAlreadyDecided);
        }

        if config.policy.timing == TimingMode::Strict
            && env.ledger().timestamp() < deal.freeze_start
        {
            return Err(Error::NotMaturedYet);
        }

        let currency = token::Client::new(env, &config.currency);

        if deal.raised == deal.target || approved {
            if deal.raised > 0 {
                currency.transfer(caller, &deal.beneficiary, &deal.raised);
            }

            deal.status = DealStatus::Accepted;
            Storage::set_deal(env, &deal);

            env.events().publish(
                (Symbol::new(env, "deal_accepted"), deal_id),
                DealAcceptedEvent {
                    deal_id,
                    beneficiary: deal.beneficiary.clone(),
                    amount: deal.raised,
                },
            );
            return Ok(());
        }

        let payout = match config.policy.rejection_payout {
            RejectionPayout::ForfeitPrincipal => {
                Payout::Flat(interest::rejected_payout(&deal).ok_or(Error::ArithmeticOverflow)?)
            }
            RejectionPayout::ReturnPrincipal => Payout::Principal,
        };

        deal.status = DealStatus::Rejected;
        Storage::set_deal(env, &deal);

        let (investors_paid, total_paid) =
            Self::unwind_investments(env, &currency, caller, deal_id, payout)?;

        env.events().publish(
            (Symbol::new(env, "deal_rejected"), deal_id),
            DealRejectedEvent {
                deal_id,
                raised: deal.raised,
                investors_paid,
                total_paid,
            },
        );

        Ok(())
    }

    /// Pay and delete every non-zero investment of a deal.
    ///
    /// Returns how many investments were settled and the total transferred.
    /// Zero payouts skip the transfer but still delete the record. The index
    /// is read once and written once.
    fn unwind_investments(
        env: &Env,
        currency: &token::Client,
        payer: &Address,
        deal_id: u64,
        payout: Payout,
    ) -> Result<(u32, i128), Error> {
        let mut settled: u32 = 0;
        let mut total_paid: i128 = 0;
        let mut kept: Vec<u64> = Vec::new(env);

        for investment_id in Storage::deal_investments(env, deal_id).iter() {
            let investment: Investment = match Storage::get_investment(env, investment_id) {
                Some(investment) if investment.amount != 0 => investment,
                Some(_) => {
                    kept.push_back(investment_id);
                    continue;
                }
                None => continue,
            };

            let amount = match payout {
                Payout::Flat(each) => each,
                Payout::Principal => investment.amount,
            };

            if amount > 0 {
                currency.transfer(payer, &investment.investor, &amount);
                total_paid = total_paid
                    .checked_add(amount)
                    .ok_or(Error::ArithmeticOverflow)?;
            }

            Storage::delete_investment(env, investment.id);
            settled += 1;
        }

        Storage::set_deal_investments(env, deal_id, &kept);

        Ok((settled, total_paid))
    }
}
