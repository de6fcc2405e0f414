use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DealCreatedEvent {
    pub deal_id: u64,
    pub min_contribution: i128,
    pub target: i128,
    pub freeze_start: u64,
    pub maturity: u64,
    pub asset_id: u64,
    pub interest_rate: u32,
    pub beneficiary: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestedEvent {
    pub deal_id: u64,
    pub investment_id: u64,
    pub investor: Address,
    pub amount: i128,
    pub raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnwoundEvent {
    pub deal_id: u64,
    pub investors_paid: u32,
    pub payout_each: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundedEvent {
    pub investment_id: u64,
    pub deal_id: u64,
    pub investor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DealAcceptedEvent {
    pub deal_id: u64,
    pub beneficiary: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DealRejectedEvent {
    pub deal_id: u64,
    pub raised: i128,
    pub investors_paid: u32,
    pub total_paid: i128,
}
