use soroban_sdk::{contracttype, Address};

// Constants
pub const SECONDS_PER_YEAR: u64 = 365 * 24 * 60 * 60;
/// Interest rates are whole percent points; the payout factor is `(rate + 100) / 100`.
pub const RATE_DENOMINATOR: i128 = 100;

/// Stored lifecycle of a deal.
///
/// ```text
/// Open ──(raised == target)──► Funded
/// Open | Funded ──accept──► Accepted
/// Open | Funded ──reject──► Rejected
/// ```
///
/// `AwaitingDecision` is only ever reported by `deal_status`, for an undecided
/// deal whose funding window has closed.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DealStatus {
    /// Accepting investments
    Open = 0,
    /// Raised amount reached the target
    Funded = 1,
    /// Funding window closed, no decision yet
    AwaitingDecision = 2,
    /// Raised capital paid to the beneficiary
    Accepted = 3,
    /// Investments unwound without acceptance
    Rejected = 4,
}

impl DealStatus {
    pub fn is_decided(&self) -> bool {
        matches!(self, DealStatus::Accepted | DealStatus::Rejected)
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deal {
    /// Unique deal ID, first deal is 1
    pub id: u64,
    /// Smallest accepted contribution (except the exact final fill)
    pub min_contribution: i128,
    /// Amount the deal aims to raise
    pub target: i128,
    /// Timestamp at which the funding window closes
    pub freeze_start: u64,
    /// Timestamp at which the deal becomes eligible for settlement
    pub maturity: u64,
    /// Collectible associated with the deal (held by the custody service)
    pub asset_id: u64,
    /// Promised rate in whole percent points
    pub interest_rate: u32,
    /// Receives the raised capital on acceptance
    pub beneficiary: Address,
    /// Running total of recorded investments
    pub raised: i128,
    /// Stored lifecycle; never `AwaitingDecision`
    pub status: DealStatus,
}

impl Deal {
    /// Status as observed at `now`.
    pub fn status_at(&self, now: u64) -> DealStatus {
        if !self.status.is_decided() && now >= self.freeze_start {
            return DealStatus::AwaitingDecision;
        }
        self.status
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Investment {
    pub id: u64,
    pub deal_id: u64,
    pub investor: Address,
    pub amount: i128,
}

/// Whether settlement and funding honour the deal timestamps.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimingMode {
    /// Funding closes at freeze start; accepting and rejecting both need
    /// freeze start; unwinds need maturity
    Strict = 0,
    /// No time guards
    Permissive = 1,
}

/// What each investor receives when an under-raised deal is rejected.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RejectionPayout {
    /// Interest on collapsed terms, which is zero: principal is forfeited
    ForfeitPrincipal = 0,
    /// Each investor gets their own amount back
    ReturnPrincipal = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettlementPolicy {
    pub timing: TimingMode,
    pub rejection_payout: RejectionPayout,
    /// Refunding a single investment also lowers the deal's raised amount
    pub refund_releases_capacity: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Only principal allowed to create, decide and settle deals
    pub admin: Address,
    /// Token used for every transfer
    pub currency: Address,
    pub policy: SettlementPolicy,
}
