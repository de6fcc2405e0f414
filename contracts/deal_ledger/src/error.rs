use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Configuration record absent
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller is not the configured administrator
    Unauthorized = 10,

    // ============================================
    // LOOKUP ERRORS (20-29)
    // ============================================
    /// No deal with this identifier
    NoSuchDeal = 20,
    /// No active investment with this identifier
    NoSuchInvestment = 21,
    /// Deal was already accepted or rejected
    DealAlreadyDecided = 22,

    // ============================================
    // FUNDING ERRORS (30-39)
    // ============================================
    /// Amount overshoots the target, or breaks the minimum / exact-fill rule
    CapacityExceeded = 30,
    /// Freeze start reached (strict timing only)
    FundingWindowClosed = 31,

    // ============================================
    // DEAL TERMS ERRORS (40-49)
    // ============================================
    /// Target must be positive
    InvalidTargetAmount = 40,
    /// Maturity must be after freeze start
    InvalidMaturityTimestamp = 41,
    /// Minimum contribution must be positive
    InvalidMinContribution = 42,
    /// Target must be at least the minimum contribution
    TargetBelowMinContribution = 43,

    // ============================================
    // SETTLEMENT ERRORS (50-59)
    // ============================================
    /// Settlement attempted too early (strict timing only)
    NotMaturedYet = 50,
    /// Checked arithmetic overflowed
    ArithmeticOverflow = 51,

    // ============================================
    // OPERATIONAL ERRORS (60-69)
    // ============================================
    /// Contract is paused
    ContractPaused = 60,
}
