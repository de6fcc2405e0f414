use crate::types::{Deal, DealStatus, RATE_DENOMINATOR, SECONDS_PER_YEAR};

/// Calculate the flat settlement payout owed to every investor of a deal
///
/// Formula:
/// payout = target × (rate + 100) × (maturity − freeze_start) / (100 × SECONDS_PER_YEAR)
///
/// The amount does not depend on an investor's own contribution. Division
/// truncates.
///
/// Example:
/// - target: 1,000,000
/// - rate: 5%
/// - term: one year
/// - payout: 1,000,000 × 105 / 100 = 1,050,000
pub fn calculate_payout(
    target: i128,
    interest_rate: u32,
    freeze_start: u64,
    maturity: u64,
) -> Option<i128> {
    let term = maturity.checked_sub(freeze_start)? as i128;
    let factor = (interest_rate as i128).checked_add(RATE_DENOMINATOR)?;
    let denominator = RATE_DENOMINATOR.checked_mul(SECONDS_PER_YEAR as i128)?;

    target
        .checked_mul(factor)?
        .checked_mul(term)?
        .checked_div(denominator)
}

/// Payout for a deal on its own terms, or on collapsed terms once rejected.
pub fn deal_payout(deal: &Deal) -> Option<i128> {
    if deal.status == DealStatus::Rejected {
        return rejected_payout(deal);
    }
    calculate_payout(deal.target, deal.interest_rate, deal.freeze_start, deal.maturity)
}

/// Payout once a rejection collapses the terms (maturity at freeze start, no rate).
///
/// Always zero; kept as a computation so the forfeit path and the unwind path
/// share one formula.
pub fn rejected_payout(deal: &Deal) -> Option<i128> {
    calculate_payout(deal.target, 0, deal.freeze_start, deal.freeze_start)
}
