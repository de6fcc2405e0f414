use crate::error::Error;

pub struct Validator;

impl Validator {
    /// Check the terms of a new deal, in a fixed order so the first broken rule wins.
    pub fn validate_deal_terms(
        min_contribution: i128,
        target: i128,
        freeze_start: u64,
        maturity: u64,
    ) -> Result<(), Error> {
        if target <= 0 {
            return Err(Error::InvalidTargetAmount);
        }

        if maturity <= freeze_start {
            return Err(Error::InvalidMaturityTimestamp);
        }

        if min_contribution <= 0 {
            return Err(Error::InvalidMinContribution);
        }

        if target < min_contribution {
            return Err(Error::TargetBelowMinContribution);
        }

        Ok(())
    }

    /// Capacity and exact-fill rule for a contribution.
    ///
    /// A contribution must fit in the remaining capacity and meet the minimum,
    /// except when the remaining gap is already below the minimum: then only
    /// the exact gap closes the deal.
    pub fn validate_contribution(
        target: i128,
        raised: i128,
        min_contribution: i128,
        amount: i128,
    ) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::CapacityExceeded);
        }

        let remaining = target
            .checked_sub(raised)
            .ok_or(Error::ArithmeticOverflow)?;

        if amount > remaining {
            return Err(Error::CapacityExceeded);
        }

        let exact_fill = remaining < min_contribution && amount == remaining;
        if amount < min_contribution && !exact_fill {
            return Err(Error::CapacityExceeded);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_terms() {
        assert_eq!(Validator::validate_deal_terms(100, 1_000, 10, 20), Ok(()));
        // target may equal the minimum
        assert_eq!(Validator::validate_deal_terms(1_000, 1_000, 10, 11), Ok(()));
    }

    #[test]
    fn test_terms_error_order() {
        // Everything wrong: the target check reports first
        assert_eq!(
            Validator::validate_deal_terms(0, 0, 20, 10),
            Err(Error::InvalidTargetAmount)
        );
        assert_eq!(
            Validator::validate_deal_terms(0, 1_000, 20, 20),
            Err(Error::InvalidMaturityTimestamp)
        );
        assert_eq!(
            Validator::validate_deal_terms(-5, 1_000, 10, 20),
            Err(Error::InvalidMinContribution)
        );
        assert_eq!(
            Validator::validate_deal_terms(1_001, 1_000, 10, 20),
            Err(Error::TargetBelowMinContribution)
        );
    }

    #[test]
    fn test_contribution_below_minimum() {
        // remaining = 1000, min = 100
        assert_eq!(
            Validator::validate_contribution(1_000, 0, 100, 80),
            Err(Error::CapacityExceeded)
        );
        assert_eq!(Validator::validate_contribution(1_000, 0, 100, 100), Ok(()));
    }

    #[test]
    fn test_contribution_overshoot() {
        assert_eq!(
            Validator::validate_contribution(1_000, 100, 100, 901),
            Err(Error::CapacityExceeded)
        );
        assert_eq!(Validator::validate_contribution(1_000, 100, 100, 900), Ok(()));
    }

    #[test]
    fn test_exact_fill_below_minimum() {
        // remaining = 50 < min = 100
        assert_eq!(Validator::validate_contribution(1_000, 950, 100, 50), Ok(()));
        assert_eq!(
            Validator::validate_contribution(1_000, 950, 100, 40),
            Err(Error::CapacityExceeded)
        );
        // meets the minimum but overshoots
        assert_eq!(
            Validator::validate_contribution(1_000, 950, 100, 100),
            Err(Error::CapacityExceeded)
        );
    }

    #[test]
    fn test_exact_fill_needs_small_gap() {
        // remaining = 150 >= min = 100, so 150 passes on the minimum
        // and 60 fails even though it is not an overshoot
        assert_eq!(Validator::validate_contribution(1_000, 850, 100, 150), Ok(()));
        assert_eq!(
            Validator::validate_contribution(1_000, 850, 100, 60),
            Err(Error::CapacityExceeded)
        );
    }

    #[test]
    fn test_full_deal_rejects_everything() {
        assert_eq!(
            Validator::validate_contribution(1_000, 1_000, 100, 0),
            Err(Error::CapacityExceeded)
        );
        assert_eq!(
            Validator::validate_contribution(1_000, 1_000, 100, 1),
            Err(Error::CapacityExceeded)
        );
    }
}
