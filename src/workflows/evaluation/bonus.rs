//! Bonus arithmetic shared by the performance models and the generator.
//!
//! Both formulas are deterministic and side-effect-free so they can be
//! exercised without any persistence in place. Results are always rounded up
//! to the next multiple of 10 currency units and never exceed [`MAX_BONUS`].

use super::domain::CustomerRating;

/// Payout per achieved unit of a social goal.
const UNIT_PAYOUT: f64 = 10.0;
/// Penalty applied when the actual value falls short of the target.
const UNDER_TARGET_MULTIPLIER: f64 = 0.8;
/// Commission base for sold positions.
const COMMISSION_RATE: f64 = 0.05;

/// Upper bound on a single derived bonus. Inputs large enough to exceed it
/// clamp here instead of wrapping past the integer range, keeping every
/// payout a multiple of 10.
pub const MAX_BONUS: u32 = 1_000_000_000;

/// Bonus for a social-performance goal (target vs. actual).
///
/// A goal without a target pays nothing. Meeting or beating the target pays
/// the full 10 units per achieved unit; staying under it pays 80%.
pub fn social_bonus(target_value: f64, actual_value: f64) -> u32 {
    if target_value <= 0.0 {
        return 0;
    }

    let multiplier = if actual_value >= target_value {
        1.0
    } else {
        UNDER_TARGET_MULTIPLIER
    };

    round_up_to_ten(actual_value * UNIT_PAYOUT * multiplier)
}

/// Bonus for one sold product position, weighted by the customer's rating.
pub fn sales_bonus(rating: CustomerRating, quantity: u32, price_per_unit: f64) -> u32 {
    let base = price_per_unit * quantity as f64 * COMMISSION_RATE;
    round_up_to_ten(base * rating.multiplier())
}

fn round_up_to_ten(raw: f64) -> u32 {
    let rounded = (raw / 10.0).ceil() * 10.0;
    if rounded >= f64::from(MAX_BONUS) {
        MAX_BONUS
    } else {
        rounded as u32
    }
}
