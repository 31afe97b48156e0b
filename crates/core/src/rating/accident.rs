//! Accident insurance rate card: plan level by coverage tier.

use rust_decimal::Decimal;

use super::{CoverageTier, PlanCode, TierRates};

const PLAN_A: TierRates = TierRates { individual: 1403, individual_plus_one: 2959, family: 4283 };
const PLAN_B: TierRates = TierRates { individual: 2097, individual_plus_one: 4343, family: 6378 };

pub fn monthly_premium(plan: PlanCode, tier: CoverageTier) -> Decimal {
    let rates = match plan {
        PlanCode::A => PLAN_A,
        PlanCode::B => PLAN_B,
    };
    Decimal::new(rates.cents(tier), 2)
}

/// String-keyed lookup: any unknown plan or tier prices to zero.
pub fn monthly_premium_for(plan: &str, tier: &str) -> Decimal {
    match (PlanCode::parse(plan), CoverageTier::parse(tier)) {
        (Some(plan), Some(tier)) => monthly_premium(plan, tier),
        _ => Decimal::ZERO,
    }
}
