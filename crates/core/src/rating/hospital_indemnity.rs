//! Hospital indemnity rate card: plan level by age band by tier.

use rust_decimal::Decimal;

use super::{AgeBracket, CoverageTier, PlanCode, TierRates};

const PLAN_A: [TierRates; 5] = [
    TierRates { individual: 1519, individual_plus_one: 3039, family: 4540 },
    TierRates { individual: 1974, individual_plus_one: 3947, family: 5495 },
    TierRates { individual: 2625, individual_plus_one: 5250, family: 6861 },
    TierRates { individual: 3594, individual_plus_one: 7377, family: 9162 },
    TierRates { individual: 4807, individual_plus_one: 9867, family: 11575 },
];

const PLAN_B: [TierRates; 5] = [
    TierRates { individual: 2291, individual_plus_one: 4698, family: 6988 },
    TierRates { individual: 2977, individual_plus_one: 6104, family: 8440 },
    TierRates { individual: 3962, individual_plus_one: 8123, family: 10519 },
    TierRates { individual: 5568, individual_plus_one: 11416, family: 13663 },
    TierRates { individual: 7447, individual_plus_one: 15269, family: 17241 },
];

pub fn monthly_premium(plan: PlanCode, bracket: AgeBracket, tier: CoverageTier) -> Decimal {
    let rates = match plan {
        PlanCode::A => &PLAN_A,
        PlanCode::B => &PLAN_B,
    };
    Decimal::new(rates[bracket.index()].cents(tier), 2)
}

/// String-keyed lookup: any unknown plan, bracket, or tier prices to zero.
pub fn monthly_premium_for(plan: &str, bracket: &str, tier: &str) -> Decimal {
    match (PlanCode::parse(plan), AgeBracket::parse(bracket), CoverageTier::parse(tier)) {
        (Some(plan), Some(bracket), Some(tier)) => monthly_premium(plan, bracket, tier),
        _ => Decimal::ZERO,
    }
}
