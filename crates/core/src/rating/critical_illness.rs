//! Critical illness rate card: tobacco status by age band by tier, filed
//! at a $5,000 base face amount and scaled linearly for larger elections.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::intake::parse_dollar_number;

use super::{AgeBracket, CoverageTier, TierRates, TobaccoStatus};

/// The five face amounts offered on the critical-illness election. The
/// rate card is filed at $5,000; higher bands price by linear scaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CriticalAmountBand {
    Amount5000,
    Amount10000,
    Amount15000,
    Amount20000,
    Amount25000,
}

impl CriticalAmountBand {
    pub const ALL: [CriticalAmountBand; 5] = [
        CriticalAmountBand::Amount5000,
        CriticalAmountBand::Amount10000,
        CriticalAmountBand::Amount15000,
        CriticalAmountBand::Amount20000,
        CriticalAmountBand::Amount25000,
    ];

    pub fn value(&self) -> u32 {
        match self {
            CriticalAmountBand::Amount5000 => 5_000,
            CriticalAmountBand::Amount10000 => 10_000,
            CriticalAmountBand::Amount15000 => 15_000,
            CriticalAmountBand::Amount20000 => 20_000,
            CriticalAmountBand::Amount25000 => 25_000,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CriticalAmountBand::Amount5000 => "$5000",
            CriticalAmountBand::Amount10000 => "$10000",
            CriticalAmountBand::Amount15000 => "$15000",
            CriticalAmountBand::Amount20000 => "$20000",
            CriticalAmountBand::Amount25000 => "$25000",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|band| band.label() == label)
    }

    pub fn select(answer: Option<&str>) -> (Self, &'static str) {
        let Some(raw) = answer else {
            return (CriticalAmountBand::Amount5000, "Basic coverage amount selected");
        };

        let requested = parse_dollar_number(raw).unwrap_or(0);
        if requested >= 25_000 {
            (
                CriticalAmountBand::Amount25000,
                "Maximum coverage amount selected for comprehensive protection",
            )
        } else if requested >= 20_000 {
            (
                CriticalAmountBand::Amount20000,
                "High coverage amount selected for enhanced protection",
            )
        } else if requested >= 15_000 {
            (
                CriticalAmountBand::Amount15000,
                "Moderate-high coverage amount selected for good protection",
            )
        } else if requested >= 10_000 {
            (
                CriticalAmountBand::Amount10000,
                "Moderate coverage amount selected for balanced protection",
            )
        } else {
            (
                CriticalAmountBand::Amount5000,
                "Basic coverage amount selected for essential protection",
            )
        }
    }
}

const NON_TOBACCO: [TierRates; 5] = [
    TierRates { individual: 191, individual_plus_one: 250, family: 291 },
    TierRates { individual: 374, individual_plus_one: 486, family: 561 },
    TierRates { individual: 737, individual_plus_one: 958, family: 1105 },
    TierRates { individual: 1285, individual_plus_one: 1670, family: 1927 },
    TierRates { individual: 2111, individual_plus_one: 2744, family: 3166 },
];

const TOBACCO: [TierRates; 5] = [
    TierRates { individual: 325, individual_plus_one: 426, family: 496 },
    TierRates { individual: 638, individual_plus_one: 829, family: 957 },
    TierRates { individual: 1256, individual_plus_one: 1633, family: 1884 },
    TierRates { individual: 2190, individual_plus_one: 2847, family: 3285 },
    TierRates { individual: 3598, individual_plus_one: 4678, family: 5397 },
];

/// Base monthly premium at the $5,000 filed face amount.
pub fn base_monthly_premium(
    status: TobaccoStatus,
    bracket: AgeBracket,
    tier: CoverageTier,
) -> Decimal {
    let rates = match status {
        TobaccoStatus::NonTobacco => &NON_TOBACCO,
        TobaccoStatus::Tobacco => &TOBACCO,
    };
    Decimal::new(rates[bracket.index()].cents(tier), 2)
}

/// Monthly premium at the elected face amount, scaled by
/// `face_amount / 5000` from the filed base rate.
pub fn monthly_premium(
    status: TobaccoStatus,
    bracket: AgeBracket,
    tier: CoverageTier,
    face_amount: u32,
) -> Decimal {
    base_monthly_premium(status, bracket, tier) * Decimal::from(face_amount)
        / Decimal::from(5_000u32)
}

/// String-keyed lookup: any unknown status, bracket, or tier prices to
/// zero before scaling.
pub fn monthly_premium_for(
    status: &str,
    bracket: &str,
    tier: &str,
    face_amount: u32,
) -> Decimal {
    match (TobaccoStatus::parse(status), AgeBracket::parse(bracket), CoverageTier::parse(tier)) {
        (Some(status), Some(bracket), Some(tier)) => {
            monthly_premium(status, bracket, tier, face_amount)
        }
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{monthly_premium, monthly_premium_for, CriticalAmountBand};
    use crate::rating::{AgeBracket, CoverageTier, TobaccoStatus};

    #[test]
    fn base_band_prices_straight_from_the_card() {
        assert_eq!(
            monthly_premium(
                TobaccoStatus::NonTobacco,
                AgeBracket::From50To59,
                CoverageTier::Individual,
                5_000
            ),
            Decimal::new(1285, 2)
        );
    }

    #[test]
    fn premiums_scale_linearly_with_the_face_amount() {
        let base = monthly_premium(
            TobaccoStatus::Tobacco,
            AgeBracket::From30To39,
            CoverageTier::Family,
            5_000,
        );
        let quadrupled = monthly_premium(
            TobaccoStatus::Tobacco,
            AgeBracket::From30To39,
            CoverageTier::Family,
            20_000,
        );
        assert_eq!(quadrupled, base * Decimal::from(4));
    }

    #[test]
    fn tobacco_rates_exceed_non_tobacco_rates() {
        for bracket in AgeBracket::ALL {
            for tier in CoverageTier::ALL {
                assert!(
                    monthly_premium(TobaccoStatus::Tobacco, bracket, tier, 5_000)
                        > monthly_premium(TobaccoStatus::NonTobacco, bracket, tier, 5_000)
                );
            }
        }
    }

    #[test]
    fn amount_selection_covers_the_twenty_five_thousand_band() {
        assert_eq!(
            CriticalAmountBand::select(Some("$25,000")).0,
            CriticalAmountBand::Amount25000
        );
        assert_eq!(
            CriticalAmountBand::select(Some("$12,000")).0,
            CriticalAmountBand::Amount10000
        );
        assert_eq!(CriticalAmountBand::select(None).0, CriticalAmountBand::Amount5000);
    }

    #[test]
    fn unknown_keys_price_to_zero_before_scaling() {
        assert_eq!(monthly_premium_for("Vaping", "17-29", "Individual", 25_000), Decimal::ZERO);
        assert_eq!(monthly_premium_for("Tobacco", "17-29", "Plural", 25_000), Decimal::ZERO);
    }
}
