//! Cancer insurance rate card: coverage amount by age band by tier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::intake::parse_dollar_number;

use super::{AgeBracket, CoverageTier, TierRates};

/// The four face amounts the cancer line is filed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverageAmountBand {
    Amount5000,
    Amount10000,
    Amount15000,
    Amount20000,
}

impl CoverageAmountBand {
    pub const ALL: [CoverageAmountBand; 4] = [
        CoverageAmountBand::Amount5000,
        CoverageAmountBand::Amount10000,
        CoverageAmountBand::Amount15000,
        CoverageAmountBand::Amount20000,
    ];

    pub fn value(&self) -> u32 {
        match self {
            CoverageAmountBand::Amount5000 => 5_000,
            CoverageAmountBand::Amount10000 => 10_000,
            CoverageAmountBand::Amount15000 => 15_000,
            CoverageAmountBand::Amount20000 => 20_000,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CoverageAmountBand::Amount5000 => "$5000",
            CoverageAmountBand::Amount10000 => "$10000",
            CoverageAmountBand::Amount15000 => "$15000",
            CoverageAmountBand::Amount20000 => "$20000",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|band| band.label() == label)
    }

    /// Resolves the intake coverage-amount answer. Thresholds snap down in
    /// `>=` order; an unanswered question takes the base band.
    pub fn select(answer: Option<&str>) -> (Self, &'static str) {
        let Some(raw) = answer else {
            return (CoverageAmountBand::Amount5000, "Basic coverage amount selected");
        };

        let requested = parse_dollar_number(raw).unwrap_or(0);
        if requested >= 20_000 {
            (
                CoverageAmountBand::Amount20000,
                "Maximum coverage amount selected for comprehensive protection",
            )
        } else if requested >= 15_000 {
            (
                CoverageAmountBand::Amount15000,
                "High coverage amount selected for enhanced protection",
            )
        } else if requested >= 10_000 {
            (
                CoverageAmountBand::Amount10000,
                "Moderate coverage amount selected for balanced protection",
            )
        } else {
            (
                CoverageAmountBand::Amount5000,
                "Basic coverage amount selected for essential protection",
            )
        }
    }
}

const BAND_5000: [TierRates; 5] = [
    TierRates { individual: 182, individual_plus_one: 298, family: 443 },
    TierRates { individual: 334, individual_plus_one: 546, family: 813 },
    TierRates { individual: 653, individual_plus_one: 1069, family: 1590 },
    TierRates { individual: 1142, individual_plus_one: 1869, family: 2780 },
    TierRates { individual: 1436, individual_plus_one: 2349, family: 3494 },
];

const BAND_10000: [TierRates; 5] = [
    TierRates { individual: 361, individual_plus_one: 591, family: 879 },
    TierRates { individual: 661, individual_plus_one: 1081, family: 1608 },
    TierRates { individual: 1292, individual_plus_one: 2114, family: 3145 },
    TierRates { individual: 2263, individual_plus_one: 3702, family: 5507 },
    TierRates { individual: 2850, individual_plus_one: 4663, family: 6935 },
];

const BAND_15000: [TierRates; 5] = [
    TierRates { individual: 540, individual_plus_one: 883, family: 1314 },
    TierRates { individual: 987, individual_plus_one: 1615, family: 2403 },
    TierRates { individual: 1931, individual_plus_one: 3159, family: 4699 },
    TierRates { individual: 3384, individual_plus_one: 5536, family: 8234 },
    TierRates { individual: 4264, individual_plus_one: 6976, family: 10376 },
];

const BAND_20000: [TierRates; 5] = [
    TierRates { individual: 719, individual_plus_one: 1176, family: 1749 },
    TierRates { individual: 1314, individual_plus_one: 2150, family: 3198 },
    TierRates { individual: 2570, individual_plus_one: 4205, family: 6254 },
    TierRates { individual: 4504, individual_plus_one: 7369, family: 10961 },
    TierRates { individual: 5678, individual_plus_one: 9289, family: 13816 },
];

fn band_rates(band: CoverageAmountBand) -> &'static [TierRates; 5] {
    match band {
        CoverageAmountBand::Amount5000 => &BAND_5000,
        CoverageAmountBand::Amount10000 => &BAND_10000,
        CoverageAmountBand::Amount15000 => &BAND_15000,
        CoverageAmountBand::Amount20000 => &BAND_20000,
    }
}

pub fn monthly_premium(
    band: CoverageAmountBand,
    bracket: AgeBracket,
    tier: CoverageTier,
) -> Decimal {
    Decimal::new(band_rates(band)[bracket.index()].cents(tier), 2)
}

/// String-keyed lookup: any unknown amount, bracket, or tier prices to
/// zero.
pub fn monthly_premium_for(amount: &str, bracket: &str, tier: &str) -> Decimal {
    match (CoverageAmountBand::parse(amount), AgeBracket::parse(bracket), CoverageTier::parse(tier))
    {
        (Some(band), Some(bracket), Some(tier)) => monthly_premium(band, bracket, tier),
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{monthly_premium, monthly_premium_for, CoverageAmountBand};
    use crate::rating::{AgeBracket, CoverageTier};

    #[test]
    fn family_coverage_at_ten_thousand_midlife_matches_the_filed_rate() {
        assert_eq!(
            monthly_premium(
                CoverageAmountBand::Amount10000,
                AgeBracket::From40To49,
                CoverageTier::Family
            ),
            Decimal::new(3145, 2)
        );
    }

    #[test]
    fn rates_never_decrease_with_age_or_tier() {
        for band in CoverageAmountBand::ALL {
            for tier in CoverageTier::ALL {
                let mut previous = Decimal::ZERO;
                for bracket in AgeBracket::ALL {
                    let rate = monthly_premium(band, bracket, tier);
                    assert!(rate >= previous, "{band:?}/{bracket:?}/{tier:?} regressed");
                    previous = rate;
                }
            }
            for bracket in AgeBracket::ALL {
                let individual =
                    monthly_premium(band, bracket, CoverageTier::Individual);
                let plus_one =
                    monthly_premium(band, bracket, CoverageTier::IndividualPlusOne);
                let family = monthly_premium(band, bracket, CoverageTier::Family);
                assert!(individual < plus_one && plus_one < family);
            }
        }
    }

    #[test]
    fn amount_selection_snaps_down_in_threshold_order() {
        assert_eq!(CoverageAmountBand::select(Some("$20,000")).0, CoverageAmountBand::Amount20000);
        assert_eq!(CoverageAmountBand::select(Some("$17,500")).0, CoverageAmountBand::Amount15000);
        assert_eq!(CoverageAmountBand::select(Some("$10000")).0, CoverageAmountBand::Amount10000);
        assert_eq!(CoverageAmountBand::select(Some("$9,999")).0, CoverageAmountBand::Amount5000);
        assert_eq!(CoverageAmountBand::select(Some("lots")).0, CoverageAmountBand::Amount5000);
        assert_eq!(CoverageAmountBand::select(None).0, CoverageAmountBand::Amount5000);
    }

    #[test]
    fn unknown_keys_price_to_zero() {
        assert_eq!(monthly_premium_for("$25000", "17-29", "Individual"), Decimal::ZERO);
        assert_eq!(monthly_premium_for("$5000", "71-80", "Individual"), Decimal::ZERO);
        assert_eq!(monthly_premium_for("$5000", "17-29", "Solo"), Decimal::ZERO);
    }
}
