//! Short term accident/sickness pay rate card: benefit period by age band
//! by daily benefit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ShortTermAgeBracket;

/// How long the daily benefit pays out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenefitPeriod {
    FourteenDay,
    ThirtyDay,
    SixtyDay,
}

impl BenefitPeriod {
    pub const ALL: [BenefitPeriod; 3] =
        [BenefitPeriod::FourteenDay, BenefitPeriod::ThirtyDay, BenefitPeriod::SixtyDay];

    pub fn label(&self) -> &'static str {
        match self {
            BenefitPeriod::FourteenDay => "14-Day",
            BenefitPeriod::ThirtyDay => "30-Day",
            BenefitPeriod::SixtyDay => "60-Day",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|period| period.label() == label)
    }

    /// Resolves the intake benefit-period answer by the day count it
    /// mentions, longest first; anything else takes the basic 14-day
    /// period.
    pub fn select(answer: Option<&str>) -> (Self, &'static str) {
        if let Some(raw) = answer {
            if raw.contains("60") {
                return (
                    BenefitPeriod::SixtyDay,
                    "60-day benefit period selected for maximum coverage duration",
                );
            }
            if raw.contains("30") {
                return (
                    BenefitPeriod::ThirtyDay,
                    "30-day benefit period selected for extended coverage",
                );
            }
        }
        (BenefitPeriod::FourteenDay, "14-day benefit period selected for basic coverage")
    }
}

/// The per-day payout amount. Parsing is case-insensitive over the
/// canonical `$N/Day` vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DailyBenefit {
    Daily50,
    Daily100,
    Daily150,
    Daily200,
}

impl DailyBenefit {
    pub const ALL: [DailyBenefit; 4] =
        [DailyBenefit::Daily50, DailyBenefit::Daily100, DailyBenefit::Daily150, DailyBenefit::Daily200];

    pub fn label(&self) -> &'static str {
        match self {
            DailyBenefit::Daily50 => "$50/Day",
            DailyBenefit::Daily100 => "$100/Day",
            DailyBenefit::Daily150 => "$150/Day",
            DailyBenefit::Daily200 => "$200/Day",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL.iter().copied().find(|benefit| benefit.label().eq_ignore_ascii_case(trimmed))
    }
}

#[derive(Clone, Copy, Debug)]
struct DailyRates {
    d50: i64,
    d100: i64,
    d150: i64,
    d200: i64,
}

impl DailyRates {
    const fn cents(&self, benefit: DailyBenefit) -> i64 {
        match benefit {
            DailyBenefit::Daily50 => self.d50,
            DailyBenefit::Daily100 => self.d100,
            DailyBenefit::Daily150 => self.d150,
            DailyBenefit::Daily200 => self.d200,
        }
    }
}

const PERIOD_14: [DailyRates; 5] = [
    DailyRates { d50: 777, d100: 1544, d150: 2323, d200: 3086 },
    DailyRates { d50: 969, d100: 1940, d150: 2910, d200: 3873 },
    DailyRates { d50: 1298, d100: 2614, d150: 3909, d200: 5212 },
    DailyRates { d50: 1910, d100: 3804, d150: 5728, d200: 7609 },
    DailyRates { d50: 2700, d100: 5372, d150: 8068, d200: 10758 },
];

const PERIOD_30: [DailyRates; 5] = [
    DailyRates { d50: 1431, d100: 2882, d150: 4295, d200: 5733 },
    DailyRates { d50: 1845, d100: 3664, d150: 5505, d200: 7317 },
    DailyRates { d50: 2498, d100: 4963, d150: 7469, d200: 9959 },
    DailyRates { d50: 3660, d100: 7347, d150: 11021, d200: 14696 },
    DailyRates { d50: 5261, d100: 10535, d150: 15803, d200: 21071 },
];

const PERIOD_60: [DailyRates; 5] = [
    DailyRates { d50: 2223, d100: 4438, d150: 6656, d200: 8874 },
    DailyRates { d50: 2919, d100: 5828, d150: 8742, d200: 11656 },
    DailyRates { d50: 4062, d100: 8084, d150: 12147, d200: 16196 },
    DailyRates { d50: 6136, d100: 12271, d150: 18381, d200: 24579 },
    DailyRates { d50: 9020, d100: 18171, d150: 27222, d200: 36387 },
];

fn period_rates(period: BenefitPeriod) -> &'static [DailyRates; 5] {
    match period {
        BenefitPeriod::FourteenDay => &PERIOD_14,
        BenefitPeriod::ThirtyDay => &PERIOD_30,
        BenefitPeriod::SixtyDay => &PERIOD_60,
    }
}

pub fn monthly_premium(
    period: BenefitPeriod,
    bracket: ShortTermAgeBracket,
    benefit: DailyBenefit,
) -> Decimal {
    Decimal::new(period_rates(period)[bracket.index()].cents(benefit), 2)
}

/// String-keyed lookup: any unknown period, bracket, or daily benefit
/// prices to zero.
pub fn monthly_premium_for(period: &str, bracket: &str, benefit: &str) -> Decimal {
    match (
        BenefitPeriod::parse(period),
        ShortTermAgeBracket::parse(bracket),
        DailyBenefit::parse(benefit),
    ) {
        (Some(period), Some(bracket), Some(benefit)) => monthly_premium(period, bracket, benefit),
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{monthly_premium, monthly_premium_for, BenefitPeriod, DailyBenefit};
    use crate::rating::ShortTermAgeBracket;

    #[test]
    fn hundred_a_day_at_fifty_five_on_the_basic_period_matches_the_card() {
        assert_eq!(
            monthly_premium(
                BenefitPeriod::FourteenDay,
                ShortTermAgeBracket::of(55),
                DailyBenefit::Daily100
            ),
            Decimal::new(3804, 2)
        );
    }

    #[test]
    fn daily_benefit_parsing_is_case_insensitive() {
        assert_eq!(DailyBenefit::parse("$100/day"), Some(DailyBenefit::Daily100));
        assert_eq!(DailyBenefit::parse("$200/DAY"), Some(DailyBenefit::Daily200));
        assert_eq!(DailyBenefit::parse("$100"), None);
        assert_eq!(DailyBenefit::parse("$75/Day"), None);
    }

    #[test]
    fn period_selection_prefers_the_longest_mentioned_duration() {
        assert_eq!(BenefitPeriod::select(Some("60-Day Benefit Period")).0, BenefitPeriod::SixtyDay);
        assert_eq!(BenefitPeriod::select(Some("30 days")).0, BenefitPeriod::ThirtyDay);
        assert_eq!(BenefitPeriod::select(Some("14-Day Benefit Period")).0, BenefitPeriod::FourteenDay);
        assert_eq!(BenefitPeriod::select(Some("whatever")).0, BenefitPeriod::FourteenDay);
        assert_eq!(BenefitPeriod::select(None).0, BenefitPeriod::FourteenDay);
    }

    #[test]
    fn unknown_keys_price_to_zero() {
        assert_eq!(monthly_premium_for("90-Day", "17-29", "$50/Day"), Decimal::ZERO);
        assert_eq!(monthly_premium_for("14-Day", "60-70", "$50/Day"), Decimal::ZERO);
        assert_eq!(monthly_premium_for("14-Day", "17-29", "$75/Day"), Decimal::ZERO);
    }
}
