//! Rate-table dimensions and per-line premium lookups.
//!
//! Every dimension is a closed enum with a `parse` from the vocabulary the
//! catalogs and rate cards use, so a typed lookup is exhaustive and the
//! string-keyed wrappers stay total: an unknown key at any depth prices to
//! zero instead of failing.

pub mod accident;
pub mod cancer;
pub mod critical_illness;
pub mod hospital_indemnity;
pub mod short_term;

use serde::{Deserialize, Serialize};

/// Age bands shared by every line except short term.
///
/// Ages outside the defined ranges (under 17, over 70, negative input)
/// collapse into the first band. That mirrors the historical rate cards,
/// which priced unexpected ages at the youngest band rather than rejecting
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    From17To29,
    From30To39,
    From40To49,
    From50To59,
    From60To70,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 5] = [
        AgeBracket::From17To29,
        AgeBracket::From30To39,
        AgeBracket::From40To49,
        AgeBracket::From50To59,
        AgeBracket::From60To70,
    ];

    pub fn of(age: i64) -> Self {
        match age {
            17..=29 => AgeBracket::From17To29,
            30..=39 => AgeBracket::From30To39,
            40..=49 => AgeBracket::From40To49,
            50..=59 => AgeBracket::From50To59,
            60..=70 => AgeBracket::From60To70,
            _ => AgeBracket::From17To29,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeBracket::From17To29 => "17-29",
            AgeBracket::From30To39 => "30-39",
            AgeBracket::From40To49 => "40-49",
            AgeBracket::From50To59 => "50-59",
            AgeBracket::From60To70 => "60-70",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|bracket| bracket.label() == label)
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

/// Short-term disability uses its own top band (60-67); the fallback for
/// out-of-range ages is the same first-band collapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortTermAgeBracket {
    From17To29,
    From30To39,
    From40To49,
    From50To59,
    From60To67,
}

impl ShortTermAgeBracket {
    pub const ALL: [ShortTermAgeBracket; 5] = [
        ShortTermAgeBracket::From17To29,
        ShortTermAgeBracket::From30To39,
        ShortTermAgeBracket::From40To49,
        ShortTermAgeBracket::From50To59,
        ShortTermAgeBracket::From60To67,
    ];

    pub fn of(age: i64) -> Self {
        match age {
            17..=29 => ShortTermAgeBracket::From17To29,
            30..=39 => ShortTermAgeBracket::From30To39,
            40..=49 => ShortTermAgeBracket::From40To49,
            50..=59 => ShortTermAgeBracket::From50To59,
            60..=67 => ShortTermAgeBracket::From60To67,
            _ => ShortTermAgeBracket::From17To29,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShortTermAgeBracket::From17To29 => "17-29",
            ShortTermAgeBracket::From30To39 => "30-39",
            ShortTermAgeBracket::From40To49 => "40-49",
            ShortTermAgeBracket::From50To59 => "50-59",
            ShortTermAgeBracket::From60To67 => "60-67",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|bracket| bracket.label() == label)
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

/// How many people the policy covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverageTier {
    Individual,
    IndividualPlusOne,
    Family,
}

impl CoverageTier {
    pub const ALL: [CoverageTier; 3] =
        [CoverageTier::Individual, CoverageTier::IndividualPlusOne, CoverageTier::Family];

    pub fn label(&self) -> &'static str {
        match self {
            CoverageTier::Individual => "Individual",
            CoverageTier::IndividualPlusOne => "Individual+1",
            CoverageTier::Family => "Family",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tier| tier.label() == label)
    }

    /// Resolves the intake coverage-type answer to a tier with its
    /// rationale clause. Anything outside the known vocabulary defaults to
    /// individual coverage.
    pub fn from_answer(answer: Option<&str>) -> (Self, &'static str) {
        match answer {
            Some("Just me") | None => (CoverageTier::Individual, "Individual coverage selected"),
            Some("Me + 1") => {
                (CoverageTier::IndividualPlusOne, "Coverage for you and one other person")
            }
            Some("My Family") => (CoverageTier::Family, "Family coverage selected"),
            Some(_) => (CoverageTier::Individual, "Individual coverage selected"),
        }
    }
}

/// The two plan levels offered on accident and hospital-indemnity lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanCode {
    A,
    B,
}

impl PlanCode {
    pub fn label(&self) -> &'static str {
        match self {
            PlanCode::A => "Plan A",
            PlanCode::B => "Plan B",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Plan A" => Some(PlanCode::A),
            "Plan B" => Some(PlanCode::B),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TobaccoStatus {
    NonTobacco,
    Tobacco,
}

impl TobaccoStatus {
    pub fn from_flag(tobacco_use: bool) -> Self {
        if tobacco_use {
            TobaccoStatus::Tobacco
        } else {
            TobaccoStatus::NonTobacco
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TobaccoStatus::NonTobacco => "Non-Tobacco",
            TobaccoStatus::Tobacco => "Tobacco",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Non-Tobacco" => Some(TobaccoStatus::NonTobacco),
            "Tobacco" => Some(TobaccoStatus::Tobacco),
            _ => None,
        }
    }
}

/// One rate-card row: monthly premium in cents per coverage tier.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TierRates {
    pub individual: i64,
    pub individual_plus_one: i64,
    pub family: i64,
}

impl TierRates {
    pub(crate) const fn cents(&self, tier: CoverageTier) -> i64 {
        match tier {
            CoverageTier::Individual => self.individual,
            CoverageTier::IndividualPlusOne => self.individual_plus_one,
            CoverageTier::Family => self.family,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AgeBracket, CoverageTier, PlanCode, ShortTermAgeBracket};

    #[test]
    fn out_of_range_ages_collapse_into_the_first_bracket() {
        assert_eq!(AgeBracket::of(5), AgeBracket::From17To29);
        assert_eq!(AgeBracket::of(-3), AgeBracket::From17To29);
        assert_eq!(AgeBracket::of(90), AgeBracket::From17To29);
        assert_eq!(ShortTermAgeBracket::of(68), ShortTermAgeBracket::From17To29);
        assert_eq!(ShortTermAgeBracket::of(16), ShortTermAgeBracket::From17To29);
    }

    #[test]
    fn bracket_boundaries_are_inclusive() {
        assert_eq!(AgeBracket::of(17), AgeBracket::From17To29);
        assert_eq!(AgeBracket::of(29), AgeBracket::From17To29);
        assert_eq!(AgeBracket::of(30), AgeBracket::From30To39);
        assert_eq!(AgeBracket::of(70), AgeBracket::From60To70);
        assert_eq!(ShortTermAgeBracket::of(67), ShortTermAgeBracket::From60To67);
    }

    #[test]
    fn coverage_tier_resolution_defaults_to_individual() {
        assert_eq!(CoverageTier::from_answer(Some("Just me")).0, CoverageTier::Individual);
        assert_eq!(CoverageTier::from_answer(Some("Me + 1")).0, CoverageTier::IndividualPlusOne);
        assert_eq!(CoverageTier::from_answer(Some("My Family")).0, CoverageTier::Family);
        assert_eq!(CoverageTier::from_answer(Some("everyone I know")).0, CoverageTier::Individual);
        assert_eq!(CoverageTier::from_answer(None).0, CoverageTier::Individual);
    }

    #[test]
    fn labels_round_trip_through_parse() {
        for tier in CoverageTier::ALL {
            assert_eq!(CoverageTier::parse(tier.label()), Some(tier));
        }
        for bracket in AgeBracket::ALL {
            assert_eq!(AgeBracket::parse(bracket.label()), Some(bracket));
        }
        assert_eq!(PlanCode::parse("Plan A"), Some(PlanCode::A));
        assert_eq!(PlanCode::parse("plan a"), None);
    }
}
