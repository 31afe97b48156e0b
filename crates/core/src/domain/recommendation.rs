use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// One ranked recommendation for an insurance line. The engine produces at
/// most one per call; the vec shape is kept for the consuming surfaces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductRecommendation {
    /// Catalog product with `price` overridden by the rate-table premium.
    pub product: Product,
    pub price: Decimal,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<PlanBenefits>,
}

/// Per-line benefit schedule payloads, discriminated by line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlanBenefits {
    Accident(AccidentPlanBenefits),
    Cancer(CancerPlanBenefits),
    HospitalIndemnity(HospitalIndemnityPlanBenefits),
    CriticalIllness(CriticalIllnessPlanBenefits),
    ShortTerm(ShortTermPlanBenefits),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccidentPlanBenefits {
    pub hospital_admission: String,
    pub hospital_confinement: String,
    pub emergency_room: String,
    pub outpatient_surgery: Vec<String>,
    pub fractures: Vec<String>,
    pub doctor_visits: String,
    pub wellness_benefit: String,
}

/// A benefit amount broken down by covered person. Members outside the
/// selected coverage tier carry a "Not covered" annotation instead of an
/// amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyBenefit {
    pub insured: String,
    pub spouse: String,
    pub children: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceSchedule {
    pub under_two_years: String,
    pub two_to_four_years: String,
    pub five_plus_years: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancerPlanBenefits {
    pub covered_members: String,
    pub invasive_cancer: FamilyBenefit,
    pub skin_cancer: FamilyBenefit,
    pub recurrence: RecurrenceSchedule,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerDayBenefit {
    pub amount: String,
    pub max_days: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitBenefit {
    pub amount: String,
    pub max_visits: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurgeryBenefit {
    pub minor: String,
    pub major: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalIndemnityPlanBenefits {
    pub hospital_admission: String,
    pub hospital_per_day: PerDayBenefit,
    pub emergency_room: VisitBenefit,
    pub outpatient_surgery: SurgeryBenefit,
}

/// Face amount and ceiling for one covered person on a critical-illness
/// plan. The maximum benefit is always three times that person's own face
/// amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDetail {
    pub face_amount: u32,
    pub face_amount_range: String,
    pub max_benefit: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalIllnessPlanBenefits {
    pub insured: CoverageDetail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse: Option<CoverageDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<CoverageDetail>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortTermPlanBenefits {
    pub daily_benefit: String,
}

#[cfg(test)]
mod tests {
    use super::{PlanBenefits, ShortTermPlanBenefits};

    #[test]
    fn benefits_serialize_with_a_line_discriminator() {
        let benefits =
            PlanBenefits::ShortTerm(ShortTermPlanBenefits { daily_benefit: "$100/Day".to_owned() });

        let json = serde_json::to_value(&benefits).expect("serialize");
        assert_eq!(json["type"], "short_term");
        assert_eq!(json["daily_benefit"], "$100/Day");
    }
}
