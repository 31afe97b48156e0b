//! Hospital indemnity benefit schedules, keyed by plan level.

use tracing::warn;

use crate::domain::recommendation::{
    HospitalIndemnityPlanBenefits, PerDayBenefit, SurgeryBenefit, VisitBenefit,
};
use crate::rating::PlanCode;

use super::accident::parse_plan_key;

pub fn schedule(plan: PlanCode) -> HospitalIndemnityPlanBenefits {
    match plan {
        PlanCode::A => HospitalIndemnityPlanBenefits {
            hospital_admission: "$500/Admission".to_owned(),
            hospital_per_day: PerDayBenefit {
                amount: "$100/Day".to_owned(),
                max_days: "Max 30 Days/Year".to_owned(),
            },
            emergency_room: VisitBenefit {
                amount: "$100/Visit".to_owned(),
                max_visits: "Max 2/Year".to_owned(),
            },
            outpatient_surgery: SurgeryBenefit {
                minor: "$250".to_owned(),
                major: "$500".to_owned(),
            },
        },
        PlanCode::B => HospitalIndemnityPlanBenefits {
            hospital_admission: "$1,000/Admission".to_owned(),
            hospital_per_day: PerDayBenefit {
                amount: "$200/Day".to_owned(),
                max_days: "Max 30 Days/Year".to_owned(),
            },
            emergency_room: VisitBenefit {
                amount: "$150/Visit".to_owned(),
                max_visits: "Max 2/Year".to_owned(),
            },
            outpatient_surgery: SurgeryBenefit {
                minor: "$500".to_owned(),
                major: "$1,000".to_owned(),
            },
        },
    }
}

/// Plan-name keyed schedule for raw callers. Unrecognized plan names fall
/// back to Plan A with an advisory warning, never an error.
pub fn schedule_for(plan_name: &str) -> HospitalIndemnityPlanBenefits {
    match parse_plan_key(plan_name) {
        Some(plan) => schedule(plan),
        None => {
            warn!(plan_name, "unrecognized hospital indemnity plan, defaulting to Plan A");
            schedule(PlanCode::A)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{schedule, schedule_for};
    use crate::rating::PlanCode;

    #[test]
    fn plan_b_doubles_the_daily_room_benefit() {
        assert_eq!(schedule(PlanCode::A).hospital_per_day.amount, "$100/Day");
        assert_eq!(schedule(PlanCode::B).hospital_per_day.amount, "$200/Day");
    }

    #[test]
    fn unrecognized_plans_default_to_plan_a() {
        assert_eq!(schedule_for("premium plus"), schedule(PlanCode::A));
    }
}
