//! Accident insurance benefit schedules, keyed by plan level.

use tracing::warn;

use crate::domain::recommendation::AccidentPlanBenefits;
use crate::rating::PlanCode;

pub fn schedule(plan: PlanCode) -> AccidentPlanBenefits {
    match plan {
        PlanCode::A => AccidentPlanBenefits {
            hospital_admission: "$500/Accident".to_owned(),
            hospital_confinement: "$200/Day (30 Days/Accident)".to_owned(),
            emergency_room: "$150/visit (Max 2/year)".to_owned(),
            outpatient_surgery: vec![
                "$500 for Minor Surgery".to_owned(),
                "$1,000 for Major Surgery".to_owned(),
            ],
            fractures: vec![
                "$500 for Minor Fracture".to_owned(),
                "$1,000 for Major Fracture".to_owned(),
            ],
            doctor_visits: "$75/Visit (Max 2/year)".to_owned(),
            wellness_benefit: "$50/year".to_owned(),
        },
        PlanCode::B => AccidentPlanBenefits {
            hospital_admission: "$1,000/Accident".to_owned(),
            hospital_confinement: "$400/Day (30 Days/Accident)".to_owned(),
            emergency_room: "$200/visit (Max 2/year)".to_owned(),
            outpatient_surgery: vec![
                "$750 for Minor Surgery".to_owned(),
                "$1,500 for Major Surgery".to_owned(),
            ],
            fractures: vec![
                "$500 for Minor Fracture".to_owned(),
                "$1,000 for Major Fracture".to_owned(),
            ],
            doctor_visits: "$100/Visit (Max 2/year)".to_owned(),
            wellness_benefit: "$50/year".to_owned(),
        },
    }
}

/// Plan-name keyed schedule for raw callers. Unrecognized plan names fall
/// back to Plan A with an advisory warning, never an error.
pub fn schedule_for(plan_name: &str) -> AccidentPlanBenefits {
    match parse_plan_key(plan_name) {
        Some(plan) => schedule(plan),
        None => {
            warn!(plan_name, "unrecognized accident plan, defaulting to Plan A");
            schedule(PlanCode::A)
        }
    }
}

pub(crate) fn parse_plan_key(plan_name: &str) -> Option<PlanCode> {
    let normalized: String = plan_name
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    match normalized.as_str() {
        "plana" => Some(PlanCode::A),
        "planb" => Some(PlanCode::B),
        _ => None,
    }
}
