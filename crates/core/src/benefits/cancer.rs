//! Cancer insurance benefit schedule: one-time diagnosis benefits broken
//! down per covered family member, plus the recurrence payout schedule.

use crate::domain::recommendation::{CancerPlanBenefits, FamilyBenefit, RecurrenceSchedule};
use crate::rating::cancer::CoverageAmountBand;

use super::{format_usd, CoverageKind};

const SKIN_CANCER_BENEFIT: u32 = 500;

/// Builds the display schedule for the selected coverage amount and
/// coverage type. Members outside the selected tier are annotated as not
/// covered; an unrecognized or absent coverage type takes the "just me"
/// phrasing.
pub fn schedule(band: CoverageAmountBand, coverage_type: Option<&str>) -> CancerPlanBenefits {
    let kind = coverage_type
        .and_then(CoverageKind::from_raw)
        .unwrap_or(CoverageKind::JustMe);

    let covered_members = match kind {
        CoverageKind::JustMe => "Covers the insured only",
        CoverageKind::MePlusOne => "Covers the insured and one dependent",
        CoverageKind::Family => "Covers the insured, spouse, and children",
    };

    CancerPlanBenefits {
        covered_members: covered_members.to_owned(),
        invasive_cancer: per_member(band.value(), kind),
        skin_cancer: per_member(SKIN_CANCER_BENEFIT, kind),
        recurrence: RecurrenceSchedule {
            under_two_years: "0%".to_owned(),
            two_to_four_years: "50%".to_owned(),
            five_plus_years: "100%".to_owned(),
        },
    }
}

fn per_member(amount: u32, kind: CoverageKind) -> FamilyBenefit {
    let covered = format_usd(amount);
    FamilyBenefit {
        insured: covered.clone(),
        spouse: if kind.covers_spouse() { covered.clone() } else { "Not covered".to_owned() },
        children: if kind.covers_children() { covered } else { "Not covered".to_owned() },
    }
}
