//! Critical illness benefit schedule: per-person face amounts and payout
//! ceilings derived from the insured's election.
//!
//! Dependent face amounts are fixed fractions of the insured election
//! (75% for a spouse, 37.5% for children, floored to whole dollars), and
//! every covered person's maximum benefit is three times their own face
//! amount.

use crate::domain::recommendation::{CoverageDetail, CriticalIllnessPlanBenefits};
use crate::errors::DomainError;

use super::CoverageKind;

const MAX_BENEFIT_MULTIPLE: u32 = 3;

/// Builds the schedule for the given coverage type and elected face
/// amount. A completely absent coverage type is the one input-contract
/// violation in the builder layer and fails hard; an unrecognized value
/// still defaults to insured-only coverage.
pub fn schedule(
    coverage_type: Option<&str>,
    face_amount: u32,
) -> Result<CriticalIllnessPlanBenefits, DomainError> {
    let raw = coverage_type.ok_or(DomainError::MissingCoverageType)?;
    let kind = CoverageKind::from_raw(raw).unwrap_or(CoverageKind::JustMe);

    let insured = CoverageDetail {
        face_amount,
        face_amount_range: "$5,000 - $25,000".to_owned(),
        max_benefit: face_amount * MAX_BENEFIT_MULTIPLE,
    };

    let spouse = kind.covers_spouse().then(|| {
        let spouse_face = face_amount * 3 / 4;
        CoverageDetail {
            face_amount: spouse_face,
            face_amount_range: "Up to 75% of insured face amount".to_owned(),
            max_benefit: spouse_face * MAX_BENEFIT_MULTIPLE,
        }
    });

    let children = kind.covers_children().then(|| {
        let children_face = face_amount * 3 / 8;
        CoverageDetail {
            face_amount: children_face,
            face_amount_range: "Up to 37.5% of insured face amount".to_owned(),
            max_benefit: children_face * MAX_BENEFIT_MULTIPLE,
        }
    });

    Ok(CriticalIllnessPlanBenefits { insured, spouse, children })
}

#[cfg(test)]
mod tests {
    use super::schedule;
    use crate::errors::DomainError;

    #[test]
    fn insured_max_benefit_is_three_times_the_face_amount() {
        let benefits = schedule(Some("Just me"), 10_000).expect("schedule");

        assert_eq!(benefits.insured.face_amount, 10_000);
        assert_eq!(benefits.insured.max_benefit, 30_000);
        assert!(benefits.spouse.is_none());
        assert!(benefits.children.is_none());
    }

    #[test]
    fn me_plus_one_adds_a_spouse_at_three_quarters_face() {
        let benefits = schedule(Some("Me + 1"), 10_000).expect("schedule");
        let spouse = benefits.spouse.expect("spouse coverage");

        assert_eq!(spouse.face_amount, 7_500);
        assert_eq!(spouse.max_benefit, 22_500);
        assert!(benefits.children.is_none());
    }

    #[test]
    fn family_coverage_adds_children_at_three_eighths_face() {
        let benefits = schedule(Some("My Family"), 20_000).expect("schedule");
        let spouse = benefits.spouse.expect("spouse coverage");
        let children = benefits.children.expect("children coverage");

        assert_eq!(spouse.face_amount, 15_000);
        assert_eq!(children.face_amount, 7_500);
        assert_eq!(children.max_benefit, 22_500);
    }

    #[test]
    fn fractional_faces_floor_to_whole_dollars() {
        let benefits = schedule(Some("family"), 5_000).expect("schedule");

        // 75% of 5000 is exactly 3750; 37.5% is 1875.
        assert_eq!(benefits.spouse.expect("spouse").face_amount, 3_750);
        assert_eq!(benefits.children.expect("children").face_amount, 1_875);

        let odd = schedule(Some("family"), 4_999).expect("schedule");
        assert_eq!(odd.spouse.expect("spouse").face_amount, 3_749);
        assert_eq!(odd.children.expect("children").face_amount, 1_874);
    }

    #[test]
    fn absent_coverage_type_is_a_hard_failure_regardless_of_amount() {
        for face in [0, 5_000, 25_000] {
            let error = schedule(None, face).expect_err("missing coverage type");
            assert_eq!(error, DomainError::MissingCoverageType);
        }
    }

    #[test]
    fn unrecognized_coverage_type_defaults_to_insured_only() {
        let benefits = schedule(Some("the whole building"), 10_000).expect("schedule");
        assert!(benefits.spouse.is_none());
        assert!(benefits.children.is_none());
    }
}
