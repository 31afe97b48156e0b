use serde::{Deserialize, Serialize};

/// The five supplemental insurance lines the engine can rate. Collection
/// names outside this set are not an error: the dispatcher treats them as
/// "no recommendation available".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceLine {
    Accident,
    Cancer,
    HospitalIndemnity,
    CriticalIllness,
    ShortTermDisability,
}

impl InsuranceLine {
    pub const ALL: [InsuranceLine; 5] = [
        InsuranceLine::Accident,
        InsuranceLine::Cancer,
        InsuranceLine::HospitalIndemnity,
        InsuranceLine::CriticalIllness,
        InsuranceLine::ShortTermDisability,
    ];

    /// The catalog collection name this line is joined on.
    pub fn collection_name(&self) -> &'static str {
        match self {
            InsuranceLine::Accident => "Accident Insurance",
            InsuranceLine::Cancer => "Cancer Insurance",
            InsuranceLine::HospitalIndemnity => "Hospital Indemnity Insurance",
            InsuranceLine::CriticalIllness => "Critical Illness Insurance",
            InsuranceLine::ShortTermDisability => "Short Term Accident/Sickness Pay",
        }
    }

    pub fn from_collection_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|line| line.collection_name() == name)
    }
}
