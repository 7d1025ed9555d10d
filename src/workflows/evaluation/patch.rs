use serde::{Deserialize, Serialize};

use super::domain::{Approver, SalesPerformance, SocialPerformance};

/// Field-wise update to a stored evaluation.
///
/// Every field is optional by design: absent fields keep their stored value
/// when merged via [`super::domain::Evaluation::merged`]. This replaces the
/// ad-hoc partial-object merging the external API payloads would otherwise
/// force into the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvaluationPatch {
    pub fullname: Option<String>,
    pub department: Option<String>,
    pub remark: Option<String>,
    pub sales_evaluation: Option<Vec<SalesPerformance>>,
    pub social_evaluation: Option<Vec<SocialPerformance>>,
    #[serde(rename = "acceptedHR")]
    pub accepted_hr: Option<bool>,
    #[serde(rename = "acceptedCEO")]
    pub accepted_ceo: Option<bool>,
    pub accepted_salesman: Option<bool>,
}

impl EvaluationPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// The single-flag patch used by the accept operations.
    pub fn acceptance(approver: Approver) -> Self {
        let mut patch = Self::default();
        match approver {
            Approver::Hr => patch.accepted_hr = Some(true),
            Approver::Ceo => patch.accepted_ceo = Some(true),
            Approver::Salesman => patch.accepted_salesman = Some(true),
        }
        patch
    }
}
