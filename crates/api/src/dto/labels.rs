use menuvault_domain::LabelOutcome;
use serde::{Deserialize, Serialize};

/// Body of every `POST /api/users/labels` response, success or not.
#[derive(Serialize, Deserialize, Debug)]
pub struct LabelsResponse {
    pub success: bool,
    pub changed: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl LabelsResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            changed: false,
            message: message.into(),
            labels: None,
        }
    }
}

impl From<LabelOutcome> for LabelsResponse {
    fn from(outcome: LabelOutcome) -> Self {
        Self {
            success: true,
            changed: outcome.changed,
            message: outcome.message,
            labels: Some(outcome.labels),
        }
    }
}
