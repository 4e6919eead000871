use menuvault_domain::GuardDecision;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
pub struct GuardQuery {
    pub path: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct GuardResponse {
    pub allow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl From<GuardDecision> for GuardResponse {
    fn from(decision: GuardDecision) -> Self {
        match decision {
            GuardDecision::Allow => Self {
                allow: true,
                redirect: None,
            },
            GuardDecision::Redirect { target } => Self {
                allow: false,
                redirect: Some(target),
            },
        }
    }
}
