use menuvault_domain::validators::validate_label;
use menuvault_domain::{
    AuthState, DomainError, LabelAction, LabelMutationRequest, LabelOutcome,
};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::UserDirectory;

/// Use case for adding or removing a role label on a user.
///
/// Only callers holding the `admin` role may mutate labels. Labels compare
/// case-insensitively, matching how roles are derived from them. Adding a
/// label that is already present, or removing one that is absent, succeeds
/// without touching the directory.
pub struct UpdateUserLabelsUseCase {
    directory: Arc<dyn UserDirectory>,
}

impl UpdateUserLabelsUseCase {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    #[instrument(skip(self, caller), fields(caller = ?caller.user_id))]
    pub async fn execute(
        &self,
        caller: &AuthState,
        request: LabelMutationRequest,
    ) -> Result<LabelOutcome, DomainError> {
        let user_id = required(request.user_id, "userId")?;
        let action: LabelAction = required(request.action, "action")?.parse()?;
        let label = required(request.label, "label")?;

        if !caller.logged_in {
            return Err(DomainError::Unauthenticated);
        }
        if !caller.is_admin() {
            return Err(DomainError::PermissionDenied(
                "only administrators can manage user labels".to_string(),
            ));
        }

        validate_label(&label)?;

        let current = self.directory.labels(&user_id).await?;
        let present = current.iter().any(|l| l.eq_ignore_ascii_case(&label));

        let outcome = match action {
            LabelAction::Add if present => LabelOutcome {
                changed: false,
                message: "Label already present".to_string(),
                labels: current,
            },
            LabelAction::Add => {
                let mut updated = current;
                updated.push(label.clone());
                LabelOutcome {
                    changed: true,
                    message: "Label added".to_string(),
                    labels: self.directory.update_labels(&user_id, updated).await?,
                }
            }
            LabelAction::Remove if !present => LabelOutcome {
                changed: false,
                message: "Label not present".to_string(),
                labels: current,
            },
            LabelAction::Remove => {
                let updated: Vec<String> = current
                    .into_iter()
                    .filter(|l| !l.eq_ignore_ascii_case(&label))
                    .collect();
                LabelOutcome {
                    changed: true,
                    message: "Label removed".to_string(),
                    labels: self.directory.update_labels(&user_id, updated).await?,
                }
            }
        };

        info!(
            user_id = %user_id,
            label = %label,
            action = ?action,
            changed = outcome.changed,
            "User labels updated"
        );

        Ok(outcome)
    }
}

fn required(value: Option<String>, name: &str) -> Result<String, DomainError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DomainError::MissingParameter(name.to_string()))
}
