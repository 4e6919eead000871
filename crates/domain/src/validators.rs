use crate::errors::DomainError;

pub const MAX_LABEL_LEN: usize = 36;

/// Labels are short alphanumeric tags, the format the identity provider
/// accepts.
pub fn validate_label(label: &str) -> Result<(), DomainError> {
    if label.is_empty() {
        return Err(DomainError::InvalidLabel("label cannot be empty".to_string()));
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(DomainError::InvalidLabel(format!(
            "label cannot exceed {MAX_LABEL_LEN} characters"
        )));
    }
    if !label.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(DomainError::InvalidLabel(format!(
            "label '{label}' can only contain alphanumeric characters"
        )));
    }
    Ok(())
}
