//! Field validation for task create and edit payloads.
//!
//! Validation runs before any network call so that bad input never reaches
//! the server. Each violation carries its own distinct, user-facing message.

use crate::task::TaskDraft;

/// Maximum length of a task name, in characters.
pub const NAME_LIMIT: usize = 75;

/// Maximum length of a task description, in characters.
pub const DESCRIPTION_LIMIT: usize = 250;

/// A task draft that failed validation.
///
/// Variants map one-to-one to the constraints on a task payload; the
/// `Display` output is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The name was absent or blank after trimming.
    #[error("task name is required")]
    NameRequired,

    /// The name exceeded [`NAME_LIMIT`] characters.
    #[error("task name cannot exceed {NAME_LIMIT} characters (got {0})")]
    NameTooLong(usize),

    /// The description exceeded [`DESCRIPTION_LIMIT`] characters.
    #[error("description cannot exceed {DESCRIPTION_LIMIT} characters (got {0})")]
    DescriptionTooLong(usize),

    /// No due date was provided.
    #[error("due date is required")]
    DueDateRequired,
}

/// Validates a draft for create or edit, failing fast on the first
/// violation.
///
/// Checks, in order: name present and non-blank, name within
/// [`NAME_LIMIT`], description within [`DESCRIPTION_LIMIT`], due date
/// present. Lengths are counted in characters, not bytes. Boundary lengths
/// (exactly 75 and exactly 250) are accepted.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::{validate, TaskDraft, ValidationError};
///
/// let draft = TaskDraft {
///     name: "  ".to_string(),
///     ..TaskDraft::default()
/// };
/// assert_eq!(validate(&draft), Err(ValidationError::NameRequired));
/// ```
pub fn validate(draft: &TaskDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }

    let name_len = draft.name.chars().count();
    if name_len > NAME_LIMIT {
        return Err(ValidationError::NameTooLong(name_len));
    }

    if let Some(description) = &draft.description {
        let desc_len = description.chars().count();
        if desc_len > DESCRIPTION_LIMIT {
            return Err(ValidationError::DescriptionTooLong(desc_len));
        }
    }

    if draft.due_date.is_none() {
        return Err(ValidationError::DueDateRequired);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_draft() -> TaskDraft {
        TaskDraft {
            name: "Write documentation".to_string(),
            description: Some("Document API endpoints".to_string()),
            status: crate::task::TaskStatus::Pending,
            due_date: NaiveDate::from_ymd_opt(2026, 1, 15),
        }
    }

    #[test]
    fn accepts_valid_draft() {
        assert_eq!(validate(&valid_draft()), Ok(()));
    }

    #[test]
    fn rejects_empty_name() {
        let mut draft = valid_draft();
        draft.name = String::new();
        assert_eq!(validate(&draft), Err(ValidationError::NameRequired));
    }

    #[test]
    fn rejects_blank_name() {
        let mut draft = valid_draft();
        draft.name = "   \t".to_string();
        assert_eq!(validate(&draft), Err(ValidationError::NameRequired));
    }

    #[test]
    fn accepts_name_at_limit() {
        let mut draft = valid_draft();
        draft.name = "x".repeat(NAME_LIMIT);
        assert_eq!(validate(&draft), Ok(()));
    }

    #[test]
    fn rejects_name_over_limit() {
        let mut draft = valid_draft();
        draft.name = "x".repeat(NAME_LIMIT + 1);
        assert_eq!(
            validate(&draft),
            Err(ValidationError::NameTooLong(NAME_LIMIT + 1))
        );
    }

    #[test]
    fn accepts_description_at_limit() {
        let mut draft = valid_draft();
        draft.description = Some("y".repeat(DESCRIPTION_LIMIT));
        assert_eq!(validate(&draft), Ok(()));
    }

    #[test]
    fn rejects_description_over_limit() {
        let mut draft = valid_draft();
        draft.description = Some("y".repeat(DESCRIPTION_LIMIT + 1));
        assert_eq!(
            validate(&draft),
            Err(ValidationError::DescriptionTooLong(DESCRIPTION_LIMIT + 1))
        );
    }

    #[test]
    fn missing_description_is_fine() {
        let mut draft = valid_draft();
        draft.description = None;
        assert_eq!(validate(&draft), Ok(()));
    }

    #[test]
    fn rejects_missing_due_date() {
        let mut draft = valid_draft();
        draft.due_date = None;
        assert_eq!(validate(&draft), Err(ValidationError::DueDateRequired));
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let mut draft = valid_draft();
        // 75 multi-byte characters: within the limit even though the byte
        // length is three times larger.
        draft.name = "é".repeat(NAME_LIMIT);
        assert_eq!(validate(&draft), Ok(()));
    }

    #[test]
    fn each_violation_has_a_distinct_message() {
        let messages = [
            ValidationError::NameRequired.to_string(),
            ValidationError::NameTooLong(76).to_string(),
            ValidationError::DescriptionTooLong(251).to_string(),
            ValidationError::DueDateRequired.to_string(),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
