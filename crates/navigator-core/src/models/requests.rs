//! Request types for changing step instances.

use super::StepStatus;

/// Validated status change for one step of a user's roadmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub user_id: u64,
    pub step_id: u64,
    pub status: StepStatus,
    /// `Some` overwrites the stored notes; `None` leaves them unchanged
    pub notes: Option<String>,
}

impl TryFrom<crate::params::UpdateStepStatus> for StatusChange {
    type Error = crate::NavigatorError;

    /// Convert an UpdateStepStatus parameter into a validated StatusChange.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the status string is not one of
    /// `not_started`, `in_progress` or `completed`.
    fn try_from(params: crate::params::UpdateStepStatus) -> Result<Self, Self::Error> {
        let status = params.status.parse::<StepStatus>().map_err(|_| {
            crate::NavigatorError::invalid_input("status").with_reason(format!(
                "Invalid status '{}'. Must be 'not_started', 'in_progress', or 'completed'",
                params.status
            ))
        })?;

        Ok(StatusChange {
            user_id: params.user_id,
            step_id: params.step_id,
            status,
            notes: params.notes,
        })
    }
}
