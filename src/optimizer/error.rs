use thiserror::Error;

use super::{MAX_WORKOUT_MINUTES, MIN_WORKOUT_MINUTES};

/// Errors returned by the workout solvers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error(
        "Workout duration must be between {min} and {max} mins (got {0})",
        min = MIN_WORKOUT_MINUTES,
        max = MAX_WORKOUT_MINUTES
    )]
    InvalidDuration(u32),
}
