use super::PlanError;

/// Shortest workout either solver accepts, in minutes
pub const MIN_WORKOUT_MINUTES: u32 = 15;
/// Longest workout either solver accepts, in minutes
pub const MAX_WORKOUT_MINUTES: u32 = 120;

/// Validated time budget for one solve. Solvers work in half-minute units so
/// that half an odd-length exercise is still a whole number of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Budget {
    minutes: u32,
}

impl Budget {
    /// Validate a requested duration against `[15, 120]` minutes
    pub fn new(minutes: u32) -> Result<Self, PlanError> {
        if !(MIN_WORKOUT_MINUTES..=MAX_WORKOUT_MINUTES).contains(&minutes) {
            tracing::warn!(
                minutes,
                min = MIN_WORKOUT_MINUTES,
                max = MAX_WORKOUT_MINUTES,
                "rejected workout duration"
            );
            return Err(PlanError::InvalidDuration(minutes));
        }
        Ok(Self { minutes })
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Budget in half-minute units
    pub fn units(&self) -> usize {
        self.minutes as usize * 2
    }
}

/// Half-minute units needed for the whole exercise
pub fn full_units(minutes: u32) -> usize {
    minutes as usize * 2
}

/// Half-minute units needed for half the exercise
pub fn half_units(minutes: u32) -> usize {
    minutes as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_bounds() {
        assert!(Budget::new(14).is_err());
        assert!(Budget::new(121).is_err());
        assert_eq!(Budget::new(15).unwrap().minutes(), 15);
        assert_eq!(Budget::new(120).unwrap().units(), 240);
    }

    #[test]
    fn test_odd_exercise_halves_to_whole_units() {
        assert_eq!(full_units(15), 30);
        assert_eq!(half_units(15), 15);
    }
}
