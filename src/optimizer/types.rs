use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::{ExactSolver, GreedySolver, PlanError};
use crate::domain::{Exercise, SolverResult};

/// Available selection strategies
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Strategy {
    Greedy,
    Dp,
}

impl Strategy {
    pub fn solver(self) -> Box<dyn WorkoutStrategy> {
        match self {
            Strategy::Greedy => Box::new(GreedySolver),
            Strategy::Dp => Box::new(ExactSolver),
        }
    }
}

pub trait WorkoutStrategy: Send + Sync {
    /// Short label used in reports and logs
    fn label(&self) -> &'static str;

    fn solve<'a>(
        &self,
        exercises: &'a [Exercise],
        minutes: u32,
    ) -> Result<SolverResult<'a>, PlanError>;
}

pub struct WorkoutPlanner {
    pub strategy: Box<dyn WorkoutStrategy>,
}

impl WorkoutPlanner {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy: strategy.solver(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.strategy.label()
    }

    pub fn plan<'a>(
        &self,
        exercises: &'a [Exercise],
        minutes: u32,
    ) -> Result<SolverResult<'a>, PlanError> {
        self.strategy.solve(exercises, minutes)
    }
}

/// Greedy and exact answers for the same catalog and budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison<'a> {
    pub greedy: SolverResult<'a>,
    pub exact: SolverResult<'a>,
}

impl Comparison<'_> {
    /// Calories the exact answer gains over the greedy one
    pub fn gap(&self) -> f64 {
        self.exact.total_calories - self.greedy.total_calories
    }
}

/// Run both strategies over the same input
pub fn compare(exercises: &[Exercise], minutes: u32) -> Result<Comparison<'_>, PlanError> {
    let greedy = GreedySolver.solve(exercises, minutes)?;
    let exact = ExactSolver.solve(exercises, minutes)?;
    Ok(Comparison { greedy, exact })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Group;
    use std::str::FromStr;

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(Strategy::from_str("greedy").unwrap(), Strategy::Greedy);
        assert_eq!(Strategy::from_str("DP").unwrap(), Strategy::Dp);
        assert!(Strategy::from_str("milp").is_err());
    }

    #[test]
    fn test_planner_dispatches_to_strategy() {
        let upper = Group::Upper.exercises();

        let greedy = WorkoutPlanner::new(Strategy::Greedy);
        assert_eq!(greedy.label(), "Greedy");
        assert_eq!(greedy.plan(&upper, 30).unwrap().total_calories, 270.0);

        let dp = WorkoutPlanner::new(Strategy::Dp);
        assert_eq!(dp.label(), "DP");
        assert!(dp.plan(&upper, 30).unwrap().total_calories >= 270.0);
    }

    #[test]
    fn test_compare_upper_30() {
        let upper = Group::Upper.exercises();
        let comparison = compare(&upper, 30).unwrap();
        assert!(comparison.gap() >= 0.0);
    }

    #[test]
    fn test_compare_rejects_invalid_duration() {
        let upper = Group::Upper.exercises();
        assert_eq!(compare(&upper, 121), Err(PlanError::InvalidDuration(121)));
    }
}
