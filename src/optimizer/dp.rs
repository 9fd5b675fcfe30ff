use super::{full_units, half_units, Budget, PlanError, WorkoutStrategy};
use crate::domain::{Exercise, Pick, Selection, SolverResult};

/// Choice recorded for one cell of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Skip,
    Full,
    Half,
}

/// Exact solver: dynamic programming over a half-minute time axis.
///
/// `dp[i][j]` is the most calories reachable with the first `i` exercises in
/// `j` half-minute units. Each exercise can be skipped, taken fully, or taken
/// as a half. Only a strictly better value replaces the current best, so ties
/// resolve in the order skip, full, half.
///
/// Nothing limits the number of half picks: the optimum may contain several.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSolver;

struct Table {
    value: Vec<Vec<f64>>,
    choice: Vec<Vec<Choice>>,
}

impl ExactSolver {
    fn build(exercises: &[Exercise], units: usize) -> Table {
        let n = exercises.len();
        let mut value = vec![vec![0.0; units + 1]; n + 1];
        let mut choice = vec![vec![Choice::Skip; units + 1]; n + 1];

        for i in 1..=n {
            let exercise = &exercises[i - 1];
            let full = full_units(exercise.minutes);
            let half = half_units(exercise.minutes);
            let full_calories = exercise.calories;
            let half_calories = full_calories / 2.0;

            for j in 0..=units {
                value[i][j] = value[i - 1][j];
                choice[i][j] = Choice::Skip;

                if j >= full {
                    let candidate = value[i - 1][j - full] + full_calories;
                    if candidate > value[i][j] {
                        value[i][j] = candidate;
                        choice[i][j] = Choice::Full;
                    }
                }

                if j >= half {
                    let candidate = value[i - 1][j - half] + half_calories;
                    if candidate > value[i][j] {
                        value[i][j] = candidate;
                        choice[i][j] = Choice::Half;
                    }
                }
            }
        }

        Table { value, choice }
    }

    /// Walk the choice table back from the full budget. Picks come out last
    /// exercise first and are reversed into catalog order.
    fn reconstruct<'a>(exercises: &'a [Exercise], table: &Table, units: usize) -> Selection<'a> {
        let mut picks = Vec::new();
        let mut cursor = units;

        for i in (1..=exercises.len()).rev() {
            let exercise = &exercises[i - 1];
            match table.choice[i][cursor] {
                Choice::Full => {
                    picks.push(Pick::full(exercise));
                    cursor -= full_units(exercise.minutes);
                }
                Choice::Half => {
                    picks.push(Pick::half(exercise));
                    cursor -= half_units(exercise.minutes);
                }
                Choice::Skip => {}
            }
        }
        picks.reverse();

        Selection::from(picks)
    }
}

impl WorkoutStrategy for ExactSolver {
    fn label(&self) -> &'static str {
        "DP"
    }

    fn solve<'a>(
        &self,
        exercises: &'a [Exercise],
        minutes: u32,
    ) -> Result<SolverResult<'a>, PlanError> {
        let budget = Budget::new(minutes)?;
        let units = budget.units();

        let table = Self::build(exercises, units);
        let total_calories = table.value[exercises.len()][units];
        let selection = Self::reconstruct(exercises, &table, units);

        tracing::debug!(
            minutes,
            cells = (exercises.len() + 1) * (units + 1),
            picks = selection.len(),
            total_calories,
            "dp plan"
        );

        Ok(SolverResult {
            selection,
            total_calories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Fraction, Group};

    #[test]
    fn test_base_row_is_zero() {
        let upper = Group::Upper.exercises();
        let table = ExactSolver::build(&upper, 60);
        assert!(table.value[0].iter().all(|v| *v == 0.0));
        assert!(table.choice[0].iter().all(|c| *c == Choice::Skip));
        assert_eq!(table.value.len(), 4);
        assert_eq!(table.value[0].len(), 61);
    }

    #[test]
    fn test_upper_15_takes_full_shoulder_press() {
        let upper = Group::Upper.exercises();
        let result = ExactSolver.solve(&upper, 15).unwrap();

        assert_eq!(result.selection.ids(), vec![1]);
        assert_eq!(result.selection.picks()[0].fraction, Fraction::Full);
        assert_eq!(result.total_calories, 120.0);
    }

    #[test]
    fn test_upper_30_beats_or_matches_greedy() {
        let upper = Group::Upper.exercises();
        let result = ExactSolver.solve(&upper, 30).unwrap();

        assert!(result.total_calories >= 270.0);
        assert!(result.selection.effective_minutes() <= 30.0);
        let sum: f64 = result.selection.iter().map(|p| p.effective_calories()).sum();
        assert_eq!(sum, result.total_calories);
    }

    #[test]
    fn test_picks_in_catalog_order() {
        let core = Group::Core.exercises();
        let result = ExactSolver.solve(&core, 40).unwrap();

        assert_eq!(result.selection.ids(), vec![6, 7, 8]);
        assert_eq!(result.selection.half_count(), 0);
        assert_eq!(result.total_calories, 220.0);
    }

    #[test]
    fn test_may_take_several_halves() {
        // Neither whole "a" nor whole "b" plus a half fits, two halves fill 20 minutes
        let catalog = vec![
            Exercise::new(0, "a", 24, 240.0),
            Exercise::new(1, "b", 16, 160.0),
        ];
        let result = ExactSolver.solve(&catalog, 20).unwrap();

        assert_eq!(result.selection.ids(), vec![0, 1]);
        assert_eq!(result.selection.half_count(), 2);
        assert_eq!(result.total_calories, 200.0);
        assert_eq!(result.selection.effective_minutes(), 20.0);
    }

    #[test]
    fn test_full_preferred_over_weaker_halves() {
        // full b = 120; half a + half b = 110
        let catalog = vec![
            Exercise::new(0, "a", 16, 100.0),
            Exercise::new(1, "b", 16, 120.0),
        ];
        let result = ExactSolver.solve(&catalog, 16).unwrap();
        assert_eq!(result.selection.ids(), vec![1]);
        assert_eq!(result.total_calories, 120.0);

        // full a = 200 ties half a + half b; the half option is never strictly better
        let catalog = vec![
            Exercise::new(0, "a", 40, 200.0),
            Exercise::new(1, "b", 40, 200.0),
        ];
        let result = ExactSolver.solve(&catalog, 40).unwrap();
        assert_eq!(result.selection.ids(), vec![0]);
        assert_eq!(result.selection.half_count(), 0);
        assert_eq!(result.total_calories, 200.0);
    }

    #[test]
    fn test_tie_keeps_skip_over_full() {
        // "b" taken fully ties with "a" taken fully, so "b" is skipped
        let catalog = vec![
            Exercise::new(0, "a", 15, 90.0),
            Exercise::new(1, "b", 15, 90.0),
        ];
        let result = ExactSolver.solve(&catalog, 15).unwrap();

        assert_eq!(result.selection.ids(), vec![0]);
        assert_eq!(result.total_calories, 90.0);
    }

    #[test]
    fn test_empty_catalog() {
        let result = ExactSolver.solve(&[], 60).unwrap();
        assert!(result.selection.is_empty());
        assert_eq!(result.total_calories, 0.0);
    }

    #[test]
    fn test_rejects_out_of_range_duration() {
        let upper = Group::Upper.exercises();
        assert_eq!(ExactSolver.solve(&upper, 14), Err(PlanError::InvalidDuration(14)));
        assert_eq!(ExactSolver.solve(&upper, 121), Err(PlanError::InvalidDuration(121)));
    }
}
