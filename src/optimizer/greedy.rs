use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use super::{full_units, half_units, Budget, PlanError, WorkoutStrategy};
use crate::domain::{Exercise, Pick, Selection, SolverResult};

/// Greedy heuristic that takes exercises with the highest calories per minute
/// first. Half an exercise may be taken once, to fill what is left, and it
/// ends the scan. This serves as a baseline to compare the exact solver against.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl GreedySolver {
    /// Catalog ordered by density, highest first. Equal densities keep catalog order.
    fn by_density(exercises: &[Exercise]) -> Vec<&Exercise> {
        exercises
            .iter()
            .sorted_by_key(|e| Reverse(OrderedFloat(e.density())))
            .collect()
    }
}

impl WorkoutStrategy for GreedySolver {
    fn label(&self) -> &'static str {
        "Greedy"
    }

    fn solve<'a>(
        &self,
        exercises: &'a [Exercise],
        minutes: u32,
    ) -> Result<SolverResult<'a>, PlanError> {
        let budget = Budget::new(minutes)?;
        let capacity = budget.units();

        // Time is tracked in half-minute units, the same axis the exact solver uses
        let mut used = 0usize;
        let mut total_calories = 0.0;
        let mut selection = Selection::new();

        for exercise in Self::by_density(exercises) {
            if used + full_units(exercise.minutes) <= capacity {
                selection.push(Pick::full(exercise));
                used += full_units(exercise.minutes);
                total_calories += exercise.calories;
            } else if used < capacity && used + half_units(exercise.minutes) <= capacity {
                selection.push(Pick::half(exercise));
                used += half_units(exercise.minutes);
                total_calories += exercise.calories / 2.0;
                // only one fractional exercise, and it fills what is left
                break;
            }
        }

        let used_minutes = used as f64 / 2.0;
        tracing::debug!(
            minutes,
            picks = selection.len(),
            used_minutes,
            total_calories,
            "greedy plan"
        );

        Ok(SolverResult {
            selection,
            total_calories,
        })
    }
}
