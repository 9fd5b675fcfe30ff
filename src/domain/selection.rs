use serde::Serialize;

use super::Exercise;

/// How much of an exercise a pick includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fraction {
    Full,
    Half,
}

impl Fraction {
    pub fn factor(self) -> f64 {
        match self {
            Fraction::Full => 1.0,
            Fraction::Half => 0.5,
        }
    }
}

/// A catalog exercise plus the fraction of it that was taken.
/// Borrows the exercise from the caller's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pick<'a> {
    pub exercise: &'a Exercise,
    pub fraction: Fraction,
}

impl<'a> Pick<'a> {
    pub fn full(exercise: &'a Exercise) -> Self {
        Self { exercise, fraction: Fraction::Full }
    }

    pub fn half(exercise: &'a Exercise) -> Self {
        Self { exercise, fraction: Fraction::Half }
    }

    pub fn effective_minutes(&self) -> f64 {
        self.exercise.minutes as f64 * self.fraction.factor()
    }

    pub fn effective_calories(&self) -> f64 {
        self.exercise.calories * self.fraction.factor()
    }

    pub fn is_partial(&self) -> bool {
        self.fraction == Fraction::Half
    }
}

/// Ordered picks forming one solver's answer
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Selection<'a> {
    picks: Vec<Pick<'a>>,
}

impl<'a> Selection<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pick: Pick<'a>) {
        self.picks.push(pick);
    }

    pub fn picks(&self) -> &[Pick<'a>] {
        &self.picks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pick<'a>> {
        self.picks.iter()
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Sum of `minutes * fraction` over all picks
    pub fn effective_minutes(&self) -> f64 {
        self.picks.iter().map(Pick::effective_minutes).sum()
    }

    pub fn half_count(&self) -> usize {
        self.picks.iter().filter(|p| p.is_partial()).count()
    }

    /// Exercise ids in selection order
    pub fn ids(&self) -> Vec<u32> {
        self.picks.iter().map(|p| p.exercise.id).collect()
    }
}

impl<'a> From<Vec<Pick<'a>>> for Selection<'a> {
    fn from(picks: Vec<Pick<'a>>) -> Self {
        Self { picks }
    }
}

impl<'s, 'a> IntoIterator for &'s Selection<'a> {
    type Item = &'s Pick<'a>;
    type IntoIter = std::slice::Iter<'s, Pick<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.picks.iter()
    }
}

/// A selection and the calories it burns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolverResult<'a> {
    pub selection: Selection<'a>,
    pub total_calories: f64,
}

impl<'a> SolverResult<'a> {
    pub fn empty() -> Self {
        Self {
            selection: Selection::new(),
            total_calories: 0.0,
        }
    }
}
