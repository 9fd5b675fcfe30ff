use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::domain::SolverResult;

/// How the driver prints results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One strategy's answer, ready to print
#[derive(Debug, Serialize)]
pub struct PlanReport<'r, 'a> {
    pub strategy: &'static str,
    #[serde(flatten)]
    pub result: &'r SolverResult<'a>,
}

impl<'r, 'a> PlanReport<'r, 'a> {
    pub fn new(strategy: &'static str, result: &'r SolverResult<'a>) -> Self {
        Self { strategy, result }
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}

impl fmt::Display for PlanReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.strategy)?;
        writeln!(f, "Workout plan (name, minutes, calories):")?;
        for pick in &self.result.selection {
            write!(
                f,
                "{} ({}m, {}cal)",
                pick.exercise.name,
                pick.effective_minutes(),
                pick.effective_calories()
            )?;
            if pick.is_partial() {
                write!(f, " (1/2)")?;
            }
            writeln!(f)?;
        }
        write!(f, "Total calories: {} cal", self.result.total_calories)
    }
}
