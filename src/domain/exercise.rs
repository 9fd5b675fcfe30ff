use serde::{Deserialize, Serialize};

/// A single type of exercise in a workout catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: u32,
    pub name: String,
    /// Full duration in whole minutes (always positive)
    pub minutes: u32,
    /// Calories burned by the full exercise
    pub calories: f64,
}

impl Exercise {
    pub fn new(id: u32, name: impl Into<String>, minutes: u32, calories: f64) -> Self {
        Self {
            id,
            name: name.into(),
            minutes,
            calories,
        }
    }

    /// Calories burned per minute
    pub fn density(&self) -> f64 {
        if self.minutes == 0 {
            return 0.0;
        }
        self.calories / self.minutes as f64
    }
}
