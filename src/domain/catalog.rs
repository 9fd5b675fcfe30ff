use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::Exercise;

/// Built-in exercise groups
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Group {
    Upper,
    Lower,
    Core,
    Full,
}

impl Group {
    /// Build the catalog for this group. Ids are unique across all groups.
    pub fn exercises(self) -> Vec<Exercise> {
        match self {
            Group::Upper => vec![
                Exercise::new(0, "push ups", 10, 100.0),
                Exercise::new(1, "shoulder press", 15, 120.0),
                Exercise::new(2, "pull ups", 12, 110.0),
            ],
            Group::Lower => vec![
                Exercise::new(3, "squats", 10, 130.0),
                Exercise::new(4, "leg press", 8, 100.0),
                Exercise::new(5, "lunges", 20, 200.0),
            ],
            Group::Core => vec![
                Exercise::new(6, "sit ups", 15, 90.0),
                Exercise::new(7, "plank", 5, 70.0),
                Exercise::new(8, "russian twist", 8, 60.0),
            ],
            Group::Full => vec![
                Exercise::new(9, "jumping jacks", 10, 60.0),
                Exercise::new(10, "mountain climbs", 15, 110.0),
                Exercise::new(11, "burpees", 20, 140.0),
            ],
        }
    }
}
