//! Exercise model
//!
//! Reference exercises grouped by the muscle group they train.

use serde::{Deserialize, Serialize};

/// Muscle group enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
    Cardio,
}

impl MuscleGroup {
    /// All groups in display order
    pub const ALL: [MuscleGroup; 7] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Shoulders,
        MuscleGroup::Arms,
        MuscleGroup::Legs,
        MuscleGroup::Core,
        MuscleGroup::Cardio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Arms => "arms",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Core => "core",
            MuscleGroup::Cardio => "cardio",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "chest" => Some(MuscleGroup::Chest),
            "back" => Some(MuscleGroup::Back),
            "shoulders" => Some(MuscleGroup::Shoulders),
            "arms" => Some(MuscleGroup::Arms),
            "legs" => Some(MuscleGroup::Legs),
            "core" => Some(MuscleGroup::Core),
            "cardio" => Some(MuscleGroup::Cardio),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "CHEST",
            MuscleGroup::Back => "BACK",
            MuscleGroup::Shoulders => "SHOULDERS",
            MuscleGroup::Arms => "ARMS",
            MuscleGroup::Legs => "LEGS",
            MuscleGroup::Core => "CORE",
            MuscleGroup::Cardio => "CARDIO",
        }
    }
}

/// A reference exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub equipment: String,
    pub description: String,
    pub tips: Vec<String>,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muscle_group_round_trip() {
        for group in MuscleGroup::ALL {
            assert_eq!(MuscleGroup::from_str(group.as_str()), Some(group));
        }
        assert_eq!(MuscleGroup::from_str("CHEST"), Some(MuscleGroup::Chest));
        assert_eq!(MuscleGroup::from_str("glutes"), None);
    }
}
