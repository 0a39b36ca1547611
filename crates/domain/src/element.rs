//! Collectible heritage element catalog entries.
//!
//! Everything on a `HistoricalElement` except the `unlocked` flag is
//! immutable catalog data: the full set is built once at startup
//! (see [`crate::catalog`]) and elements are never added or removed at
//! runtime. `unlocked` flips `false -> true` exactly once, via
//! [`crate::hunt::HuntBoard::unlock`].

use serde::{Deserialize, Serialize};

use crate::ids::ElementId;

/// What kind of find the element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Artifact,
    Building,
    Inscription,
    Architectural,
}

/// Historical era the element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementCategory {
    Roman,
    Byzantine,
    Christian,
    Industrial,
}

/// Hunt difficulty, 1 (easy) to 3 (hard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hard),
            other => Err(format!("difficulty out of range: {other}")),
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

/// Where to look for the element on site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementLocation {
    pub area: String,
    pub coordinates: Option<String>,
    /// Ordered, most helpful first.
    pub hints: Vec<String>,
}

/// What the player sees before the element is discovered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClueBundle {
    /// Asset path of the greyed-out silhouette shown on locked cards.
    pub silhouette: String,
    pub riddle: String,
    pub historical_context: String,
}

/// What the player sees after the element is discovered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDetails {
    pub description: String,
    pub historical_period: String,
    pub significance: String,
    pub fun_facts: Vec<String>,
    /// Informational cross-references; not enforced referential integrity.
    pub related_elements: Vec<ElementId>,
}

/// Optional gating conditions. Present in the catalog data but not
/// currently evaluated by the scan flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlockRequirements {
    pub prerequisite_elements: Vec<ElementId>,
    pub time_of_day: Option<TimeOfDay>,
    pub special_conditions: Vec<String>,
}

/// What a successful discovery grants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rewards {
    pub points: u32,
    pub badge: Option<String>,
    pub title: Option<String>,
    pub special_unlock: Option<String>,
}

/// Recognition assets for the scan flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReference {
    /// Full-color reference image, also the card image once unlocked.
    pub target_image_path: String,
    /// Match score required for a real recognizer, in [0, 1].
    pub recognition_threshold: f32,
    pub alternative_angles: Vec<String>,
}

/// A collectible heritage catalog entry with locked/unlocked state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalElement {
    pub id: ElementId,
    pub name: String,
    pub kind: ElementKind,
    pub difficulty: Difficulty,
    pub category: ElementCategory,
    pub points: u32,
    pub location: ElementLocation,
    pub clues: ClueBundle,
    pub details: ElementDetails,
    pub unlock_requirements: Option<UnlockRequirements>,
    pub rewards: Rewards,
    pub model: ModelReference,
    /// The only field ever mutated after construction. One-way: an
    /// unlocked element is never re-locked.
    pub unlocked: bool,
}

impl HistoricalElement {
    /// Image shown on the discovery card: the colored target once
    /// unlocked, the silhouette before.
    pub fn card_image(&self) -> &str {
        if self.unlocked {
            &self.model.target_image_path
        } else {
            &self.clues.silhouette
        }
    }

    /// The original data pairs before/after shots in one directory, so
    /// the locked detail image is derived from the target path.
    pub fn locked_detail_image(&self) -> String {
        self.model.target_image_path.replace("after", "before")
    }
}
