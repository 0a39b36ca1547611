//! Archaeological sites offered for movie generation.

use serde::{Deserialize, Serialize};

use crate::ids::SiteId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeritageSite {
    pub id: SiteId,
    pub name: String,
    pub description: String,
    /// Pre-rendered clip revealed when the simulated generation ends.
    pub video_path: String,
}
