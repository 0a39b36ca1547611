//! DTOs for the heritage backend.
//!
//! The backend is consumed as opaque HTTP endpoints; field names follow
//! its JSON exactly (including the French `titre`).

use serde::{Deserialize, Serialize};

/// `GET /get-source-id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceIdResponse {
    pub source_id: String,
}

/// `POST /chat` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub source_id: String,
    pub question: String,
}

/// `POST /chat` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
}

/// One record of `GET /coloration/get-all-data`.
///
/// Image paths are derived client-side from `figure`
/// (`/coloration/{figure}/before.jpg`, `/coloration/{figure}/after.jpg`).
/// Enhanced assets live under `/enhanced/{figure}/` with `.jpeg`
/// extensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorationRecord {
    pub id: u32,
    pub titre: String,
    pub figure: String,
    pub description: String,
}

impl ColorationRecord {
    pub fn before_image(&self, enhanced: bool) -> String {
        if enhanced {
            format!("/enhanced/{}/before.jpeg", self.figure)
        } else {
            format!("/coloration/{}/before.jpg", self.figure)
        }
    }

    pub fn after_image(&self, enhanced: bool) -> String {
        if enhanced {
            format!("/enhanced/{}/after.jpeg", self.figure)
        } else {
            format!("/coloration/{}/after.jpg", self.figure)
        }
    }
}

/// One record of `GET /objects/get-all-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    pub id: u32,
    pub titre: String,
    pub figure: String,
    pub description: String,
    /// Path of the GLB model for the 3D viewer.
    pub model_path: String,
}

impl ArtifactRecord {
    /// Short card text; long descriptions are cut with an ellipsis.
    pub fn summary(&self) -> String {
        if self.description.chars().count() > 150 {
            let cut: String = self.description.chars().take(100).collect();
            format!("{cut}...")
        } else {
            self.description.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coloration_image_paths() {
        let record = ColorationRecord {
            id: 1,
            titre: "Temple".to_string(),
            figure: "fig_296".to_string(),
            description: String::new(),
        };
        assert_eq!(record.before_image(false), "/coloration/fig_296/before.jpg");
        assert_eq!(record.after_image(false), "/coloration/fig_296/after.jpg");
    }

    #[test]
    fn test_enhanced_paths_use_jpeg_extension() {
        let record = ColorationRecord {
            id: 1,
            titre: "Temple".to_string(),
            figure: "fig_296".to_string(),
            description: String::new(),
        };
        assert_eq!(record.before_image(true), "/enhanced/fig_296/before.jpeg");
        assert_eq!(record.after_image(true), "/enhanced/fig_296/after.jpeg");
    }

    #[test]
    fn test_artifact_summary_truncates_long_descriptions() {
        let record = ArtifactRecord {
            id: 1,
            titre: "Capital".to_string(),
            figure: "fig_335".to_string(),
            description: "x".repeat(200),
            model_path: "/models/Figure 335.glb".to_string(),
        };
        assert_eq!(record.summary(), format!("{}...", "x".repeat(100)));
    }

    #[test]
    fn test_artifact_summary_keeps_short_descriptions() {
        let record = ArtifactRecord {
            id: 1,
            titre: "Capital".to_string(),
            figure: "fig_335".to_string(),
            description: "short".to_string(),
            model_path: String::new(),
        };
        assert_eq!(record.summary(), "short");
    }
}
