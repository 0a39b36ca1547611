//! The discovery board: catalog, tri-state filter, and selection.

use serde::{Deserialize, Serialize};

use crate::element::HistoricalElement;
use crate::error::DomainError;
use crate::ids::ElementId;

/// View filter over the catalog. Pure view state, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DiscoveryFilter {
    #[default]
    All,
    Locked,
    Unlocked,
}

impl DiscoveryFilter {
    pub fn matches(&self, element: &HistoricalElement) -> bool {
        match self {
            Self::All => true,
            Self::Locked => !element.unlocked,
            Self::Unlocked => element.unlocked,
        }
    }

    /// Display labels, in the order the filter bar renders them.
    pub const ALL: [DiscoveryFilter; 3] = [Self::All, Self::Locked, Self::Unlocked];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Tout",
            Self::Locked => "Verrouillé",
            Self::Unlocked => "Déverrouillé",
        }
    }
}

/// Catalog plus the view state layered on it.
///
/// The element list keeps its insertion order; `visible` never re-sorts.
/// The selection is stored as an id and resolved against the live catalog
/// on read, so a selected element always reflects the current `unlocked`
/// state without any copy-syncing.
#[derive(Debug, Clone)]
pub struct HuntBoard {
    elements: Vec<HistoricalElement>,
    filter: DiscoveryFilter,
    selected: Option<ElementId>,
}

impl HuntBoard {
    pub fn new(elements: Vec<HistoricalElement>) -> Self {
        Self {
            elements,
            filter: DiscoveryFilter::default(),
            selected: None,
        }
    }

    pub fn elements(&self) -> &[HistoricalElement] {
        &self.elements
    }

    pub fn filter(&self) -> DiscoveryFilter {
        self.filter
    }

    /// Replace the active filter. Clears the selection so the detail view
    /// never shows an element outside the active filter.
    pub fn set_filter(&mut self, filter: DiscoveryFilter) {
        self.filter = filter;
        self.selected = None;
    }

    /// Elements matching the active filter, in catalog order.
    pub fn visible(&self) -> Vec<&HistoricalElement> {
        self.elements
            .iter()
            .filter(|e| self.filter.matches(e))
            .collect()
    }

    /// Select an element for the detail view. An id outside the catalog
    /// is refused with `NotFound` and the selection is left untouched,
    /// keeping the invariant that a selection always resolves.
    pub fn select(&mut self, id: &ElementId) -> Result<(), DomainError> {
        if self.elements.iter().any(|e| &e.id == id) {
            self.selected = Some(id.clone());
            Ok(())
        } else {
            Err(DomainError::not_found("element", id.to_string()))
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&HistoricalElement> {
        let id = self.selected.as_ref()?;
        self.elements.iter().find(|e| &e.id == id)
    }

    pub fn selected_id(&self) -> Option<&ElementId> {
        self.selected.as_ref()
    }

    /// One-way unlock. Idempotent: unlocking an already-unlocked element
    /// changes nothing and reports whether a flip happened. An unknown id
    /// is refused with `NotFound`, catalog untouched.
    pub fn unlock(&mut self, id: &ElementId) -> Result<bool, DomainError> {
        match self.elements.iter_mut().find(|e| &e.id == id) {
            Some(element) if !element.unlocked => {
                element.unlocked = true;
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(DomainError::not_found("element", id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{
        ClueBundle, Difficulty, ElementCategory, ElementDetails, ElementKind, ElementLocation,
        ModelReference, Rewards,
    };

    fn element(id: &str, unlocked: bool) -> HistoricalElement {
        HistoricalElement {
            id: ElementId::from(id),
            name: format!("Element {id}"),
            kind: ElementKind::Architectural,
            difficulty: Difficulty::Medium,
            category: ElementCategory::Roman,
            points: 150,
            location: ElementLocation {
                area: "Temple Complex".to_string(),
                coordinates: None,
                hints: vec!["Eastern side of the forum".to_string()],
            },
            clues: ClueBundle {
                silhouette: "/fig/before.jpg".to_string(),
                riddle: "Atop columns I did stand".to_string(),
                historical_context: "Part of the main colonnade".to_string(),
            },
            details: ElementDetails {
                description: "An ornate capital".to_string(),
                historical_period: "2nd Century AD".to_string(),
                significance: "Roman craftsmanship".to_string(),
                fun_facts: vec![],
                related_elements: vec![],
            },
            unlock_requirements: None,
            rewards: Rewards {
                points: 150,
                badge: None,
                title: None,
                special_unlock: None,
            },
            model: ModelReference {
                target_image_path: "/fig/after.jpg".to_string(),
                recognition_threshold: 0.85,
                alternative_angles: vec![],
            },
            unlocked,
        }
    }

    fn board() -> HuntBoard {
        HuntBoard::new(vec![
            element("CAP-001", false),
            element("COL-001", true),
            element("BAS-002", false),
        ])
    }

    fn visible_ids(board: &HuntBoard) -> Vec<String> {
        board.visible().iter().map(|e| e.id.to_string()).collect()
    }

    #[test]
    fn test_visible_all_preserves_catalog_order() {
        let b = board();
        assert_eq!(visible_ids(&b), vec!["CAP-001", "COL-001", "BAS-002"]);
    }

    #[test]
    fn test_visible_locked_and_unlocked_partition() {
        let mut b = board();
        b.set_filter(DiscoveryFilter::Locked);
        assert_eq!(visible_ids(&b), vec!["CAP-001", "BAS-002"]);
        b.set_filter(DiscoveryFilter::Unlocked);
        assert_eq!(visible_ids(&b), vec!["COL-001"]);
    }

    #[test]
    fn test_locked_element_moves_between_filters_after_unlock() {
        // Single-element scenario: CAP-001 locked shows under Locked only,
        // then under Unlocked only once discovered.
        let mut b = HuntBoard::new(vec![element("CAP-001", false)]);
        b.set_filter(DiscoveryFilter::Locked);
        assert_eq!(visible_ids(&b), vec!["CAP-001"]);
        b.set_filter(DiscoveryFilter::Unlocked);
        assert!(b.visible().is_empty());

        assert!(b.unlock(&ElementId::from("CAP-001")).expect("known id"));
        b.set_filter(DiscoveryFilter::Locked);
        assert!(b.visible().is_empty());
        b.set_filter(DiscoveryFilter::Unlocked);
        assert_eq!(visible_ids(&b), vec!["CAP-001"]);
    }

    #[test]
    fn test_unlock_is_idempotent() {
        let mut b = board();
        let id = ElementId::from("CAP-001");
        assert!(b.unlock(&id).expect("known id"));
        let snapshot = b.elements().to_vec();
        assert!(!b.unlock(&id).expect("known id"));
        assert_eq!(b.elements(), snapshot.as_slice());
    }

    #[test]
    fn test_unlock_unknown_id_reports_not_found() {
        let mut b = board();
        let err = b
            .unlock(&ElementId::from("NOPE-999"))
            .expect_err("unknown id");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(!b.elements()[0].unlocked);
    }

    #[test]
    fn test_selection_observes_unlock_without_reselection() {
        let mut b = board();
        let id = ElementId::from("CAP-001");
        b.select(&id).expect("known id");
        assert!(!b.selected().map(|e| e.unlocked).unwrap_or(true));
        b.unlock(&id).expect("known id");
        assert!(b.selected().map(|e| e.unlocked).unwrap_or(false));
    }

    #[test]
    fn test_filter_change_clears_selection() {
        let mut b = board();
        b.select(&ElementId::from("CAP-001")).expect("known id");
        assert!(b.selected().is_some());
        b.set_filter(DiscoveryFilter::Unlocked);
        assert!(b.selected().is_none());
    }

    #[test]
    fn test_select_unknown_id_reports_not_found() {
        let mut b = board();
        let err = b
            .select(&ElementId::from("NOPE-999"))
            .expect_err("unknown id");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(b.selected().is_none());
    }
}
