//! Hunt state - discovery board plus the camera capture session.

use dioxus::prelude::*;
use sbiba_domain::{
    catalog, CaptureSession, CaptureState, DiscoveryFilter, ElementId, HistoricalElement,
    HuntBoard, ScanOutcome, ScanToken,
};

#[derive(Clone, Copy)]
pub struct HuntState {
    board: Signal<HuntBoard>,
    session: Signal<CaptureSession>,
}

impl HuntState {
    pub fn new() -> Self {
        Self {
            board: Signal::new(HuntBoard::new(catalog::heritage_elements())),
            session: Signal::new(CaptureSession::new()),
        }
    }

    // -------------------------------------------------------------------------
    // Discovery board
    // -------------------------------------------------------------------------

    pub fn filter(&self) -> DiscoveryFilter {
        self.board.read().filter()
    }

    /// Switching the filter also clears the selection (the board does
    /// this), so the details panel empties.
    pub fn set_filter(&mut self, filter: DiscoveryFilter) {
        self.board.write().set_filter(filter);
    }

    pub fn visible(&self) -> Vec<HistoricalElement> {
        self.board.read().visible().into_iter().cloned().collect()
    }

    pub fn select(&mut self, id: &ElementId) {
        if let Err(error) = self.board.write().select(id) {
            tracing::warn!("selection refused: {error}");
        }
    }

    pub fn clear_selection(&mut self) {
        self.board.write().clear_selection();
    }

    /// Selection is resolved against the live board, so an unlock is
    /// reflected in the details panel immediately.
    pub fn selected(&self) -> Option<HistoricalElement> {
        self.board.read().selected().cloned()
    }

    pub fn element(&self, id: &ElementId) -> Option<HistoricalElement> {
        self.board
            .read()
            .elements()
            .iter()
            .find(|e| &e.id == id)
            .cloned()
    }

    /// Unlock an element. Returns the reward points exactly once; a
    /// repeated unlock yields nothing.
    pub fn unlock(&mut self, id: &ElementId) -> Option<u32> {
        let points = self.element(id).map(|e| e.rewards.points)?;
        match self.board.write().unlock(id) {
            Ok(true) => Some(points),
            Ok(false) => None,
            Err(error) => {
                tracing::warn!("unlock refused: {error}");
                None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Capture session
    // -------------------------------------------------------------------------

    pub fn session_state(&self) -> CaptureState {
        self.session.read().state().clone()
    }

    pub fn session_open(&self) -> bool {
        self.session.read().is_open()
    }

    pub fn open_session(&mut self, target: ElementId) {
        self.session.write().open(target);
    }

    pub fn begin_scan(&mut self) -> Option<ScanToken> {
        self.session.write().begin_scan()
    }

    pub fn resolve_scan(&mut self, token: ScanToken, outcome: ScanOutcome) -> Option<ScanToken> {
        self.session.write().resolve(token, outcome)
    }

    pub fn finish_scan(&mut self, token: ScanToken) -> Option<ElementId> {
        self.session.write().finish(token)
    }

    pub fn close_session(&mut self) {
        self.session.write().close();
    }
}

impl Default for HuntState {
    fn default() -> Self {
        Self::new()
    }
}
