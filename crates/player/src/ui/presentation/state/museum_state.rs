//! Museum state - avatar creation step machine.

use dioxus::prelude::*;

/// Where the visitor is in the avatar creation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarStep {
    /// Explanatory screen before the camera opens.
    Intro,
    /// Camera preview up, waiting for the photo.
    Capture,
    /// Upload/generate/poll in flight.
    Processing,
    /// Avatar ready, waiting for a character name.
    Naming,
    Done,
}

/// The visitor's museum character once the flow completes.
#[derive(Debug, Clone, PartialEq)]
pub struct MuseumCharacter {
    pub name: String,
    pub avatar_url: String,
}

#[derive(Clone, Copy)]
pub struct MuseumState {
    pub step: Signal<AvatarStep>,
    /// Progress line shown during `Processing`.
    pub status: Signal<String>,
    /// Generated avatar URL held between `Processing` and `Naming`.
    pub pending_avatar: Signal<Option<String>>,
    pub character: Signal<Option<MuseumCharacter>>,
    pub error: Signal<Option<String>>,
}

impl MuseumState {
    pub fn new() -> Self {
        Self {
            step: Signal::new(AvatarStep::Intro),
            status: Signal::new(String::new()),
            pending_avatar: Signal::new(None),
            character: Signal::new(None),
            error: Signal::new(None),
        }
    }

    pub fn start_capture(&mut self) {
        self.error.set(None);
        self.step.set(AvatarStep::Capture);
    }

    pub fn begin_processing(&mut self, status: &str) {
        self.status.set(status.to_string());
        self.step.set(AvatarStep::Processing);
    }

    pub fn set_status(&mut self, status: &str) {
        self.status.set(status.to_string());
    }

    pub fn avatar_ready(&mut self, avatar_url: String) {
        self.pending_avatar.set(Some(avatar_url));
        self.step.set(AvatarStep::Naming);
    }

    pub fn complete(&mut self, name: &str) {
        let avatar_url = match self.pending_avatar.read().clone() {
            Some(url) => url,
            None => return,
        };
        self.character.set(Some(MuseumCharacter {
            name: name.trim().to_string(),
            avatar_url,
        }));
        self.pending_avatar.set(None);
        self.step.set(AvatarStep::Done);
    }

    /// A failed upload/generation returns to the capture screen with an
    /// error banner; the visitor can try another photo.
    pub fn fail(&mut self, message: &str) {
        self.error.set(Some(message.to_string()));
        self.step.set(AvatarStep::Capture);
    }

    pub fn reset(&mut self) {
        self.step.set(AvatarStep::Intro);
        self.status.set(String::new());
        self.pending_avatar.set(None);
        self.error.set(None);
    }
}

impl Default for MuseumState {
    fn default() -> Self {
        Self::new()
    }
}
