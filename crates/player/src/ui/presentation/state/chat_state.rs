//! Chat state - assistant conversation.

use chrono::Utc;
use dioxus::prelude::*;
use sbiba_domain::{ChatMessage, MessageMetadata};

/// Parchment banner shown before any exchange.
const WELCOME: &str = "Bienvenue, explorateur ! Je suis votre guide archéologique de Sbiba. \
Posez-moi vos questions sur les sites, les monuments et l'histoire de la région.";

#[derive(Clone, Copy)]
pub struct ChatState {
    pub messages: Signal<Vec<ChatMessage>>,
    /// Knowledge-source id fetched on mount; questions are blocked
    /// until it arrives.
    pub source_id: Signal<Option<String>>,
    /// Assistant "is writing" indicator.
    pub is_writing: Signal<bool>,
    pub error: Signal<Option<String>>,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            messages: Signal::new(vec![ChatMessage::scroll(WELCOME, Utc::now())]),
            source_id: Signal::new(None),
            is_writing: Signal::new(false),
            error: Signal::new(None),
        }
    }

    pub fn push_user(&mut self, content: &str) {
        self.messages
            .write()
            .push(ChatMessage::user(content, Utc::now()));
    }

    pub fn push_assistant(&mut self, content: &str) {
        self.messages
            .write()
            .push(ChatMessage::assistant(content, Utc::now()));
    }

    /// Field-journal note pinned to a dig location.
    pub fn push_note(&mut self, content: &str, location: &str) {
        let metadata = MessageMetadata {
            location: Some(location.to_string()),
            ..MessageMetadata::default()
        };
        self.messages
            .write()
            .push(ChatMessage::note(content, metadata, Utc::now()));
    }

    pub fn set_source_id(&mut self, source_id: String) {
        self.source_id.set(Some(source_id));
    }

    pub fn ready(&self) -> bool {
        self.source_id.read().is_some()
    }

    pub fn set_error(&mut self, message: &str) {
        self.error.set(Some(message.to_string()));
    }

    pub fn clear_error(&mut self) {
        self.error.set(None);
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}
