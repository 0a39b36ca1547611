mod character_creation_modal;

pub use character_creation_modal::CharacterCreationModal;
