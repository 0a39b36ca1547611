mod product_modal;

pub use product_modal::ProductModal;
