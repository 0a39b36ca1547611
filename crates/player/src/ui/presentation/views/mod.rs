//! One view per route.

mod chat;
mod colorization;
mod heritage_hunt;
mod home;
mod market_store;
mod movie_generation;
mod reconstruction;
mod virtual_museum;

pub use chat::Chat;
pub use colorization::Colorization;
pub use heritage_hunt::HeritageHunt;
pub use home::Home;
pub use market_store::MarketStore;
pub use movie_generation::MovieGeneration;
pub use reconstruction::Reconstruction;
pub use virtual_museum::VirtualMuseum;
