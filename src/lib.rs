mod factory;
mod menu;
mod piece;
mod queue;
mod render;

pub mod config;
pub mod error;

pub use factory::*;
pub use menu::*;
pub use piece::*;
pub use queue::*;
