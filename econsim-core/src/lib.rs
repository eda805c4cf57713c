pub mod calculations;
pub mod format;
pub mod models;

pub use models::*;
