pub mod sports_api;

pub use sports_api::*;
