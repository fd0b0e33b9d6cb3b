pub mod health_checks;
pub mod shop;

pub use health_checks::*;
