mod campaign;
mod review;
mod shop;
mod user;

pub use campaign::*;
pub use review::*;
pub use shop::*;
pub use user::*;
