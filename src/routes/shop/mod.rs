mod reviews;
mod slideshow;

pub use reviews::*;
pub use slideshow::*;
