pub mod axis;
pub mod direction;

pub use axis::*;
pub use direction::*;
