pub mod catalog;
pub mod exercise;
pub mod selection;

pub use catalog::*;
pub use exercise::*;
pub use selection::*;
