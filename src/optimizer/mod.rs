pub mod constraints;
pub mod dp;
pub mod error;
pub mod greedy;
pub mod types;

pub use constraints::*;
pub use dp::*;
pub use error::*;
pub use greedy::*;
pub use types::*;
