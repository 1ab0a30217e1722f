pub mod types;
pub mod catalog;
pub mod lifecycle;

pub use types::*;
pub use catalog::*;
