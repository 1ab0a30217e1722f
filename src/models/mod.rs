pub mod presentation;
pub mod status;
