pub mod errors;
pub mod presenter;
