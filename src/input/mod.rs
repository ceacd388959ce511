//! Input adapters that drive a zoom session from outside the library.

#[cfg(feature = "gui")]
pub mod gui;
