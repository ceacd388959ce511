//! Conversions between the renderer's surface and what display backends expect.

pub mod pixel_format;
