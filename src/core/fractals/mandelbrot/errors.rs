use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for MandelbrotError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    EmptyRamp,
    RampTooLong { len: usize, max: usize },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRamp => write!(f, "palette ramp must contain at least one colour"),
            Self::RampTooLong { len, max } => {
                write!(f, "palette ramp has {} colours, at most {} are allowed", len, max)
            }
        }
    }
}

impl Error for PaletteError {}
