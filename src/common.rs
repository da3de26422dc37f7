// src/common.rs

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FftError {
    InvalidSize,
    Aliasing,
    SizeMismatch,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::InvalidSize => write!(f, "FFT size must be a power of two and bigger than 1"),
            FftError::Aliasing => write!(f, "Input and output buffers must be different"),
            FftError::SizeMismatch => write!(f, "Data buffer size does not match FFT size"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Direction of a complex transform.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Direction {
    #[default]
    Forward,
    Inverse,
}

impl Direction {
    /// Sign applied to the quarter-turn rotation and to the imaginary part
    /// of every twiddle factor: `+1` forward, `-1` inverse.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Inverse => -1.0,
        }
    }
}

pub trait FftProcess<T> {
    fn process(&self, input: &[T], output: &mut [T], direction: Direction) -> Result<(), FftError>;
}
