use alloc::vec;
use alloc::vec::Vec;

use super::core::{initial_width, precompute_bitrev, precompute_twiddles};
use crate::common::FftError;

/// Precomputed state for transforms of one fixed, power-of-two size.
///
/// The twiddle and bit-reversal tables are built once in [`FftPlan::new`]
/// and only read afterwards, so a plan can be shared between threads and
/// reused for any number of forward, inverse and real transforms.
#[derive(Debug, Clone)]
pub struct FftPlan {
    n: usize,
    csize: usize,
    table: Vec<f64>,
    width: usize,
    bitrev: Vec<usize>,
}

impl FftPlan {
    /// Builds the tables for transforms of `size` complex samples.
    ///
    /// Fails with [`FftError::InvalidSize`] unless `size` is a power of two
    /// bigger than 1.
    pub fn new(size: usize) -> Result<Self, FftError> {
        if size <= 1 || !size.is_power_of_two() {
            #[cfg(feature = "verbose-logging")]
            log::debug!("refusing FFT plan of size {size}");
            return Err(FftError::InvalidSize);
        }

        let csize = size << 1;
        let width = initial_width(size);

        let mut table = vec![0.0; csize];
        precompute_twiddles(&mut table, size);

        let mut bitrev = vec![0; 1 << width];
        precompute_bitrev(&mut bitrev, width);

        #[cfg(feature = "verbose-logging")]
        log::debug!("built FFT plan: size={size} width={width} bitrev_len={}", bitrev.len());

        Ok(Self { n: size, csize, table, width, bitrev })
    }

    /// Number of samples per transform (N).
    pub fn size(&self) -> usize {
        self.n
    }

    /// Length in floats of an interleaved complex buffer (2N).
    pub fn complex_len(&self) -> usize {
        self.csize
    }

    /// Bit width of the first permuted pass.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Flat twiddle table, `2N` floats of interleaved `(cos, -sin)` pairs.
    pub fn table(&self) -> &[f64] {
        &self.table
    }

    /// Radix-4 digit-reversal table, `2^width` entries.
    pub fn bitrev(&self) -> &[usize] {
        &self.bitrev
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
