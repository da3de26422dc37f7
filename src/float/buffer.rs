//! Conversions between real and interleaved complex buffers.

use alloc::vec;
use alloc::vec::Vec;

use super::plan::FftPlan;
use crate::common::FftError;

/// Widens real samples into an interleaved complex buffer with zero
/// imaginary parts.
pub fn real_to_complex(real: &[f64]) -> Vec<f64> {
    let mut res = vec![0.0; real.len() * 2];
    fill_complex(real, &mut res);
    res
}

/// Like [`real_to_complex`], writing into `storage` (twice the length of `real`).
pub fn real_to_complex_into(real: &[f64], storage: &mut [f64]) -> Result<(), FftError> {
    if storage.len() != real.len() * 2 {
        return Err(FftError::SizeMismatch);
    }
    fill_complex(real, storage);
    Ok(())
}

fn fill_complex(real: &[f64], out: &mut [f64]) {
    for (pair, &re) in out.chunks_exact_mut(2).zip(real) {
        pair[0] = re;
        pair[1] = 0.0;
    }
}

/// Keeps the real part of every complex sample.
pub fn complex_to_real(complex: &[f64]) -> Vec<f64> {
    complex.iter().step_by(2).copied().collect()
}

/// Like [`complex_to_real`], writing into `storage` (half the length of `complex`).
pub fn complex_to_real_into(complex: &[f64], storage: &mut [f64]) -> Result<(), FftError> {
    if complex.len() % 2 != 0 || storage.len() != complex.len() / 2 {
        return Err(FftError::SizeMismatch);
    }
    for (dst, &re) in storage.iter_mut().zip(complex.iter().step_by(2)) {
        *dst = re;
    }
    Ok(())
}

impl FftPlan {
    /// Zero-filled complex buffer of `2N` floats.
    pub fn allocate_complex(&self) -> Vec<f64> {
        vec![0.0; self.complex_len()]
    }

    /// Widens exactly `N` real samples into a complex buffer for this plan.
    pub fn to_complex(&self, real: &[f64]) -> Result<Vec<f64>, FftError> {
        if real.len() != self.size() {
            return Err(FftError::SizeMismatch);
        }
        let mut res = self.allocate_complex();
        fill_complex(real, &mut res);
        Ok(res)
    }

    /// Mirrors bins `1..N/2` into `N/2+1..N` as complex conjugates, in place.
    ///
    /// DC and Nyquist are left untouched. Recovers the full spectrum of a
    /// real signal from the half returned by [`FftPlan::forward_real`].
    pub fn complete_spectrum(&self, spectrum: &mut [f64]) -> Result<(), FftError> {
        let size = self.complex_len();
        if spectrum.len() != size {
            return Err(FftError::SizeMismatch);
        }
        let half = size >> 1;
        for i in (2..half).step_by(2) {
            spectrum[size - i] = spectrum[i];
            spectrum[size - i + 1] = -spectrum[i + 1];
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
