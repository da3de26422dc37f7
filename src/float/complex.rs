use alloc::vec::Vec;

use super::core::{CallContext, combine_passes, initial_pass, load};
use super::plan::FftPlan;
use crate::common::{Direction, FftError, FftProcess};

impl FftPlan {
    /// Forward complex transform into a freshly allocated buffer.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<f64>, FftError> {
        let mut out = self.allocate_complex();
        self.forward_into(input, &mut out)?;
        Ok(out)
    }

    /// Inverse complex transform into a freshly allocated buffer,
    /// scaled by `1/N`.
    pub fn inverse(&self, input: &[f64]) -> Result<Vec<f64>, FftError> {
        let mut out = self.allocate_complex();
        self.inverse_into(input, &mut out)?;
        Ok(out)
    }

    /// Forward complex transform of `input` (2N floats) into `output` (2N floats).
    pub fn forward_into(&self, input: &[f64], output: &mut [f64]) -> Result<(), FftError> {
        let ctx = CallContext::new(input, output, Direction::Forward, self.complex_len(), self.complex_len())?;
        self.transform4(ctx);
        Ok(())
    }

    /// Inverse complex transform of `input` into `output`, scaled by `1/N`.
    pub fn inverse_into(&self, input: &[f64], output: &mut [f64]) -> Result<(), FftError> {
        let ctx = CallContext::new(input, output, Direction::Inverse, self.complex_len(), self.complex_len())?;
        self.transform4(ctx);

        // Scaling happens once, after the butterflies.
        let n = self.size() as f64;
        for v in output.iter_mut() {
            *v /= n;
        }
        Ok(())
    }

    /// Radix-4 engine for complex input.
    fn transform4(&self, ctx: CallContext<'_>) {
        let CallContext { input, output, inv } = ctx;
        let width = self.width();
        let step = 1 << width;

        #[cfg(feature = "verbose-logging")]
        log::trace!("complex transform: size={} inv={inv}", self.size());

        initial_pass(output, self.bitrev(), width, inv, |off, m| load(input, off + m * step));
        combine_passes(output, self.table(), width, inv);
    }
}

impl FftProcess<f64> for FftPlan {
    fn process(&self, input: &[f64], output: &mut [f64], direction: Direction) -> Result<(), FftError> {
        match direction {
            Direction::Forward => self.forward_into(input, output),
            Direction::Inverse => self.inverse_into(input, output),
        }
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
