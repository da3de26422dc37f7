use alloc::vec::Vec;
use num_complex::Complex64;

use super::core::{CallContext, combine_passes, initial_pass};
use super::plan::FftPlan;
use crate::common::{Direction, FftError};

impl FftPlan {
    /// Forward transform of `N` real samples into a freshly allocated
    /// complex buffer.
    ///
    /// Only bins `0..=N/2` are guaranteed; call
    /// [`FftPlan::complete_spectrum`] to mirror them into the upper half.
    pub fn forward_real(&self, input: &[f64]) -> Result<Vec<f64>, FftError> {
        let mut out = self.allocate_complex();
        self.forward_real_into(input, &mut out)?;
        Ok(out)
    }

    /// Forward transform of `input` (N floats) into `output` (2N floats).
    pub fn forward_real_into(&self, input: &[f64], output: &mut [f64]) -> Result<(), FftError> {
        let ctx = CallContext::new(input, output, Direction::Forward, self.size(), self.complex_len())?;
        self.real_transform4(ctx);
        Ok(())
    }

    /// Radix-4 engine for real input.
    ///
    /// Real samples pack twice as densely as complex ones, so the
    /// digit-reversed offsets and the stride are halved. After the first
    /// pass the data is complex and the combining passes are shared.
    fn real_transform4(&self, ctx: CallContext<'_>) {
        let CallContext { input, output, inv } = ctx;
        let width = self.width();
        let step = (1usize << width) >> 1;

        #[cfg(feature = "verbose-logging")]
        log::trace!("real transform: size={}", self.size());

        initial_pass(output, self.bitrev(), width, inv, |off, m| {
            Complex64::new(input[(off >> 1) + m * step], 0.0)
        });
        combine_passes(output, self.table(), width, inv);
    }
}

#[cfg(test)]
#[path = "real_tests.rs"]
mod tests;
