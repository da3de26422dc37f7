// src/float/core.rs

use core::f64::consts::PI;
use core::ops::Range;
use num_complex::Complex64;

use crate::common::{Direction, FftError};

// --- Table construction ---

/// Fills the flat twiddle table: `table[i] = cos(pi*i/N)`,
/// `table[i + 1] = -sin(pi*i/N)` for every even `i`.
///
/// A pair at even index `i` is the rotation `e^(-j*2*pi*(i/2)/N)`, so the
/// table holds one full turn of `N` complex factors in `2N` floats.
pub(crate) fn precompute_twiddles(table: &mut [f64], n: usize) {
    for i in (0..table.len()).step_by(2) {
        let angle = PI * (i as f64) / (n as f64);
        let (sin, cos) = sin_cos(angle);
        table[i] = cos;
        table[i + 1] = -sin;
    }
}

/// Width of the first permuted pass.
///
/// Picked so the first butterfly group is 8 floats (radix-4) when `n` is a
/// power of four and 4 floats (radix-2) otherwise. The result is always odd.
pub(crate) fn initial_width(n: usize) -> usize {
    let power = n.trailing_zeros() as usize;
    if power % 2 == 0 { power - 1 } else { power }
}

/// Fills the radix-4 digit-reversal table for `width`-bit indices.
///
/// Bits are reversed in 2-bit groups; when `width` is odd the trailing
/// group has a single bit, which lands on bit 0.
pub(crate) fn precompute_bitrev(bitrev: &mut [usize], width: usize) {
    for (j, slot) in bitrev.iter_mut().enumerate() {
        let mut rev = 0;
        let mut shift = 0;
        while shift < width {
            if shift + 1 == width {
                rev |= (j >> shift) & 1;
            } else {
                let rev_shift = width - shift - 2;
                rev |= ((j >> shift) & 3) << rev_shift;
            }
            shift += 2;
        }
        *slot = rev;
    }
}

/// Agnostic sin/cos helper
fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return angle.sin_cos();

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

// --- Call context ---

/// Everything one transform invocation needs besides the plan.
///
/// Lives on the caller's stack for the duration of a single call, so a plan
/// never carries per-call state and can serve several threads at once.
pub(crate) struct CallContext<'a> {
    pub(crate) input: &'a [f64],
    pub(crate) output: &'a mut [f64],
    pub(crate) inv: f64,
}

impl<'a> CallContext<'a> {
    /// Validates the buffers before anything is written.
    pub(crate) fn new(
        input: &'a [f64],
        output: &'a mut [f64],
        direction: Direction,
        input_len: usize,
        output_len: usize,
    ) -> Result<Self, FftError> {
        if ranges_overlap(input.as_ptr_range(), output.as_ptr_range()) {
            #[cfg(feature = "verbose-logging")]
            log::trace!("rejecting transform: input and output share storage");
            return Err(FftError::Aliasing);
        }
        if input.len() != input_len || output.len() != output_len {
            #[cfg(feature = "verbose-logging")]
            log::trace!(
                "rejecting transform: got {}/{} floats, expected {}/{}",
                input.len(),
                output.len(),
                input_len,
                output_len
            );
            return Err(FftError::SizeMismatch);
        }
        Ok(Self { input, output, inv: direction.sign() })
    }
}

/// True when two address ranges share at least one element.
pub(crate) fn ranges_overlap(a: Range<*const f64>, b: Range<*const f64>) -> bool {
    if a.start == b.start {
        return true;
    }
    a.start < b.end && b.start < a.end
}

// --- Kernels ---

#[inline(always)]
pub(crate) fn load(buffer: &[f64], index: usize) -> Complex64 {
    Complex64::new(buffer[index], buffer[index + 1])
}

#[inline(always)]
pub(crate) fn store(buffer: &mut [f64], index: usize, value: Complex64) {
    buffer[index] = value.re;
    buffer[index + 1] = value.im;
}

/// Twiddle factor at flat table index `k`, conjugated when `inv` is `-1`.
#[inline(always)]
fn twiddle(table: &[f64], k: usize, inv: f64) -> Complex64 {
    Complex64::new(table[k], inv * table[k + 1])
}

/// Two-point butterfly: `(even + odd, even - odd)`.
#[inline(always)]
pub(crate) fn butterfly_2(even: Complex64, odd: Complex64) -> [Complex64; 2] {
    [even + odd, even - odd]
}

/// Four-point butterfly shared by the first pass and the combining passes.
///
/// `inv` flips the quarter-turn rotation applied to `b - d`.
#[inline(always)]
pub(crate) fn butterfly_4(
    a: Complex64,
    b: Complex64,
    c: Complex64,
    d: Complex64,
    inv: f64,
) -> [Complex64; 4] {
    let t0 = a + c;
    let t1 = a - c;
    let t2 = b + d;
    let t3 = (b - d).scale(inv);

    // -j * t3
    let rot = Complex64::new(t3.im, -t3.re);

    [t0 + t2, t1 + rot, t0 - t2, t1 - rot]
}

// --- Passes ---

/// First pass: reads the input in digit-reversed order and writes the
/// smallest sub-transforms to sequential positions of `out`.
///
/// `sample(off, m)` returns the `m`-th point (0..4) of the group whose
/// digit-reversed offset is `off`. This is the only place where real and
/// complex inputs differ.
pub(crate) fn initial_pass<F>(out: &mut [f64], bitrev: &[usize], width: usize, inv: f64, sample: F)
where
    F: Fn(usize, usize) -> Complex64,
{
    let size = out.len();
    let step = 1 << width;
    let len = (size / step) << 1;

    for (t, out_off) in (0..size).step_by(len).enumerate() {
        let off = bitrev[t];
        if len == 4 {
            let [left, right] = butterfly_2(sample(off, 0), sample(off, 1));
            store(out, out_off, left);
            store(out, out_off + 2, right);
        } else {
            let fs = butterfly_4(sample(off, 0), sample(off, 1), sample(off, 2), sample(off, 3), inv);
            for (m, f) in fs.into_iter().enumerate() {
                store(out, out_off + 2 * m, f);
            }
        }
    }
}

/// Iterative radix-4 combining passes, in place on `out`.
///
/// `step` starts at `2^width / 4` and shrinks by 4 down to 2. The largest
/// table index read is `3k + 1` with `k <= N/2 - step`, which stays below
/// `2N` for every supported size.
pub(crate) fn combine_passes(out: &mut [f64], table: &[f64], width: usize, inv: f64) {
    let size = out.len();
    let mut step = (1usize << width) >> 2;

    while step >= 2 {
        let len = (size / step) << 1;
        let quarter_len = len >> 2;

        for out_off in (0..size).step_by(len) {
            let limit = out_off + quarter_len;
            for (a, k) in (out_off..limit).step_by(2).zip((0..).step_by(step)) {
                let b = a + quarter_len;
                let c = b + quarter_len;
                let d = c + quarter_len;

                let ma = load(out, a);
                let mb = load(out, b) * twiddle(table, k, inv);
                let mc = load(out, c) * twiddle(table, 2 * k, inv);
                let md = load(out, d) * twiddle(table, 3 * k, inv);

                let [fa, fb, fc, fd] = butterfly_4(ma, mb, mc, md, inv);
                store(out, a, fa);
                store(out, b, fb);
                store(out, c, fc);
                store(out, d, fd);
            }
        }
        step >>= 2;
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
