#![no_std]

// Plans own their tables and the allocating transforms return vectors.
extern crate alloc;

// The standard library is linked for tests and for the `std` feature,
// so `cargo test` runs normally on a PC.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod float;

pub use common::{Direction, FftError, FftProcess};
pub use float::{FftPlan, complex_to_real, complex_to_real_into, real_to_complex, real_to_complex_into};
