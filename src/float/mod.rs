pub mod buffer;
pub mod complex;
pub mod plan;
pub mod real;
mod core;

pub use crate::common::{Direction, FftError, FftProcess};
pub use buffer::{complex_to_real, complex_to_real_into, real_to_complex, real_to_complex_into};
pub use plan::FftPlan;
