pub mod error;
pub mod num;

mod complex;

pub use complex::{Complex, Complex32, Complex64};
pub use error::{MathError, MathResult};
