use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub, Mul, Neg};

use super::error::{MathError, MathResult};
use super::num::{Float, FloatOps, Number};

/// A complex number. The numeric primitive consumed by escape-time
/// fractal iteration, which repeatedly multiplies, adds and takes the
/// squared modulus of values of this type.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T> {
	pub r: T,
	pub i: T,
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

impl<T> Complex<T> {
	pub const fn new(r: T, i: T) -> Self {
		Self { r, i }
	}
}

impl<T: Number> Complex<T> {
	/// The additive identity `0 + 0i`.
	pub const ZERO: Self = Self::new(T::ZERO, T::ZERO);

	/// The multiplicative identity `1 + 0i`.
	pub const ONE: Self = Self::new(T::ONE, T::ZERO);

	/// The imaginary unit `0 + 1i`.
	pub const I: Self = Self::new(T::ZERO, T::ONE);

	/// Constructs a complex number with a zero imaginary part.
	pub fn from_real(real: T) -> Self {
		Self::new(real, T::ZERO)
	}

	/// The real component.
	pub fn real(&self) -> T {
		self.r
	}

	/// The imaginary component.
	pub fn imag(&self) -> T {
		self.i
	}
}

impl<T: Float + FloatOps<T>> Complex<T> {
	/// A unit-modulus complex number `(cos angle, sin angle)`.
	/// Multiplying by it rotates another complex number by `angle`
	/// radians; periodic in `angle` with period 2π.
	pub fn from_angle(angle: T) -> Self {
		let (sin, cos) = angle.sin_cos();
		Self::new(cos, sin)
	}

	/// Returns the squared modulus `r² + i²`. Cheaper than [`Self::modulus`]
	/// where only a magnitude comparison is needed, as in escape tests.
	pub fn modulus_sq(&self) -> T {
		self.r * self.r + self.i * self.i
	}

	/// Returns the modulus (magnitude).
	pub fn modulus(&self) -> T {
		self.modulus_sq().sqrt()
	}

	/// Returns the complex conjugate `(r, -i)`.
	pub fn conj(&self) -> Self {
		Self::new(self.r, -self.i)
	}

	/// Multiplies the real component by `k`. The imaginary component is
	/// returned untouched.
	// TODO: decide whether scale should also multiply the imaginary
	// component; callers relying on the current behavior must be audited
	// before changing it.
	pub fn scale(&self, k: T) -> Self {
		Self::new(self.r * k, self.i)
	}

	/// Returns the multiplicative inverse `conj / modulus_sq`.
	///
	/// Fails with [`MathError::DivisionByZero`] when `self` is zero.
	pub fn recip(&self) -> MathResult<Self> {
		let modulus_sq = self.modulus_sq();
		if modulus_sq == T::ZERO {
			return Err(MathError::DivisionByZero);
		}
		Ok(Self::new(self.r / modulus_sq, -self.i / modulus_sq))
	}

	/// Divides by `rhs`.
	///
	/// Fails with [`MathError::DivisionByZero`] when `rhs` is zero.
	pub fn try_div(&self, rhs: &Self) -> MathResult<Self> {
		Ok(*self * rhs.recip()?)
	}

	/// Raises to a non-negative integer power by repeated multiplication.
	/// `pow(0)` is one for every value, including zero.
	pub fn pow(&self, n: u32) -> Self {
		let mut result = Self::ONE;
		for _ in 0..n {
			result = result * *self;
		}
		result
	}

	/// Returns `true` when both components are finite.
	pub fn is_finite(&self) -> bool {
		self.r.is_finite() && self.i.is_finite()
	}
}

impl<T: Add<Output = T>> Add for Complex<T> {
	type Output = Complex<T>;

	fn add(self, rhs: Self) -> Self::Output {
		Self {
			r: self.r + rhs.r,
			i: self.i + rhs.i,
		}
	}
}

impl<T: Sub<Output = T>> Sub for Complex<T> {
	type Output = Complex<T>;

	fn sub(self, rhs: Self) -> Self::Output {
		Self {
			r: self.r - rhs.r,
			i: self.i - rhs.i,
		}
	}
}

impl<T: Neg<Output = T>> Neg for Complex<T> {
	type Output = Complex<T>;

	fn neg(self) -> Self::Output {
		Self {
			r: -self.r,
			i: -self.i,
		}
	}
}

impl<T: Float> Mul<Complex<T>> for Complex<T> {
	type Output = Complex<T>;

	fn mul(self, rhs: Complex<T>) -> Self::Output {
		Self {
			r: self.r * rhs.r - self.i * rhs.i,
			i: self.r * rhs.i + self.i * rhs.r,
		}
	}
}

impl<T: Float + FloatOps<T>> Hash for Complex<T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.r.to_bits().hash(state);
		self.i.to_bits().hash(state);
	}
}

impl<T: fmt::Debug> fmt::Display for Complex<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Complex{{real={:?}, imaginary={:?}}}", self.r, self.i)
	}
}
