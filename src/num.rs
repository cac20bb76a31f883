use core::cmp::{PartialEq, PartialOrd};
use core::hash::Hash;
use core::ops::{Mul, Add, Sub, Div, Neg};
use core::ops::{MulAssign, AddAssign, SubAssign, DivAssign};

/// Forward a method to an inherent method or a base trait method.
macro_rules! forward {
	($( Self :: $method:ident ( self $( , $arg:ident : $ty:ty )* ) -> $ret:ty ; )*) => {$(
		#[inline]
		fn $method(self $( , $arg : $ty )* ) -> $ret {
			Self::$method(self $( , $arg )* )
		}
	)*};
}

pub trait NumOps<Rhs = Self, Output = Self>:
	Add<Rhs, Output = Output> +
	Sub<Rhs, Output = Output> +
	Mul<Rhs, Output = Output> +
	Div<Rhs, Output = Output>
{}

impl<T, Rhs, Output> NumOps<Rhs, Output> for T where T:
	Add<Rhs, Output = Output> +
	Sub<Rhs, Output = Output> +
	Mul<Rhs, Output = Output> +
	Div<Rhs, Output = Output>
{}

pub trait NumAssignOps<Rhs = Self>:
	AddAssign<Rhs> +
	SubAssign<Rhs> +
	MulAssign<Rhs> +
	DivAssign<Rhs>
{}

impl<T, Rhs> NumAssignOps<Rhs> for T where T:
	AddAssign<Rhs> +
	SubAssign<Rhs> +
	MulAssign<Rhs> +
	DivAssign<Rhs>
{}

pub trait Base<T: Number>: Copy + NumOps<T, T> + NumAssignOps<T> where Self: Sized {
	const ZERO: Self;
	const ONE: Self;
}

pub trait Number: Base<Self> + Default + PartialEq + PartialOrd {}

pub trait SignedNumber: Number + Neg<Output = Self> {}

pub trait Float: SignedNumber {
	/// Unsigned integer carrying this type's bit pattern, used for hashing.
	type Bits: Hash;
}

pub trait FloatOps<T: Float> where Self: Sized {
	fn abs(self) -> Self;
	fn approx(self, b: Self, eps: T) -> bool;
	fn is_finite(self) -> bool;
	fn sin_cos(self) -> (Self, Self);
	fn sqrt(self) -> Self;
	fn to_bits(self) -> T::Bits;
}

macro_rules! float_impl {
	($t:ident, $bits:ident) => {
		impl Base<$t> for $t {
			const ZERO: Self = 0.0;
			const ONE: Self = 1.0;
		}

		impl Number for $t {}

		impl SignedNumber for $t {}

		impl Float for $t {
			type Bits = $bits;
		}

		impl FloatOps<$t> for $t {
			fn approx(self, b: Self, eps: Self) -> bool {
				Self::abs(self - b) < eps
			}

			forward! {
				Self::abs(self) -> Self;
				Self::is_finite(self) -> bool;
				Self::sin_cos(self) -> (Self, Self);
				Self::sqrt(self) -> Self;
				Self::to_bits(self) -> $bits;
			}
		}
	}
}

float_impl!(f32, u32);
float_impl!(f64, u64);
