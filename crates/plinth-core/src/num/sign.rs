// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::PrimInt;

/// A trait for primitive numeric types whose ordinary sign can be read as
/// an `i32` in {-1, 0, 1}.
///
/// Unsigned operands are never negative, so the result is 0 or 1. For
/// floats, NaN belongs to neither sign branch and yields 0.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::sign::SignVal;
/// assert_eq!((-5i32).sign_val(), -1);
/// assert_eq!(0u32.sign_val(), 0);
/// assert_eq!(5u32.sign_val(), 1);
/// assert_eq!((-5.0f64).sign_val(), -1);
/// ```
pub trait SignVal: Sized {
    /// Returns -1, 0, or 1 according to the ordinary sign of `self`.
    fn sign_val(self) -> i32;
}

/// A trait for primitive numeric types that support a by-value absolute
/// value. For unsigned integers this is the identity.
///
/// # Preconditions
///
/// For signed integers the minimum representable value has no positive
/// counterpart; calling `abs_val` on it follows the native `abs` semantics
/// (panic on overflow in debug builds) and is the caller's responsibility
/// to avoid.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::sign::AbsVal;
/// assert_eq!((-5i64).abs_val(), 5);
/// assert_eq!(5u16.abs_val(), 5);
/// assert_eq!((-5.0f32).abs_val(), 5.0);
/// ```
pub trait AbsVal: Sized {
    /// Returns the absolute value of `self`.
    fn abs_val(self) -> Self;
}

macro_rules! sign_impl_signed {
    ($t:ty) => {
        impl SignVal for $t {
            #[inline(always)]
            fn sign_val(self) -> i32 {
                if self < 0 {
                    -1
                } else if self > 0 {
                    1
                } else {
                    0
                }
            }
        }

        impl AbsVal for $t {
            #[inline(always)]
            fn abs_val(self) -> Self {
                self.abs()
            }
        }
    };
}

macro_rules! sign_impl_unsigned {
    ($t:ty) => {
        impl SignVal for $t {
            #[inline(always)]
            fn sign_val(self) -> i32 {
                if self > 0 {
                    1
                } else {
                    0
                }
            }
        }

        impl AbsVal for $t {
            #[inline(always)]
            fn abs_val(self) -> Self {
                self
            }
        }
    };
}

macro_rules! sign_impl_float {
    ($t:ty) => {
        impl SignVal for $t {
            #[inline(always)]
            fn sign_val(self) -> i32 {
                if self < 0.0 {
                    -1
                } else if self > 0.0 {
                    1
                } else {
                    0
                }
            }
        }

        impl AbsVal for $t {
            #[inline(always)]
            fn abs_val(self) -> Self {
                self.abs()
            }
        }
    };
}

sign_impl_signed!(i8);
sign_impl_signed!(i16);
sign_impl_signed!(i32);
sign_impl_signed!(i64);
sign_impl_signed!(i128);
sign_impl_signed!(isize);

sign_impl_unsigned!(u8);
sign_impl_unsigned!(u16);
sign_impl_unsigned!(u32);
sign_impl_unsigned!(u64);
sign_impl_unsigned!(u128);
sign_impl_unsigned!(usize);

sign_impl_float!(f32);
sign_impl_float!(f64);

/// Returns `true` if `value` has a non-zero remainder modulo two.
///
/// Scoped to primitive integers; types with custom remainder semantics are
/// out of scope.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::sign::is_odd;
/// assert!(is_odd(3));
/// assert!(is_odd(-3));
/// assert!(!is_odd(4));
/// ```
#[inline]
pub fn is_odd<T>(value: T) -> bool
where
    T: PrimInt,
{
    let two = T::one() + T::one();
    value % two != T::zero()
}

/// Returns `true` if `value` is divisible by two.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::sign::is_even;
/// assert!(is_even(4));
/// assert!(is_even(0));
/// assert!(!is_even(-3));
/// ```
#[inline]
pub fn is_even<T>(value: T) -> bool
where
    T: PrimInt,
{
    !is_odd(value)
}
