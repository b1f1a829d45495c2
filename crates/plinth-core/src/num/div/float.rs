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

use num_traits::Float;

/// Quotient rounded toward zero, floating-point form.
///
/// Floating division does not truncate on its own, so the intermediate
/// quotient is truncated explicitly. The matching modulus is
/// [`mod_truncated`].
///
/// # Panics
///
/// Panics if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::div::float::div_truncated;
/// assert_eq!(div_truncated(13.0, 4.0), 3.0);
/// assert_eq!(div_truncated(-13.0, 4.0), -3.0);
/// ```
#[inline]
pub fn div_truncated<F>(dividend: F, divisor: F) -> F
where
    F: Float,
{
    assert!(
        divisor != F::zero(),
        "called `div_truncated` with a zero divisor"
    );
    (dividend / divisor).trunc()
}

/// Modulus taking the sign of the dividend, floating-point form.
///
/// # Panics
///
/// Panics if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::div::float::mod_truncated;
/// assert_eq!(mod_truncated(-13.0, 4.0), -1.0);
/// assert_eq!(mod_truncated(13.0, -4.0), 1.0);
/// ```
#[inline]
pub fn mod_truncated<F>(dividend: F, divisor: F) -> F
where
    F: Float,
{
    assert!(
        divisor != F::zero(),
        "called `mod_truncated` with a zero divisor"
    );
    dividend - divisor * (dividend / divisor).trunc()
}

/// Quotient rounded toward negative infinity, floating-point form.
///
/// The matching modulus is [`mod_floored`].
///
/// # Panics
///
/// Panics if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::div::float::div_floored;
/// assert_eq!(div_floored(-13.0, 4.0), -4.0);
/// assert_eq!(div_floored(13.0, -4.0), -4.0);
/// ```
#[inline]
pub fn div_floored<F>(dividend: F, divisor: F) -> F
where
    F: Float,
{
    assert!(
        divisor != F::zero(),
        "called `div_floored` with a zero divisor"
    );
    (dividend / divisor).floor()
}

/// Modulus taking the sign of the divisor, floating-point form.
///
/// # Panics
///
/// Panics if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::div::float::mod_floored;
/// assert_eq!(mod_floored(-13.0, 4.0), 3.0);
/// assert_eq!(mod_floored(13.0, -4.0), -3.0);
/// ```
#[inline]
pub fn mod_floored<F>(dividend: F, divisor: F) -> F
where
    F: Float,
{
    assert!(
        divisor != F::zero(),
        "called `mod_floored` with a zero divisor"
    );
    dividend - divisor * (dividend / divisor).floor()
}

/// Quotient under the Euclidean convention, floating-point form.
///
/// The quotient is floored for positive divisors and ceiled for negative
/// ones so that the matching [`mod_euclidean`] stays non-negative.
///
/// # Panics
///
/// Panics if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::div::float::div_euclidean;
/// assert_eq!(div_euclidean(-13.0, 4.0), -4.0);
/// assert_eq!(div_euclidean(13.0, -4.0), -3.0);
/// assert_eq!(div_euclidean(-13.0, -4.0), 4.0);
/// ```
#[inline]
pub fn div_euclidean<F>(dividend: F, divisor: F) -> F
where
    F: Float,
{
    assert!(
        divisor != F::zero(),
        "called `div_euclidean` with a zero divisor"
    );
    let quotient = dividend / divisor;
    if divisor > F::zero() {
        quotient.floor()
    } else {
        quotient.ceil()
    }
}

/// Modulus that is non-negative for every sign combination of the
/// operands, floating-point form.
///
/// # Panics
///
/// Panics if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::div::float::mod_euclidean;
/// assert_eq!(mod_euclidean(-13.0, 4.0), 3.0);
/// assert_eq!(mod_euclidean(13.0, -4.0), 1.0);
/// ```
#[inline]
pub fn mod_euclidean<F>(dividend: F, divisor: F) -> F
where
    F: Float,
{
    assert!(
        divisor != F::zero(),
        "called `mod_euclidean` with a zero divisor"
    );
    dividend - divisor * div_euclidean(dividend, divisor)
}
