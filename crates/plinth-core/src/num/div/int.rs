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

use num_traits::{CheckedDiv, CheckedRem, PrimInt};

/// Quotient rounded toward zero.
///
/// The matching modulus is [`mod_truncated`]; together they satisfy
/// `dividend == divisor * q + r` exactly.
///
/// # Panics
///
/// Panics if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::div::int::div_truncated;
/// assert_eq!(div_truncated(13, 4), 3);
/// assert_eq!(div_truncated(-13, 4), -3);
/// assert_eq!(div_truncated(13, -4), -3);
/// assert_eq!(div_truncated(-13, -4), 3);
/// ```
#[inline]
pub fn div_truncated<T>(dividend: T, divisor: T) -> T
where
    T: PrimInt,
{
    assert!(
        divisor != T::zero(),
        "called `div_truncated` with a zero divisor"
    );
    dividend / divisor
}

/// Modulus taking the sign of the dividend.
///
/// # Panics
///
/// Panics if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::div::int::mod_truncated;
/// assert_eq!(mod_truncated(13, 4), 1);
/// assert_eq!(mod_truncated(-13, 4), -1);
/// assert_eq!(mod_truncated(13, -4), 1);
/// assert_eq!(mod_truncated(-13, -4), -1);
/// ```
#[inline]
pub fn mod_truncated<T>(dividend: T, divisor: T) -> T
where
    T: PrimInt,
{
    assert!(
        divisor != T::zero(),
        "called `mod_truncated` with a zero divisor"
    );
    dividend % divisor
}

/// Quotient rounded toward negative infinity.
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
/// # use plinth_core::num::div::int::div_floored;
/// assert_eq!(div_floored(13, 4), 3);
/// assert_eq!(div_floored(-13, 4), -4);
/// assert_eq!(div_floored(13, -4), -4);
/// assert_eq!(div_floored(-13, -4), 3);
/// ```
#[inline]
pub fn div_floored<T>(dividend: T, divisor: T) -> T
where
    T: PrimInt,
{
    assert!(
        divisor != T::zero(),
        "called `div_floored` with a zero divisor"
    );
    let quotient = dividend / divisor;
    let remainder = dividend % divisor;
    if remainder != T::zero() && (remainder < T::zero()) != (divisor < T::zero()) {
        quotient - T::one()
    } else {
        quotient
    }
}

/// Modulus taking the sign of the divisor.
///
/// # Panics
///
/// Panics if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::div::int::mod_floored;
/// assert_eq!(mod_floored(13, 4), 1);
/// assert_eq!(mod_floored(-13, 4), 3);
/// assert_eq!(mod_floored(13, -4), -3);
/// assert_eq!(mod_floored(-13, -4), -1);
/// ```
#[inline]
pub fn mod_floored<T>(dividend: T, divisor: T) -> T
where
    T: PrimInt,
{
    assert!(
        divisor != T::zero(),
        "called `mod_floored` with a zero divisor"
    );
    let remainder = dividend % divisor;
    if remainder != T::zero() && (remainder < T::zero()) != (divisor < T::zero()) {
        remainder + divisor
    } else {
        remainder
    }
}

/// Quotient under the Euclidean convention, whose modulus is always
/// non-negative.
///
/// The matching modulus is [`mod_euclidean`].
///
/// # Panics
///
/// Panics if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::div::int::div_euclidean;
/// assert_eq!(div_euclidean(13, 4), 3);
/// assert_eq!(div_euclidean(-13, 4), -4);
/// assert_eq!(div_euclidean(13, -4), -3);
/// assert_eq!(div_euclidean(-13, -4), 4);
/// ```
#[inline]
pub fn div_euclidean<T>(dividend: T, divisor: T) -> T
where
    T: PrimInt,
{
    assert!(
        divisor != T::zero(),
        "called `div_euclidean` with a zero divisor"
    );
    let quotient = dividend / divisor;
    let remainder = dividend % divisor;
    if remainder < T::zero() {
        if divisor > T::zero() {
            quotient - T::one()
        } else {
            quotient + T::one()
        }
    } else {
        quotient
    }
}

/// Modulus that is non-negative for every sign combination of the
/// operands.
///
/// # Panics
///
/// Panics if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::div::int::mod_euclidean;
/// assert_eq!(mod_euclidean(13, 4), 1);
/// assert_eq!(mod_euclidean(-13, 4), 3);
/// assert_eq!(mod_euclidean(13, -4), 1);
/// assert_eq!(mod_euclidean(-13, -4), 3);
/// ```
#[inline]
pub fn mod_euclidean<T>(dividend: T, divisor: T) -> T
where
    T: PrimInt,
{
    assert!(
        divisor != T::zero(),
        "called `mod_euclidean` with a zero divisor"
    );
    let remainder = dividend % divisor;
    if remainder < T::zero() {
        if divisor > T::zero() {
            remainder + divisor
        } else {
            remainder - divisor
        }
    } else {
        remainder
    }
}

macro_rules! checked_div_fn {
    (
        $(#[$meta:meta])*
        $name:ident, $inner:ident, adjust_div
    ) => {
        $(#[$meta])*
        #[inline]
        pub fn $name<T>(dividend: T, divisor: T) -> Option<T>
        where
            T: PrimInt + CheckedDiv + CheckedRem,
        {
            // checked_div covers both the zero divisor and MIN / -1.
            dividend.checked_div(&divisor)?;
            Some($inner(dividend, divisor))
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident, $inner:ident, adjust_rem
    ) => {
        $(#[$meta])*
        #[inline]
        pub fn $name<T>(dividend: T, divisor: T) -> Option<T>
        where
            T: PrimInt + CheckedDiv + CheckedRem,
        {
            dividend.checked_rem(&divisor)?;
            Some($inner(dividend, divisor))
        }
    };
}

checked_div_fn!(
    /// Non-panicking form of [`div_truncated`].
    ///
    /// Returns `None` on a zero divisor or when the quotient overflows
    /// (`MIN / -1`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use plinth_core::num::div::int::checked_div_truncated;
    /// assert_eq!(checked_div_truncated(13, 4), Some(3));
    /// assert_eq!(checked_div_truncated(13, 0), None);
    /// assert_eq!(checked_div_truncated(i32::MIN, -1), None);
    /// ```
    checked_div_truncated,
    div_truncated,
    adjust_div
);

checked_div_fn!(
    /// Non-panicking form of [`mod_truncated`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use plinth_core::num::div::int::checked_mod_truncated;
    /// assert_eq!(checked_mod_truncated(-13, 4), Some(-1));
    /// assert_eq!(checked_mod_truncated(13, 0), None);
    /// ```
    checked_mod_truncated,
    mod_truncated,
    adjust_rem
);

checked_div_fn!(
    /// Non-panicking form of [`div_floored`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use plinth_core::num::div::int::checked_div_floored;
    /// assert_eq!(checked_div_floored(-13, 4), Some(-4));
    /// assert_eq!(checked_div_floored(13, 0), None);
    /// ```
    checked_div_floored,
    div_floored,
    adjust_div
);

checked_div_fn!(
    /// Non-panicking form of [`mod_floored`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use plinth_core::num::div::int::checked_mod_floored;
    /// assert_eq!(checked_mod_floored(13, -4), Some(-3));
    /// assert_eq!(checked_mod_floored(13, 0), None);
    /// ```
    checked_mod_floored,
    mod_floored,
    adjust_rem
);

checked_div_fn!(
    /// Non-panicking form of [`div_euclidean`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use plinth_core::num::div::int::checked_div_euclidean;
    /// assert_eq!(checked_div_euclidean(-13, -4), Some(4));
    /// assert_eq!(checked_div_euclidean(13, 0), None);
    /// ```
    checked_div_euclidean,
    div_euclidean,
    adjust_div
);

checked_div_fn!(
    /// Non-panicking form of [`mod_euclidean`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use plinth_core::num::div::int::checked_mod_euclidean;
    /// assert_eq!(checked_mod_euclidean(-13, 4), Some(3));
    /// assert_eq!(checked_mod_euclidean(13, 0), None);
    /// ```
    checked_mod_euclidean,
    mod_euclidean,
    adjust_rem
);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_truncated_table() {
        assert_eq!(div_truncated(13, 4), 3);
        assert_eq!(div_truncated(-13, 4), -3);
        assert_eq!(div_truncated(13, -4), -3);
        assert_eq!(div_truncated(-13, -4), 3);
        assert_eq!(mod_truncated(13, 4), 1);
        assert_eq!(mod_truncated(-13, 4), -1);
        assert_eq!(mod_truncated(13, -4), 1);
        assert_eq!(mod_truncated(-13, -4), -1);
    }

    #[test]
    fn test_floored_table() {
        assert_eq!(div_floored(13, 4), 3);
        assert_eq!(div_floored(-13, 4), -4);
        assert_eq!(div_floored(13, -4), -4);
        assert_eq!(div_floored(-13, -4), 3);
        assert_eq!(mod_floored(13, 4), 1);
        assert_eq!(mod_floored(-13, 4), 3);
        assert_eq!(mod_floored(13, -4), -3);
        assert_eq!(mod_floored(-13, -4), -1);
    }

    #[test]
    fn test_euclidean_table() {
        assert_eq!(div_euclidean(13, 4), 3);
        assert_eq!(div_euclidean(-13, 4), -4);
        assert_eq!(div_euclidean(13, -4), -3);
        assert_eq!(div_euclidean(-13, -4), 4);
        assert_eq!(mod_euclidean(13, 4), 1);
        assert_eq!(mod_euclidean(-13, 4), 3);
        assert_eq!(mod_euclidean(13, -4), 1);
        assert_eq!(mod_euclidean(-13, -4), 3);
    }

    #[test]
    fn test_euclidean_modulus_non_negative() {
        for n in -50i64..=50 {
            for d in [-7i64, -3, -1, 1, 3, 7] {
                assert!(mod_euclidean(n, d) >= 0, "mod_euclidean({}, {})", n, d);
            }
        }
    }

    #[test]
    fn test_modulus_signs() {
        for n in -50i32..=50 {
            for d in [-7i32, -3, 3, 7] {
                let t = mod_truncated(n, d);
                let f = mod_floored(n, d);
                if t != 0 {
                    assert_eq!(t.signum(), n.signum());
                }
                if f != 0 {
                    assert_eq!(f.signum(), d.signum());
                }
            }
        }
    }

    #[test]
    fn test_identity_exhaustive_small() {
        for n in -50i32..=50 {
            for d in -9i32..=9 {
                if d == 0 {
                    continue;
                }
                assert_eq!(n, d * div_truncated(n, d) + mod_truncated(n, d));
                assert_eq!(n, d * div_floored(n, d) + mod_floored(n, d));
                assert_eq!(n, d * div_euclidean(n, d) + mod_euclidean(n, d));
            }
        }
    }

    #[test]
    fn test_identity_randomized() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x706c696e7468);
        for _ in 0..10_000 {
            let n: i64 = rng.gen_range(-1_000_000..=1_000_000);
            let mut d: i64 = rng.gen_range(-10_000..=10_000);
            if d == 0 {
                d = 1;
            }
            assert_eq!(n, d * div_truncated(n, d) + mod_truncated(n, d));
            assert_eq!(n, d * div_floored(n, d) + mod_floored(n, d));
            assert_eq!(n, d * div_euclidean(n, d) + mod_euclidean(n, d));
        }
    }

    #[test]
    fn test_unsigned_families_coincide() {
        // Without signs the three conventions agree.
        assert_eq!(div_truncated(13u32, 4u32), 3);
        assert_eq!(div_floored(13u32, 4u32), 3);
        assert_eq!(div_euclidean(13u32, 4u32), 3);
        assert_eq!(mod_truncated(13u32, 4u32), 1);
        assert_eq!(mod_floored(13u32, 4u32), 1);
        assert_eq!(mod_euclidean(13u32, 4u32), 1);
    }

    #[test]
    #[should_panic(expected = "zero divisor")]
    fn test_div_floored_zero_divisor() {
        let _ = div_floored(13, 0);
    }

    #[test]
    #[should_panic(expected = "zero divisor")]
    fn test_mod_euclidean_zero_divisor() {
        let _ = mod_euclidean(13, 0);
    }

    #[test]
    fn test_checked_variants() {
        assert_eq!(checked_div_truncated(13, 4), Some(3));
        assert_eq!(checked_div_floored(-13, 4), Some(-4));
        assert_eq!(checked_div_euclidean(13, -4), Some(-3));
        assert_eq!(checked_mod_truncated(-13, 4), Some(-1));
        assert_eq!(checked_mod_floored(13, -4), Some(-3));
        assert_eq!(checked_mod_euclidean(-13, -4), Some(3));

        assert_eq!(checked_div_truncated(13, 0), None);
        assert_eq!(checked_div_floored(13, 0), None);
        assert_eq!(checked_div_euclidean(13, 0), None);
        assert_eq!(checked_mod_truncated(13, 0), None);
        assert_eq!(checked_mod_floored(13, 0), None);
        assert_eq!(checked_mod_euclidean(13, 0), None);
    }

    #[test]
    fn test_checked_min_by_minus_one() {
        assert_eq!(checked_div_truncated(i32::MIN, -1), None);
        assert_eq!(checked_div_floored(i32::MIN, -1), None);
        assert_eq!(checked_div_euclidean(i32::MIN, -1), None);
        // `checked_rem` reports MIN % -1 as overflow as well.
        assert_eq!(checked_mod_truncated(i32::MIN, -1), None);
        assert_eq!(checked_mod_floored(i32::MIN, -1), None);
        assert_eq!(checked_mod_euclidean(i32::MIN, -1), None);
    }
}
