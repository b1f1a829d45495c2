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

/// Rounds `value` as `floor(value + 0.5)`.
///
/// For non-negative operands this is "round half away from zero". For
/// negative operands the floor introduces an upward bias
/// (`round_simple(-1.5) == -1.0`), which differs from symmetric rounding.
/// Callers rely on this exact behavior; do not "fix" it.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::round::round_simple;
/// assert_eq!(round_simple(0.49), 0.0);
/// assert_eq!(round_simple(0.50), 1.0);
/// assert_eq!(round_simple(1.50), 2.0);
/// assert_eq!(round_simple(-1.50), -1.0);
/// ```
#[inline]
pub fn round_simple<F>(value: F) -> F
where
    F: Float,
{
    let half = F::one() / (F::one() + F::one());
    (value + half).floor()
}

/// Rounds `value` to the nearest integer, resolving ties to the even
/// neighbor (banker's rounding).
///
/// A fractional part below one half rounds down, above one half rounds up,
/// and exactly one half rounds to whichever neighbor integer is even.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::num::round::round_half_to_even;
/// assert_eq!(round_half_to_even(0.5), 0.0);
/// assert_eq!(round_half_to_even(1.5), 2.0);
/// assert_eq!(round_half_to_even(2.5), 2.0);
/// assert_eq!(round_half_to_even(2.51), 3.0);
/// ```
#[inline]
pub fn round_half_to_even<F>(value: F) -> F
where
    F: Float,
{
    let two = F::one() + F::one();
    let half = F::one() / two;

    let floor = value.floor();
    let fraction = value - floor;

    if fraction < half {
        floor
    } else if fraction > half {
        floor + F::one()
    } else if (floor % two).abs() == F::zero() {
        // Tie with an even floor.
        floor
    } else {
        floor + F::one()
    }
}
