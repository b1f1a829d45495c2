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

/// A capability granting a type boolean-context usability.
///
/// Implementors define `boolean_test`; call sites use it directly in
/// conditionals (`if value.boolean_test()`), and
/// [`impl_boolean_not!`](crate::impl_boolean_not) adds the `!` operator
/// on references. No numeric, pointer, or cross-type comparison behavior
/// is derivable from this trait; truthiness is the whole contract.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::utils::boolean::BooleanTest;
/// struct Connection {
///     open: bool,
/// }
///
/// impl BooleanTest for Connection {
///     fn boolean_test(&self) -> bool {
///         self.open
///     }
/// }
///
/// let c = Connection { open: false };
/// assert!(c.is_falsy());
/// ```
pub trait BooleanTest {
    /// Returns the truth value of `self`.
    fn boolean_test(&self) -> bool;

    /// Returns `true` if `self` is falsy.
    #[inline]
    fn is_falsy(&self) -> bool {
        !self.boolean_test()
    }
}

/// Implements `std::ops::Not` for `&Type`, yielding `bool`, in terms of
/// the type's [`BooleanTest`] impl.
///
/// This provides the negation operator of the boolean-context contract:
/// `!&value` is the inverse truth value, and double negation restores it.
///
/// # Examples
///
/// ```rust
/// use plinth_core::{impl_boolean_not, utils::boolean::BooleanTest};
///
/// struct Flag(bool);
///
/// impl BooleanTest for Flag {
///     fn boolean_test(&self) -> bool {
///         self.0
///     }
/// }
///
/// impl_boolean_not!(Flag);
///
/// let f = Flag(false);
/// assert!(!&f);
/// assert!(!!!&f);
/// ```
#[macro_export]
macro_rules! impl_boolean_not {
    ($t:ty) => {
        impl ::std::ops::Not for &$t {
            type Output = bool;

            #[inline]
            fn not(self) -> bool {
                !$crate::utils::boolean::BooleanTest::boolean_test(self)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Gate {
        raised: bool,
    }

    impl BooleanTest for Gate {
        fn boolean_test(&self) -> bool {
            self.raised
        }
    }

    impl_boolean_not!(Gate);

    #[test]
    fn test_truthy_in_conditional() {
        let open = Gate { raised: true };
        let shut = Gate { raised: false };

        if open.boolean_test() {
            if shut.boolean_test() {
                panic!("falsy value behaved as truthy");
            }
        } else {
            panic!("truthy value behaved as falsy");
        }
    }

    #[test]
    fn test_negation_operator() {
        let open = Gate { raised: true };
        let shut = Gate { raised: false };

        assert!(!&shut);
        assert!(!!&open);
        assert!(!!!&shut);
    }

    #[test]
    fn test_is_falsy() {
        assert!(Gate { raised: false }.is_falsy());
        assert!(!Gate { raised: true }.is_falsy());
    }
}
