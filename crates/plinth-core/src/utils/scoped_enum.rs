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

//! # Family-Scoped Enumeration Adapter
//!
//! A transparent wrapper that confines an enumerator to its own
//! enumeration family. Two `ScopedEnum` values are comparable only when
//! they wrap the same family; mixing families is a compile-time type
//! error, and the only way out of the adapter is an *explicit* conversion
//! to the underlying integer. No conversion from integers exists.
//!
//! ## Motivation
//!
//! Enumerations from different domains frequently share numeric values.
//! An equality check that crosses families therefore type-checks in
//! weaker designs and silently compares unrelated meanings. Tagging the
//! wrapper with the family type (the same phantom-discipline as
//! strongly-typed indices) moves that mistake from runtime to the type
//! checker.
//!
//! ## Usage
//!
//! ```rust
//! use plinth_core::{enum_family, utils::scoped_enum::ScopedEnum};
//!
//! enum_family! {
//!     pub enum Color {
//!         Red = 0,
//!         Green = 1,
//!         Blue = 2,
//!     }
//! }
//!
//! let c = ScopedEnum::new(Color::Green);
//! assert_eq!(c, Color::Green);
//! assert_eq!(c.to_underlying(), 1);
//! ```

/// A trait tagging an enumeration family for use with [`ScopedEnum`].
///
/// `NAME` feeds `Debug`/`Display`, `ZERO` is the family's zero-valued
/// member (the adapter's default), and `to_underlying` exposes the
/// enumerator's numeric value for explicit conversion.
///
/// Usually implemented through [`enum_family!`](crate::enum_family)
/// rather than by hand.
pub trait EnumFamily: Copy + Eq {
    /// Human-readable family name used for `Debug` and `Display`.
    const NAME: &'static str;

    /// The zero-valued member the adapter defaults to.
    const ZERO: Self;

    /// Returns the enumerator's underlying numeric value.
    fn to_underlying(self) -> i64;
}

/// An adapter wrapping exactly one enumerator of the family `E`.
///
/// Equality is defined against the same family only (either another
/// adapter or a bare enumerator); adapters of different families do not
/// type-check in a comparison. Conversion to the underlying integer is
/// always available but always explicit.
///
/// # Examples
///
/// ```rust
/// use plinth_core::{enum_family, utils::scoped_enum::ScopedEnum};
///
/// enum_family! {
///     pub enum Direction {
///         North = 0,
///         East = 1,
///         South = 2,
///         West = 3,
///     }
/// }
///
/// let d: ScopedEnum<Direction> = Default::default();
/// assert_eq!(d, Direction::North);
/// assert_eq!(i64::from(ScopedEnum::new(Direction::West)), 3);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopedEnum<E>
where
    E: EnumFamily,
{
    value: E,
}

impl<E> ScopedEnum<E>
where
    E: EnumFamily,
{
    /// Wraps an enumerator of the family `E`.
    #[inline]
    pub const fn new(value: E) -> Self {
        Self { value }
    }

    /// Returns the wrapped enumerator.
    #[inline]
    pub const fn get(&self) -> E {
        self.value
    }

    /// Returns the underlying numeric value of the wrapped enumerator.
    ///
    /// This is the only conversion out of the adapter, and it is always
    /// explicit; there is no conversion back from an integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use plinth_core::{enum_family, utils::scoped_enum::ScopedEnum};
    /// enum_family! {
    ///     pub enum Priority {
    ///         Low = 0,
    ///         High = 10,
    ///     }
    /// }
    ///
    /// assert_eq!(ScopedEnum::new(Priority::High).to_underlying(), 10);
    /// ```
    #[inline]
    pub fn to_underlying(&self) -> i64 {
        self.value.to_underlying()
    }

    /// Returns `true` if the wrapped enumerator is the family's
    /// zero-valued member.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == E::ZERO
    }

    /// Exchanges the wrapped enumerators of two adapters of the same
    /// family. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use plinth_core::{enum_family, utils::scoped_enum::ScopedEnum};
    /// enum_family! {
    ///     pub enum Phase {
    ///         Solid = 0,
    ///         Liquid = 1,
    ///     }
    /// }
    ///
    /// let mut a = ScopedEnum::new(Phase::Solid);
    /// let mut b = ScopedEnum::new(Phase::Liquid);
    /// a.swap(&mut b);
    /// assert_eq!(a, Phase::Liquid);
    /// assert_eq!(b, Phase::Solid);
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.value, &mut other.value);
    }
}

impl<E> Default for ScopedEnum<E>
where
    E: EnumFamily,
{
    #[inline]
    fn default() -> Self {
        Self::new(E::ZERO)
    }
}

impl<E> From<E> for ScopedEnum<E>
where
    E: EnumFamily,
{
    #[inline]
    fn from(value: E) -> Self {
        Self::new(value)
    }
}

impl<E> From<ScopedEnum<E>> for i64
where
    E: EnumFamily,
{
    #[inline]
    fn from(scoped: ScopedEnum<E>) -> Self {
        scoped.to_underlying()
    }
}

impl<E> PartialEq<E> for ScopedEnum<E>
where
    E: EnumFamily,
{
    #[inline]
    fn eq(&self, other: &E) -> bool {
        self.value == *other
    }
}

impl<E> std::fmt::Debug for ScopedEnum<E>
where
    E: EnumFamily,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", E::NAME, self.value.to_underlying())
    }
}

impl<E> std::fmt::Display for ScopedEnum<E>
where
    E: EnumFamily,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", E::NAME, self.value.to_underlying())
    }
}

/// Declares an enumeration family for use with [`ScopedEnum`].
///
/// Defines the enum with explicit discriminants, derives the usual
/// traits, implements [`EnumFamily`] (the first listed member is the
/// family's zero-valued member), and implements the bare-enumerator
/// comparison in both directions. Distinct families declared this way
/// never compare equal through the adapter, even when their members share
/// numeric values — such a comparison does not type-check.
///
/// # Examples
///
/// ```rust
/// use plinth_core::{enum_family, utils::scoped_enum::ScopedEnum};
///
/// enum_family! {
///     pub enum Suit {
///         Clubs = 0,
///         Diamonds = 1,
///         Hearts = 2,
///         Spades = 3,
///     }
/// }
///
/// assert_eq!(ScopedEnum::new(Suit::Hearts).to_underlying(), 2);
/// ```
#[macro_export]
macro_rules! enum_family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $first:ident = $first_value:expr
            $(, $member:ident = $value:expr)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $first = $first_value,
            $($member = $value,)*
        }

        impl $crate::utils::scoped_enum::EnumFamily for $name {
            const NAME: &'static str = ::std::stringify!($name);
            const ZERO: Self = $name::$first;

            #[inline]
            fn to_underlying(self) -> i64 {
                self as i64
            }
        }

        impl ::std::cmp::PartialEq<$crate::utils::scoped_enum::ScopedEnum<$name>> for $name {
            #[inline]
            fn eq(&self, other: &$crate::utils::scoped_enum::ScopedEnum<$name>) -> bool {
                *self == other.get()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    enum_family! {
        enum Color {
            Red = 0,
            Green = 1,
            Blue = 2,
        }
    }

    enum_family! {
        enum Ink {
            Cyan = 0,
            Magenta = 1,
            Yellow = 2,
        }
    }

    #[test]
    fn test_construction_and_get() {
        let c = ScopedEnum::new(Color::Blue);
        assert_eq!(c.get(), Color::Blue);

        let via_from: ScopedEnum<Color> = Color::Red.into();
        assert_eq!(via_from.get(), Color::Red);
    }

    #[test]
    fn test_default_is_zero_member() {
        let c: ScopedEnum<Color> = Default::default();
        assert_eq!(c, Color::Red);
        assert!(c.is_zero());
        assert!(!ScopedEnum::new(Color::Green).is_zero());
    }

    #[test]
    fn test_same_family_comparison() {
        let red = ScopedEnum::new(Color::Red);
        let green = ScopedEnum::new(Color::Green);

        assert_eq!(red, red);
        assert_ne!(red, green);

        // Comparison against the bare enumerator, both directions.
        assert_eq!(red, Color::Red);
        assert_ne!(red, Color::Green);
        assert_eq!(Color::Red, red);
        assert_ne!(Color::Green, red);
    }

    #[test]
    fn test_cross_family_is_a_type_error() {
        // Color::Red and Ink::Cyan share the numeric value 0, but the
        // adapters are not comparable; the following does not compile:
        //
        //     ScopedEnum::new(Color::Red) == ScopedEnum::new(Ink::Cyan)
        //
        // Only the explicit integer conversions may meet.
        let color = ScopedEnum::new(Color::Red);
        let ink = ScopedEnum::new(Ink::Cyan);
        assert_eq!(color.to_underlying(), ink.to_underlying());
    }

    #[test]
    fn test_underlying_conversion() {
        assert_eq!(ScopedEnum::new(Color::Red).to_underlying(), 0);
        assert_eq!(ScopedEnum::new(Color::Green).to_underlying(), 1);
        assert_eq!(ScopedEnum::new(Color::Blue).to_underlying(), 2);
        assert_eq!(i64::from(ScopedEnum::new(Ink::Yellow)), 2);
    }

    #[test]
    fn test_swap() {
        let mut a = ScopedEnum::new(Color::Green);
        let mut b = ScopedEnum::new(Color::Blue);
        a.swap(&mut b);

        assert_eq!(a, Color::Blue);
        assert_eq!(b, Color::Green);
    }

    #[test]
    fn test_debug_and_display() {
        let c = ScopedEnum::new(Color::Blue);
        assert_eq!(format!("{}", c), "Color(2)");
        assert_eq!(format!("{:?}", c), "Color(2)");
    }
}
