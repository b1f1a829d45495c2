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

use crate::utils::boolean::BooleanTest;

/// Cloning capability viewed through an interface `T`.
///
/// `clone_boxed` allocates a fresh copy of the receiver's *concrete* type
/// and returns it behind the interface. Every sized `Clone` type has this
/// capability for itself via the blanket impl; for trait objects, the
/// [`deep_cloneable!`](crate::deep_cloneable) macro generates the glue.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::ptr::CloneBoxed;
/// let value = String::from("plinth");
/// let boxed: Box<String> = value.clone_boxed();
/// assert_eq!(*boxed, value);
/// ```
pub trait CloneBoxed<T: ?Sized> {
    /// Returns a freshly allocated copy of `self` with the same concrete
    /// type, owned through the interface `T`.
    fn clone_boxed(&self) -> Box<T>;
}

impl<T> CloneBoxed<T> for T
where
    T: Clone,
{
    #[inline]
    fn clone_boxed(&self) -> Box<T> {
        Box::new(self.clone())
    }
}

/// Wires up [`CloneBoxed`] for a trait-object interface.
///
/// For an object trait `$object`, this generates an object-safe helper
/// trait `$helper` (which `$object` must list as a supertrait), a blanket
/// impl of `$helper` for every `Clone` implementor of `$object`, and the
/// `CloneBoxed<dyn $object>` impl for `dyn $object` that dispatches
/// through it. Concrete implementors only need to derive `Clone`.
///
/// # Examples
///
/// ```rust
/// use plinth_core::{deep_cloneable, ptr::DeepPtr};
///
/// trait Shape: ShapeClone {
///     fn area(&self) -> f64;
/// }
/// deep_cloneable!(Shape => ShapeClone);
///
/// #[derive(Clone)]
/// struct Square {
///     side: f64,
/// }
///
/// impl Shape for Square {
///     fn area(&self) -> f64 {
///         self.side * self.side
///     }
/// }
///
/// let original = DeepPtr::<dyn Shape>::from_boxed(Box::new(Square { side: 2.0 }));
/// let copy = original.clone();
/// assert_eq!(copy.area(), 4.0);
/// ```
#[macro_export]
macro_rules! deep_cloneable {
    ($object:ident => $vis:vis $helper:ident) => {
        /// Object-safe cloning hook generated by `deep_cloneable!`.
        $vis trait $helper {
            /// Returns a boxed copy of `self` with its concrete type intact.
            fn clone_boxed_object(&self) -> ::std::boxed::Box<dyn $object>;
        }

        impl<C> $helper for C
        where
            C: $object + ::std::clone::Clone + 'static,
        {
            #[inline]
            fn clone_boxed_object(&self) -> ::std::boxed::Box<dyn $object> {
                ::std::boxed::Box::new(self.clone())
            }
        }

        impl $crate::ptr::CloneBoxed<dyn $object> for dyn $object {
            #[inline]
            fn clone_boxed(&self) -> ::std::boxed::Box<dyn $object> {
                $helper::clone_boxed_object(self)
            }
        }
    };
}

/// An owning pointer with value semantics: copying performs a deep clone
/// of the owned value, never aliasing.
///
/// The pointer may be empty. When it owns a value, cloning allocates a new
/// instance of the value's *concrete runtime type* through
/// [`CloneBoxed`], so a `DeepPtr<dyn Trait>` constructed from a concrete
/// implementor reproduces that implementor on every copy. Equality is
/// evaluated through the declared type `T`'s comparison.
///
/// # Invariants
///
/// Exactly one pointer owns a given heap value at a time; copies always
/// allocate distinct storage.
///
/// # Examples
///
/// ```rust
/// # use plinth_core::ptr::DeepPtr;
/// let a = DeepPtr::new(vec![1, 2, 3]);
/// let mut b = a.clone();
/// b.as_mut().unwrap().push(4);
///
/// assert_eq!(*a, vec![1, 2, 3]);
/// assert_eq!(*b, vec![1, 2, 3, 4]);
/// ```
pub struct DeepPtr<T>
where
    T: ?Sized + CloneBoxed<T>,
{
    inner: Option<Box<T>>,
}

impl<T> DeepPtr<T>
where
    T: ?Sized + CloneBoxed<T>,
{
    /// Creates an empty pointer. Its boolean test is `false` and it
    /// compares equal to every other empty pointer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use plinth_core::ptr::DeepPtr;
    /// let p: DeepPtr<i32> = DeepPtr::empty();
    /// assert!(p.is_empty());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self { inner: None }
    }

    /// Creates a pointer owning `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use plinth_core::ptr::DeepPtr;
    /// let p = DeepPtr::new(42);
    /// assert_eq!(*p, 42);
    /// ```
    #[inline]
    pub fn new(value: T) -> Self
    where
        T: Sized,
    {
        Self {
            inner: Some(Box::new(value)),
        }
    }

    /// Takes ownership of an already boxed value. Accepts a boxed
    /// concrete type where `T` is a trait object (unsizing applies at the
    /// call site), and the concrete type is what later clones reproduce.
    #[inline]
    pub fn from_boxed(boxed: Box<T>) -> Self {
        Self { inner: Some(boxed) }
    }

    /// Returns `true` if the pointer owns a value.
    #[inline]
    pub fn is_some(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns `true` if the pointer owns nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Borrows the owned value, if any.
    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        self.inner.as_deref()
    }

    /// Mutably borrows the owned value, if any.
    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        self.inner.as_deref_mut()
    }

    /// Releases the currently owned value (if any) and takes ownership of
    /// `boxed` instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use plinth_core::ptr::DeepPtr;
    /// let mut p = DeepPtr::new(1);
    /// p.reset(Box::new(2));
    /// assert_eq!(*p, 2);
    /// ```
    #[inline]
    pub fn reset(&mut self, boxed: Box<T>) {
        self.inner = Some(boxed);
    }

    /// Releases the currently owned value, leaving the pointer empty.
    #[inline]
    pub fn clear(&mut self) {
        self.inner = None;
    }

    /// Relinquishes ownership of the boxed value, leaving the pointer
    /// empty.
    #[inline]
    pub fn take(&mut self) -> Option<Box<T>> {
        self.inner.take()
    }

    /// Exchanges the owned values of two pointers. Never fails and never
    /// allocates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use plinth_core::ptr::DeepPtr;
    /// let mut a = DeepPtr::new(1);
    /// let mut b = DeepPtr::empty();
    /// a.swap(&mut b);
    /// assert!(a.is_empty());
    /// assert_eq!(*b, 1);
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.inner, &mut other.inner);
    }
}

impl<T> Clone for DeepPtr<T>
where
    T: ?Sized + CloneBoxed<T>,
{
    /// Deep clone: allocates a new instance of the owned value's concrete
    /// runtime type using that type's own copy behavior.
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.as_deref().map(|value| value.clone_boxed()),
        }
    }

    /// Clone-assignment with the strong guarantee: the replacement is
    /// fully constructed before the destination is modified, so a
    /// panicking clone leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let replacement = source.clone();
        *self = replacement;
    }
}

impl<T> Default for DeepPtr<T>
where
    T: ?Sized + CloneBoxed<T>,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::ops::Deref for DeepPtr<T>
where
    T: ?Sized + CloneBoxed<T>,
{
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        match self.inner.as_deref() {
            Some(value) => value,
            None => panic!("called `DeepPtr::deref` on an empty pointer"),
        }
    }
}

impl<T> std::ops::DerefMut for DeepPtr<T>
where
    T: ?Sized + CloneBoxed<T>,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        match self.inner.as_deref_mut() {
            Some(value) => value,
            None => panic!("called `DeepPtr::deref_mut` on an empty pointer"),
        }
    }
}

impl<T> PartialEq for DeepPtr<T>
where
    T: ?Sized + CloneBoxed<T> + PartialEq,
{
    /// Deep comparison through the declared type `T`: two empty pointers
    /// are equal; an empty and a non-empty pointer are not; two owned
    /// values compare by `T`'s equality (the same-allocation shortcut is
    /// only that, a shortcut).
    fn eq(&self, other: &Self) -> bool {
        match (self.inner.as_deref(), other.inner.as_deref()) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => std::ptr::eq(lhs, rhs) || lhs == rhs,
            _ => false,
        }
    }
}

impl<T> Eq for DeepPtr<T> where T: ?Sized + CloneBoxed<T> + Eq {}

impl<T> std::fmt::Debug for DeepPtr<T>
where
    T: ?Sized + CloneBoxed<T> + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.as_deref() {
            Some(value) => write!(f, "DeepPtr({:?})", value),
            None => write!(f, "DeepPtr(empty)"),
        }
    }
}

impl<T> BooleanTest for DeepPtr<T>
where
    T: ?Sized + CloneBoxed<T>,
{
    #[inline]
    fn boolean_test(&self) -> bool {
        self.inner.is_some()
    }
}

impl<T> std::ops::Not for &DeepPtr<T>
where
    T: ?Sized + CloneBoxed<T>,
{
    type Output = bool;

    #[inline]
    fn not(self) -> bool {
        !self.boolean_test()
    }
}

impl<T> From<Box<T>> for DeepPtr<T>
where
    T: ?Sized + CloneBoxed<T>,
{
    #[inline]
    fn from(boxed: Box<T>) -> Self {
        Self::from_boxed(boxed)
    }
}
