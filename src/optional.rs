//! # Optional Module
//!
//! A container holding zero or one value of an arbitrary type.
//!
//! Presence is tracked by the variant itself, so there is no flag that can
//! drift out of sync with the slot. Reads hand back clones; callers never get
//! a live alias into the container.
//!
//! ## Example
//!
//! ```
//! use optional::Optional;
//!
//! let name = Optional::new("hello".to_string());
//! assert!(name.is_present());
//! assert_eq!(name.get(), ("hello".to_string(), true));
//!
//! let count: Optional<i32> = Optional::empty();
//! assert_eq!(count.get(), (0, false));
//! assert_eq!(count.or_else(123), 123);
//! ```

use std::fmt;

/// Zero-or-one value of type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// No value is held
    Absent,
    /// Exactly one owned value is held
    Present(T),
}

impl<T> Optional<T> {
    /// Creates a container that owns `value`.
    pub fn new(value: T) -> Self {
        Optional::Present(value)
    }

    /// Creates a container holding nothing.
    pub const fn empty() -> Self {
        Optional::Absent
    }

    /// Returns true iff a value is held.
    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Borrows the held value, if any.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Optional::Present(v) => Some(v),
            Optional::Absent => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T: Clone> Optional<T> {
    /// Returns a copy of the held value, or `default` when absent.
    pub fn or_else(&self, default: T) -> T {
        match self {
            Optional::Present(v) => v.clone(),
            Optional::Absent => default,
        }
    }
}

impl<T: Clone + Default> Optional<T> {
    /// Returns `(value, true)` when present and `(T::default(), false)` when
    /// absent.
    ///
    /// The placeholder returned for an absent container looks like a real
    /// value, so check the flag before using it.
    pub fn get(&self) -> (T, bool) {
        match self {
            Optional::Present(v) => (v.clone(), true),
            Optional::Absent => (T::default(), false),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Optional::Present(v),
            None => Optional::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(opt: Optional<T>) -> Self {
        match opt {
            Optional::Present(v) => Some(v),
            Optional::Absent => None,
        }
    }
}

// Absent renders as nothing.
impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(v) => write!(f, "{}", v),
            Optional::Absent => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_absent() {
        let o: Optional<String> = Optional::default();
        assert_eq!(o, Optional::empty());
        assert!(o.is_absent());
    }

    #[test]
    fn test_get_returns_a_copy() {
        let mut original = vec![1, 2, 3];
        let o = Optional::new(original.clone());
        let (mut copy, ok) = o.get();
        assert!(ok);
        copy.push(4);
        original.push(5);
        assert_eq!(o, Optional::new(vec![1, 2, 3]));
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Optional::from(Some(7)), Optional::new(7));
        assert_eq!(Optional::<i32>::from(None), Optional::Absent);
        assert_eq!(Optional::new("x").into_option(), Some("x"));
        assert_eq!(Optional::<u8>::empty().as_option(), None);
        assert_eq!(Optional::new(3u8).as_option(), Some(&3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Optional::new(123).to_string(), "123");
        assert_eq!(Optional::<i32>::empty().to_string(), "");
    }
}
