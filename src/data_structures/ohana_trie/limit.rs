// Copyright (c) 2025 Ohana Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Result-count limits for prefix enumeration.

use std::fmt;

/// Limit used when a caller does not supply one.
pub const DEFAULT_LIMIT: usize = 50;

/// Upper bound on the number of results a prefix enumeration may return.
///
/// Signed sentinels are accepted through the `From<i32>`/`From<i64>`
/// conversions: any negative number means [`Limit::Unbounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    /// Stop after this many results
    Bounded(usize),
    /// Return every match
    Unbounded,
}

impl Limit {
    /// Maximum number of results this limit allows.
    ///
    /// `Unbounded` caps at `usize::MAX`.
    pub fn cap(self) -> usize {
        match self {
            Limit::Bounded(n) => n,
            Limit::Unbounded => usize::MAX,
        }
    }

    /// Returns `true` once `collected` results satisfy this limit.
    pub fn is_reached(self, collected: usize) -> bool {
        collected >= self.cap()
    }
}

impl Default for Limit {
    fn default() -> Self {
        Limit::Bounded(DEFAULT_LIMIT)
    }
}

impl From<usize> for Limit {
    fn from(n: usize) -> Self {
        Limit::Bounded(n)
    }
}

impl From<Option<usize>> for Limit {
    fn from(n: Option<usize>) -> Self {
        n.map_or(Limit::Unbounded, Limit::Bounded)
    }
}

impl From<i64> for Limit {
    fn from(n: i64) -> Self {
        if n < 0 {
            Limit::Unbounded
        } else {
            // Saturate on targets where usize is narrower than i64
            Limit::Bounded(usize::try_from(n).unwrap_or(usize::MAX))
        }
    }
}

impl From<i32> for Limit {
    fn from(n: i32) -> Self {
        Limit::from(i64::from(n))
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Bounded(n) => write!(f, "{n}"),
            Limit::Unbounded => f.write_str("unbounded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(-1, Limit::Unbounded ; "minus one is unbounded")]
    #[test_case(-42, Limit::Unbounded ; "any negative is unbounded")]
    #[test_case(0, Limit::Bounded(0) ; "zero")]
    #[test_case(2, Limit::Bounded(2) ; "positive")]
    fn test_from_signed(raw: i32, expected: Limit) {
        assert_eq!(Limit::from(raw), expected);
    }

    #[test]
    fn test_cap() {
        assert_eq!(Limit::Bounded(3).cap(), 3);
        assert_eq!(Limit::Unbounded.cap(), usize::MAX);
        assert_eq!(Limit::default().cap(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_is_reached() {
        assert!(Limit::Bounded(0).is_reached(0));
        assert!(!Limit::Bounded(2).is_reached(1));
        assert!(Limit::Bounded(2).is_reached(2));
        assert!(!Limit::Unbounded.is_reached(usize::MAX - 1));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Limit::from(None), Limit::Unbounded);
        assert_eq!(Limit::from(Some(5)), Limit::Bounded(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Limit::Bounded(10).to_string(), "10");
        assert_eq!(Limit::Unbounded.to_string(), "unbounded");
    }
}
