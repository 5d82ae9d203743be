use std::fmt;

/// A lazy, finite, restartable sequence of 32-bit integers.
///
/// The direction is fixed at construction: the range ascends when
/// `start < end` and descends otherwise. An inclusive range always contains
/// `end`; an exclusive range stops one step short of it.
///
/// Each call to [`RangeValue::iter`] starts a fresh iteration, so the same
/// value can be walked any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeValue {
    start:     i32,
    end:       i32,
    inclusive: bool,
}

impl RangeValue {
    /// Creates the range `start..end`, including `end`.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::range::RangeValue;
    ///
    /// let up: Vec<i32> = RangeValue::inclusive(1, 3).iter().collect();
    /// assert_eq!(up, vec![1, 2, 3]);
    ///
    /// let down: Vec<i32> = RangeValue::inclusive(3, 1).iter().collect();
    /// assert_eq!(down, vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub const fn inclusive(start: i32, end: i32) -> Self {
        Self { start,
               end,
               inclusive: true }
    }

    /// Creates the range `start..<end`, excluding `end`.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::range::RangeValue;
    ///
    /// let up: Vec<i32> = RangeValue::exclusive(1, 3).iter().collect();
    /// assert_eq!(up, vec![1, 2]);
    ///
    /// let down: Vec<i32> = RangeValue::exclusive(3, 1).iter().collect();
    /// assert_eq!(down, vec![3, 2]);
    /// ```
    #[must_use]
    pub const fn exclusive(start: i32, end: i32) -> Self {
        Self { start,
               end,
               inclusive: false }
    }

    /// First bound of the range.
    #[must_use]
    pub const fn start(&self) -> i32 {
        self.start
    }

    /// Second bound of the range.
    #[must_use]
    pub const fn end(&self) -> i32 {
        self.end
    }

    /// Whether `end` belongs to the range.
    #[must_use]
    pub const fn is_inclusive(&self) -> bool {
        self.inclusive
    }

    /// Starts a new iteration over the range.
    #[must_use]
    pub fn iter(&self) -> RangeIter {
        let start = i64::from(self.start);
        let end = i64::from(self.end);

        if self.start < self.end {
            RangeIter { next: start,
                        stop: if self.inclusive { end + 1 } else { end },
                        step: 1 }
        } else {
            RangeIter { next: start,
                        stop: if self.inclusive { end - 1 } else { end },
                        step: -1 }
        }
    }

    /// Number of integers the range yields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().len()
    }

    /// Returns `true` when the range yields nothing (`n..<n`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IntoIterator for &RangeValue {
    type IntoIter = RangeIter;
    type Item = i32;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for RangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, n) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{n}")?;
        }
        write!(f, "]")
    }
}

/// Iterator over a [`RangeValue`].
///
/// Bounds are tracked in `i64` so that ranges touching `i32::MIN` or
/// `i32::MAX` terminate without overflow.
#[derive(Debug, Clone)]
pub struct RangeIter {
    next: i64,
    stop: i64,
    step: i64,
}

impl Iterator for RangeIter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let remaining = if self.step > 0 { self.next < self.stop } else { self.next > self.stop };
        if !remaining {
            return None;
        }
        let current = i32::try_from(self.next).ok()?;
        self.next += self.step;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.stop - self.next) * self.step;
        let remaining = usize::try_from(remaining.max(0)).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RangeIter {}
