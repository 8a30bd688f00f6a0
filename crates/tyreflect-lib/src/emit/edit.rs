use std::ops::Range;

/// A byte-range replacement against the original source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Range<usize>,
    pub replacement: String,
}

impl Edit {
    pub fn replace(range: Range<usize>, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::replace(at..at, text)
    }

    pub fn delete(range: Range<usize>) -> Self {
        Self::replace(range, String::new())
    }

    pub fn is_insertion(&self) -> bool {
        self.range.is_empty()
    }

    /// Whether the two edits claim a common byte.
    ///
    /// Insertions only conflict when they land strictly inside another edit.
    pub fn overlaps(&self, other: &Edit) -> bool {
        if self.is_insertion() && other.is_insertion() {
            return self.range.start == other.range.start;
        }
        self.range.start < other.range.end && other.range.start < self.range.end
    }
}
