//! Configuration options for the sequence algebra.

/// Options that bound and tune the algebra.
///
/// # Example
///
/// ```
/// use tyseq_core::AlgebraOptions;
///
/// let options = AlgebraOptions {
///     max_len: 64,
///     ..AlgebraOptions::default()
/// };
/// assert_eq!(options.group_threshold, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgebraOptions {
    /// Longest sequence `join`, `normalize` and `repeat` may build.
    ///
    /// Plays the role of a compiler's instantiation limit: a result that
    /// would be longer fails with `SeqError::LengthLimit`. Operations that
    /// only select, drop or rewrite elements of an existing sequence are
    /// never limited.
    ///
    /// Default: 4096
    pub max_len: usize,

    /// Minimum number of occurrences before consolidation groups a type.
    ///
    /// Values below 2 behave as 2, since a group always stands for at
    /// least two occurrences.
    ///
    /// Default: 2
    pub group_threshold: usize,
}

impl AlgebraOptions {
    /// Set the maximum result length.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Set the consolidation threshold.
    pub fn with_group_threshold(mut self, group_threshold: usize) -> Self {
        self.group_threshold = group_threshold;
        self
    }

    pub(crate) fn effective_group_threshold(&self) -> usize {
        self.group_threshold.max(2)
    }
}

impl Default for AlgebraOptions {
    fn default() -> Self {
        Self {
            max_len: 4096,
            group_threshold: 2,
        }
    }
}
