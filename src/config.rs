//! Sparsification Configuration
//!
//! Builder-style settings for a [`TopNSelector`](crate::TopNSelector).
//!
//! # Examples
//!
//! ```
//! use escaso::{Backend, SparsifyConfig, TopNSelector};
//!
//! // Deterministic ties, single-threaded
//! let reference = SparsifyConfig::reference();
//!
//! // Custom configuration using builder pattern
//! let custom = SparsifyConfig::new()
//!     .with_backend(Backend::Heap)
//!     .with_parallel_threshold(1 << 20)
//!     .build();
//!
//! let selector = TopNSelector::from_config(&custom);
//! assert_eq!(selector.backend(), Backend::Heap);
//! ```

use crate::Backend;

/// Default element count at which matrix rows are processed in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64 * 1024;

/// Configuration for top-N sparsification
///
/// `parallel_threshold` only has an effect when the crate is built with the
/// `parallel` feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparsifyConfig {
    /// Selection strategy
    pub backend: Backend,
    /// Matrices with at least this many elements are split across threads
    pub parallel_threshold: usize,
}

impl Default for SparsifyConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Auto,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SparsifyConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection strategy
    ///
    /// # Examples
    ///
    /// ```
    /// use escaso::{Backend, SparsifyConfig};
    ///
    /// let config = SparsifyConfig::new().with_backend(Backend::Sort);
    /// assert_eq!(config.backend, Backend::Sort);
    /// ```
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Set the parallel row-processing threshold in elements
    ///
    /// `usize::MAX` disables parallel processing.
    pub fn with_parallel_threshold(mut self, elements: usize) -> Self {
        self.parallel_threshold = elements;
        self
    }

    /// Finalize configuration (no-op, for builder pattern consistency)
    pub fn build(self) -> Self {
        self
    }

    /// Reference configuration preset
    ///
    /// - Sort backend (lowest index wins ties)
    /// - Never parallel
    ///
    /// Suitable for golden outputs and cross-checking other backends.
    ///
    /// # Examples
    ///
    /// ```
    /// use escaso::{Backend, SparsifyConfig};
    ///
    /// let config = SparsifyConfig::reference();
    /// assert_eq!(config.backend, Backend::Sort);
    /// assert_eq!(config.parallel_threshold, usize::MAX);
    /// ```
    pub fn reference() -> Self {
        Self::new()
            .with_backend(Backend::Sort)
            .with_parallel_threshold(usize::MAX)
    }

    /// Throughput configuration preset
    ///
    /// - Partition backend
    /// - Parallel from 4096 elements
    pub fn throughput() -> Self {
        Self::new()
            .with_backend(Backend::Partition)
            .with_parallel_threshold(4096)
    }
}
