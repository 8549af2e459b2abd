//! Job source abstraction.
//!
//! The [`JobSource`] trait is the seam between the worker and wherever the listings
//! come from. The worker owns a `Box<dyn JobSource>` and never knows whether it talks
//! to HTTP or to a canned fixture.

use crate::domain::{FetchError, Job};

/// Something that can produce the full batch of job listings.
///
/// # Examples
///
/// ```
/// use jobboard::client::{JobSource, StaticJobSource};
///
/// let source = StaticJobSource::new(Vec::new());
/// assert!(source.fetch_jobs()?.is_empty());
/// # Ok::<(), jobboard::FetchError>(())
/// ```
pub trait JobSource: Send {
    /// Fetches every listing in one call.
    ///
    /// The batch is returned as the source produced it: unfiltered and unsorted.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing the single reason the attempt failed.
    fn fetch_jobs(&self) -> Result<Vec<Job>, FetchError>;
}

/// In-memory source returning a fixed result.
///
/// Useful for offline runs and tests of the layers above the client.
#[derive(Debug, Clone)]
pub struct StaticJobSource {
    result: Result<Vec<Job>, FetchError>,
}

impl StaticJobSource {
    #[must_use]
    pub const fn new(jobs: Vec<Job>) -> Self {
        Self { result: Ok(jobs) }
    }

    #[must_use]
    pub const fn failing(error: FetchError) -> Self {
        Self { result: Err(error) }
    }
}

impl JobSource for StaticJobSource {
    fn fetch_jobs(&self) -> Result<Vec<Job>, FetchError> {
        self.result.clone()
    }
}
