//! View mode state type for the application.
//!
//! The shell shows one of three screens at a time:
//! - **Listings**: the filtered, sorted, paginated job list
//! - **Applications**: applied jobs split into recent and older
//! - **Stats**: aggregate salary, level and location figures
//!
//! # Example
//!
//! ```rust
//! use jobboard::ViewMode;
//!
//! assert_eq!(ViewMode::default(), ViewMode::Listings);
//! ```

/// Screen currently presented to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Paginated listing of jobs not yet applied to.
    #[default]
    Listings,

    /// Applications tracker.
    Applications,

    /// Aggregate statistics over the whole collection.
    Stats,
}

impl ViewMode {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Listings => "Job Listings",
            Self::Applications => "Applications",
            Self::Stats => "Statistics",
        }
    }
}
