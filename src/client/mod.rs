//! Fetch client for the remote job listing API.
//!
//! # Modules
//!
//! - `source`: [`JobSource`] trait and the in-memory [`StaticJobSource`]
//! - `http`: [`HttpJobSource`], the blocking HTTP implementation

pub mod http;
pub mod source;

pub use http::{HttpJobSource, TOKEN_HEADER};
pub use source::{JobSource, StaticJobSource};
