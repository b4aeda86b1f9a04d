//! Routes
//!
//! Route handlers organized by functionality.

pub mod callbacks;
pub mod page;
